//! Todo Widget Entry Point

mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod events;
mod logging;
mod models;
mod render;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::WidgetConfig::default().log_level);
    mount_to_body(|| view! { <App /> });
}
