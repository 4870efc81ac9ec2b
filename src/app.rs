//! Todo Widget App
//!
//! Root component: builds the controller and mounts the form and table.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TodoForm, TodoTable};
use crate::config::WidgetConfig;
use crate::context::AppContext;
use crate::controller::{browser_clock, TodoListController};
use crate::storage::WidgetStorage;
use crate::store::{StoreRenderer, TableState};

#[component]
pub fn App(#[prop(optional)] config: Option<WidgetConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let store = Store::new(TableState::default());

    // Loading renders the persisted rows into the store before first paint
    let controller = TodoListController::new(
        WidgetStorage::detect(),
        StoreRenderer::new(store),
        browser_clock(),
        &config,
    );

    provide_context(store);
    provide_context(config);
    provide_context(AppContext::new(controller));

    view! {
        <main class="todo-app">
            <h1>"Todo"</h1>
            <TodoForm />
            <TodoTable />
        </main>
    }
}
