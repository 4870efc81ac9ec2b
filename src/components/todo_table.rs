//! Todo Table Component
//!
//! Renders the row store. A single delegated click listener routes
//! checkbox and delete clicks to the controller.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::AppContext;
use crate::events::{ClickTarget, TableAction};
use crate::store::{keyed_rows, use_table_store, TableStateStoreFields};

#[component]
pub fn TodoTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_table_store();

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(target) = ClickTarget::from_event(&ev) else { return };
        if let Some(action) = TableAction::route(&target) {
            log::debug!("[TABLE] {:?}", action);
            ctx.dispatch(action);
        }
    };

    view! {
        <table class="todo-table" on:click=on_click>
            <tbody>
                <For
                    each=move || keyed_rows(&store.rows().read())
                    key=|(key, _)| key.clone()
                    children=move |(_, row)| {
                        let id = row.id.clone();
                        let completed = Signal::derive(move || {
                            store.rows().read().iter().any(|r| r.id == id && r.completed)
                        });
                        view! { <TodoRow row=row completed=completed /> }
                    }
                />
            </tbody>
        </table>
    }
}
