//! Application Context
//!
//! The controller, shared with components via the Leptos Context API.

use leptos::prelude::*;

use crate::controller::TodoListController;
use crate::events::TableAction;
use crate::storage::WidgetStorage;
use crate::store::StoreRenderer;

pub type AppController = TodoListController<WidgetStorage, StoreRenderer>;

/// App-wide handle to the controller
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<AppController, LocalStorage>,
}

impl AppContext {
    pub fn new(controller: AppController) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
        }
    }

    /// Submit the input text. Returns true when an item was added.
    pub fn submit(&self, text: &str) -> bool {
        self.controller
            .try_update_value(|c| c.submit(text))
            .flatten()
            .is_some()
    }

    /// Apply a routed table click
    pub fn dispatch(&self, action: TableAction) {
        let result = self.controller.try_update_value(|c| match &action {
            TableAction::Toggle { id, checked } => c.update_todo_item(id, *checked),
            TableAction::Delete { id } => c.delete_todo_item(id),
        });
        if let Some(Err(e)) = result {
            log::warn!("[APP] Ignoring {:?}: {}", action, e);
        }
    }
}
