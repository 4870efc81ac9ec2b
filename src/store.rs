//! Table State Store
//!
//! Rendered rows kept in a reactive_stores store. `StoreRenderer` is the
//! controller's view of it.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TodoItem;
use crate::render::TodoRenderer;

/// One rendered table row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowState {
    pub id: String,
    pub name: String,
    pub completed: bool,
}

/// Rows in display order, newest first
#[derive(Clone, Debug, Default, Store)]
pub struct TableState {
    pub rows: Vec<RowState>,
}

/// Type alias for the store
pub type TableStore = Store<TableState>;

/// Get the table store from context
pub fn use_table_store() -> TableStore {
    expect_context::<TableStore>()
}

/// Rows paired with a unique key: the id plus how many earlier rows share it
pub fn keyed_rows(rows: &[RowState]) -> Vec<((String, usize), RowState)> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    rows.iter()
        .map(|row| {
            let nth = seen.entry(row.id.as_str()).or_insert(0);
            let key = (row.id.clone(), *nth);
            *nth += 1;
            (key, row.clone())
        })
        .collect()
}

/// Renders rows by writing into the table store
#[derive(Clone, Copy)]
pub struct StoreRenderer {
    store: TableStore,
}

impl StoreRenderer {
    pub fn new(store: TableStore) -> Self {
        Self { store }
    }
}

impl TodoRenderer for StoreRenderer {
    fn render(&mut self, item: &TodoItem) {
        self.store.rows().write().insert(
            0,
            RowState {
                id: item.id.clone(),
                name: item.name.clone(),
                completed: false,
            },
        );
    }

    fn set_completed(&mut self, id: &str, completed: bool) {
        self.store.rows().write().iter_mut()
            .filter(|row| row.id == id)
            .for_each(|row| row.completed = completed);
    }

    fn remove(&mut self, id: &str) {
        self.store.rows().write().retain(|row| row.id != id);
    }
}
