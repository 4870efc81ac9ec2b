//! Todo List Controller
//!
//! Owns the in-memory list and keeps storage and the rendered table in step
//! with it. Every mutation writes the full list back to storage.

use crate::config::WidgetConfig;
use crate::error::{Result, TodoError};
use crate::models::TodoItem;
use crate::render::TodoRenderer;
use crate::storage::{self, TodoStorage};

/// Source of creation timestamps in milliseconds
pub type Clock = Box<dyn Fn() -> u64>;

/// Milliseconds since the epoch from the browser clock
pub fn browser_clock() -> Clock {
    Box::new(|| js_sys::Date::now() as u64)
}

pub struct TodoListController<S: TodoStorage, R: TodoRenderer> {
    todo_list: Vec<TodoItem>,
    storage: S,
    renderer: R,
    clock: Clock,
    storage_key: String,
    id_prefix: String,
}

impl<S: TodoStorage, R: TodoRenderer> TodoListController<S, R> {
    /// Load persisted items and render each of them, in load order
    pub fn new(storage: S, renderer: R, clock: Clock, config: &WidgetConfig) -> Self {
        let loaded = storage::load_items(&storage, &config.storage_key);
        let mut controller = Self {
            todo_list: Vec::with_capacity(loaded.len()),
            storage,
            renderer,
            clock,
            storage_key: config.storage_key.clone(),
            id_prefix: config.id_prefix.clone(),
        };
        log::info!("[TODO] Restoring {} items", loaded.len());
        for item in loaded {
            controller.add_new_todo(item);
        }
        controller
    }

    #[cfg(test)]
    pub fn items(&self) -> &[TodoItem] {
        &self.todo_list
    }

    #[cfg(test)]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Build an item from the input text and add it.
    ///
    /// Empty input is ignored. Returns the new item so the caller can clear
    /// its input control.
    pub fn submit(&mut self, input: &str) -> Option<TodoItem> {
        if input.is_empty() {
            return None;
        }
        let item = self.generate_todo_item(input, None);
        self.add_new_todo(item.clone());
        Some(item)
    }

    /// New item named `name`. Without a suffix the id uses the current time.
    pub fn generate_todo_item(&self, name: &str, suffix: Option<&str>) -> TodoItem {
        match suffix {
            Some(suffix) => TodoItem::with_suffix(&self.id_prefix, suffix, name),
            None => TodoItem::with_suffix(&self.id_prefix, (self.clock)(), name),
        }
    }

    /// Append, render at the head of the table, persist, then apply a
    /// restored completed flag.
    pub fn add_new_todo(&mut self, item: TodoItem) {
        log::debug!("[TODO] Adding {}", item.id);
        self.renderer.render(&item);
        let restore = item.completed.then(|| item.id.clone());
        self.todo_list.push(item);
        self.persist();
        if let Some(id) = restore {
            if let Err(e) = self.update_todo_item(&id, true) {
                log::warn!("[TODO] {}", e);
            }
        }
    }

    /// Set the completed flag of the first item with `id`
    pub fn update_todo_item(&mut self, id: &str, checked: bool) -> Result<()> {
        let item = self
            .todo_list
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;
        item.completed = checked;
        self.renderer.set_completed(id, checked);
        self.persist();
        Ok(())
    }

    /// Remove every item with `id`
    pub fn delete_todo_item(&mut self, id: &str) -> Result<()> {
        let before = self.todo_list.len();
        self.todo_list.retain(|todo| todo.id != id);
        if self.todo_list.len() == before {
            return Err(TodoError::NotFound(id.to_string()));
        }
        self.renderer.remove(id);
        self.persist();
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = storage::save_items(&self.storage, &self.storage_key, &self.todo_list) {
            log::error!("[TODO] Failed to save {} items: {}", self.todo_list.len(), e);
        }
    }
}
