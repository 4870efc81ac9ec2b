//! Todo Persistence
//!
//! The whole list lives under a single local storage key as a JSON array.
//! Every write replaces the full collection.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{Result, TodoError};
use crate::models::TodoItem;

/// Key-value backend holding the serialized list
pub trait TodoStorage {
    /// Raw value stored under `key`, `None` if absent
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// Load the list stored under `key`.
///
/// Absent data, unreadable storage and malformed JSON all yield an empty list.
pub fn load_items<S: TodoStorage + ?Sized>(storage: &S, key: &str) -> Vec<TodoItem> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("[STORAGE] Failed to read {}: {}", key, e);
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<TodoItem>>(&raw) {
        Ok(items) => {
            log::debug!("[STORAGE] Loaded {} items from {}", items.len(), key);
            items
        }
        Err(e) => {
            log::warn!("[STORAGE] Ignoring malformed data under {}: {}", key, e);
            Vec::new()
        }
    }
}

/// Overwrite the list stored under `key`
pub fn save_items<S: TodoStorage + ?Sized>(storage: &S, key: &str, items: &[TodoItem]) -> Result<()> {
    let json = serde_json::to_string(items)?;
    storage.set_item(key, &json)
}

/// `window.localStorage`
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    pub fn new() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| TodoError::StorageUnavailable("no window".to_string()))?;
        let inner = window
            .local_storage()
            .map_err(|e| TodoError::StorageUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| TodoError::StorageUnavailable("localStorage is disabled".to_string()))?;
        Ok(Self { inner })
    }
}

impl TodoStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|e| TodoError::Storage(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.inner
            .set_item(key, value)
            .map_err(|e| TodoError::Storage(format!("{:?}", e)))
    }
}

/// In-memory storage, used when local storage is unavailable and in tests.
///
/// Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl TodoStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Any available storage: the browser's when present, memory otherwise
pub enum WidgetStorage {
    Browser(BrowserStorage),
    Memory(MemoryStorage),
}

impl WidgetStorage {
    pub fn detect() -> Self {
        match BrowserStorage::new() {
            Ok(storage) => WidgetStorage::Browser(storage),
            Err(e) => {
                log::warn!("[STORAGE] {}; changes will not survive a reload", e);
                WidgetStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

impl TodoStorage for WidgetStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match self {
            WidgetStorage::Browser(s) => s.get_item(key),
            WidgetStorage::Memory(s) => s.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        match self {
            WidgetStorage::Browser(s) => s.set_item(key, value),
            WidgetStorage::Memory(s) => s.set_item(key, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "todoList";

    struct BrokenStorage;

    impl TodoStorage for BrokenStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Err(TodoError::Storage("SecurityError".to_string()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
            Err(TodoError::Storage("QuotaExceededError".to_string()))
        }
    }

    #[test]
    fn test_absent_key_loads_empty() {
        let storage = MemoryStorage::new();
        assert!(load_items(&storage, KEY).is_empty());
    }

    #[test]
    fn test_malformed_json_loads_empty() {
        let storage = MemoryStorage::with_entry(KEY, "{not json");
        assert!(load_items(&storage, KEY).is_empty());

        let storage = MemoryStorage::with_entry(KEY, r#"{"id":"todo-1"}"#);
        assert!(load_items(&storage, KEY).is_empty());
    }

    #[test]
    fn test_read_failure_loads_empty() {
        assert!(load_items(&BrokenStorage, KEY).is_empty());
    }

    #[test]
    fn test_save_overwrites_whole_list() {
        let storage = MemoryStorage::new();
        let first = vec![
            TodoItem::with_suffix("todo-", 1, "a"),
            TodoItem::with_suffix("todo-", 2, "b"),
        ];
        save_items(&storage, KEY, &first).unwrap();
        save_items(&storage, KEY, &first[1..]).unwrap();

        assert_eq!(
            storage.raw(KEY).unwrap(),
            r#"[{"id":"todo-2","name":"b","completed":false}]"#
        );
        assert_eq!(load_items(&storage, KEY), first[1..].to_vec());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let err = save_items(&BrokenStorage, KEY, &[]).unwrap_err();
        assert!(matches!(err, TodoError::Storage(_)));
    }

    #[test]
    fn test_memory_storage_clones_share_entries() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        storage.set_item(KEY, "[]").unwrap();
        assert_eq!(handle.raw(KEY).as_deref(), Some("[]"));
    }
}
