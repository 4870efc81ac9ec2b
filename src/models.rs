//! Frontend Models
//!
//! Data structures persisted to local storage.

use serde::{Deserialize, Serialize};

/// A single todo entry, stored verbatim as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    /// New, not yet completed item whose id is `prefix` followed by `suffix`
    pub fn with_suffix(prefix: &str, suffix: impl std::fmt::Display, name: impl Into<String>) -> Self {
        Self {
            id: format!("{}{}", prefix, suffix),
            name: name.into(),
            completed: false,
        }
    }
}
