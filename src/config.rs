//! Widget Configuration
//!
//! Constants shared by the controller and the table components.

use leptos::prelude::*;

/// Widget-wide settings, provided via context at the root
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    /// Local storage key holding the JSON array
    pub storage_key: String,
    /// Prefix of generated item ids
    pub id_prefix: String,
    /// Row class applied while an item is completed
    pub completed_class: String,
    /// Insert names as raw HTML instead of escaped text
    pub raw_markup_names: bool,
    /// Maximum level forwarded to the browser console
    pub log_level: log::LevelFilter,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: "todoList".to_string(),
            id_prefix: "todo-".to_string(),
            completed_class: "completed".to_string(),
            raw_markup_names: false,
            log_level: log::LevelFilter::Info,
        }
    }
}

/// Get the widget config from context, falling back to defaults
pub fn use_widget_config() -> WidgetConfig {
    use_context::<WidgetConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_persisted_layout() {
        let config = WidgetConfig::default();
        assert_eq!(config.storage_key, "todoList");
        assert_eq!(config.id_prefix, "todo-");
        assert_eq!(config.completed_class, "completed");
        assert!(!config.raw_markup_names);
    }
}
