//! Table Click Routing
//!
//! One click listener on the table decides what a click means. Only
//! targets marked `data-event="true"` are actionable.

use wasm_bindgen::JsCast;

/// Attribute marking actionable targets inside a row
pub const EVENT_MARKER: &str = "data-event";

/// Value of `EVENT_MARKER` on actionable targets
pub const EVENT_MARKER_VALUE: &str = "true";

/// Class of the delete control
pub const DELETE_CLASS: &str = "delete";

/// What a table click asks the controller to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    Toggle { id: String, checked: bool },
    Delete { id: String },
}

/// The parts of a click target that routing looks at
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub marker: Option<String>,
    pub tag_name: String,
    pub input_type: Option<String>,
    pub checked: bool,
    pub classes: Vec<String>,
    /// Id of the closest enclosing `<tr>`
    pub row_id: Option<String>,
}

impl ClickTarget {
    /// Read a click target out of a DOM event
    pub fn from_event(ev: &web_sys::Event) -> Option<Self> {
        let element = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
        let input = element.dyn_ref::<web_sys::HtmlInputElement>();
        let row_id = element
            .closest("tr")
            .ok()
            .flatten()
            .map(|row| row.id())
            .filter(|id| !id.is_empty());
        Some(Self {
            marker: element.get_attribute(EVENT_MARKER),
            tag_name: element.tag_name(),
            input_type: input.map(|i| i.type_()),
            checked: input.map(|i| i.checked()).unwrap_or(false),
            classes: element
                .class_name()
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            row_id,
        })
    }

    fn is_actionable(&self) -> bool {
        self.marker.as_deref() == Some(EVENT_MARKER_VALUE)
    }

    fn is_checkbox(&self) -> bool {
        self.tag_name.eq_ignore_ascii_case("input") && self.input_type.as_deref() == Some("checkbox")
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

impl TableAction {
    /// Route a click. Unmarked targets, targets outside a row and other
    /// marked elements yield `None`.
    pub fn route(target: &ClickTarget) -> Option<Self> {
        if !target.is_actionable() {
            return None;
        }
        let id = target.row_id.clone()?;
        if target.is_checkbox() {
            Some(TableAction::Toggle { id, checked: target.checked })
        } else if target.has_class(DELETE_CLASS) {
            Some(TableAction::Delete { id })
        } else {
            None
        }
    }
}
