//! Presentation Interface
//!
//! What the controller needs from the table, independent of any DOM.

use crate::models::TodoItem;

pub trait TodoRenderer {
    /// Insert a row for `item` as the first row of the table body
    fn render(&mut self, item: &TodoItem);

    /// Sync the row's checkbox and completed class. Unknown ids are ignored.
    fn set_completed(&mut self, id: &str, completed: bool);

    /// Remove the row. Unknown ids are ignored.
    fn remove(&mut self, id: &str);
}
