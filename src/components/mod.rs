//! UI Components
//!
//! Leptos components making up the widget.

mod todo_form;
mod todo_row;
mod todo_table;

pub use todo_form::TodoForm;
pub use todo_row::TodoRow;
pub use todo_table::TodoTable;
