//! Todo Row Component
//!
//! Row template: id on the `<tr>`, a name cell, a checkbox and a delete
//! control. Actions are handled by the table's click listener, which
//! looks for `events::EVENT_MARKER` on the target.

use leptos::prelude::*;

use crate::config::use_widget_config;
use crate::events::DELETE_CLASS;
use crate::store::RowState;

#[component]
pub fn TodoRow(row: RowState, completed: Signal<bool>) -> impl IntoView {
    let config = use_widget_config();
    let completed_class = config.completed_class.clone();

    let name_cell = if config.raw_markup_names {
        view! { <td class="name" inner_html=row.name></td> }.into_any()
    } else {
        view! { <td class="name">{row.name}</td> }.into_any()
    };

    view! {
        <tr
            id=row.id
            class=move || if completed.get() { completed_class.clone() } else { String::new() }
        >
            <td class="check">
                <input
                    type="checkbox"
                    data-event="true"
                    prop:checked=move || completed.get()
                    checked=move || completed.get()
                />
            </td>
            {name_cell}
            <td class="actions">
                <span class=format!("icon {}", DELETE_CLASS) data-event="true">"×"</span>
            </td>
        </tr>
    }
}
