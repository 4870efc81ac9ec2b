//! Todo Form Component
//!
//! Text input plus submit button for new items.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_text, set_new_text) = signal(String::new());

    let submit = move |_| {
        let text = new_text.get_untracked();
        if ctx.submit(&text) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <div class="todo-form">
            <input
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                        set_new_text.set(input.value());
                    }
                }
            />
            <button type="button" on:click=submit>"Add"</button>
        </div>
    }
}
