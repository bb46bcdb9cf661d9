//! Terminal input line.

use leptos::{ev, prelude::*};
use termfolio::Key;
use wasm_bindgen::JsCast;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Prompt plus a text field mirroring the session's input.
///
/// Text edits go to `on_input`. Enter, arrows and Tab go to `on_key`, which
/// answers whether the browser's default action should be suppressed.
#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    on_key: Callback<Key, bool>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        let Some(key) = Key::from_dom(&ev.key()) else {
            return;
        };
        if on_key.run(key) {
            ev.prevent_default();
        }
        if matches!(key, Key::ArrowUp | Key::Tab) {
            move_cursor_to_end();
        }
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        on_input.run(input.value());
    };

    view! {
        <div class=css::line>
            <span class=css::prompt>{prompt}</span>
            <span class=css::separator>"$ "</span>
            <input
                node_ref=input_ref
                type="text"
                class=css::input
                autocomplete="off"
                spellcheck="false"
                prop:value=value
                on:input=handle_input
                on:keydown=handle_keydown
            />
        </div>
    }
}
