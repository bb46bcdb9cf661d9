//! Browser host for the termfolio terminal.
//!
//! Mounts the [`App`](app::App) shell, which opens the terminal overlay on
//! demand and drives a [`termfolio::Session`] from DOM events.

mod app;
mod components;
mod logging;
mod navigator;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;

pub use app::App;
pub use navigator::BrowserNavigator;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();

    let Some(root) = document().get_element_by_id("app") else {
        tracing::error!("#app element not found; nothing to mount");
        return;
    };

    mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget();
}
