//! Root application module.
//!
//! A minimal page shell: the current route and a button that opens the
//! terminal overlay. Every opening mounts a fresh terminal session.

use std::sync::Arc;

use leptos::prelude::*;
use termfolio::VirtualFs;

use crate::components::Terminal;
use crate::navigator::{BrowserNavigator, current_route};

stylance::import_crate_style!(css, "src/app.module.css");

/// Load the bundled filesystem, falling back to an empty one.
///
/// Returns the load error message, if any, so the terminal can show it.
fn load_filesystem() -> (Arc<VirtualFs>, Option<String>) {
    match VirtualFs::builtin() {
        Ok(fs) => (Arc::new(fs), None),
        Err(err) => {
            tracing::error!(%err, "failed to load virtual filesystem");
            (Arc::new(VirtualFs::empty()), Some(err.to_string()))
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (fs, load_error) = load_filesystem();

    let route = RwSignal::new(current_route());
    let terminal_open = RwSignal::new(false);
    let on_close = Callback::new(move |_: ()| terminal_open.set(false));
    let navigator = BrowserNavigator::new(route, on_close);

    view! {
        <main class=css::page>
            <header class=css::header>
                <span class=css::brand>"DC"</span>
                <span class=css::route>{move || route.get()}</span>
                <button
                    class=css::terminalButton
                    on:click=move |_| terminal_open.set(true)
                >
                    "TERMINAL"
                </button>
            </header>

            <Show when=move || terminal_open.get()>
                <Terminal
                    fs=fs.clone()
                    navigator=navigator
                    load_error=load_error.clone()
                />
            </Show>
        </main>
    }
}
