//! [`Navigator`] backed by the browser.

use leptos::prelude::*;
use termfolio::Navigator;
use wasm_bindgen::JsValue;

/// Performs terminal navigation in the page.
///
/// Internal routes are pushed onto the History API and mirrored in the
/// `route` signal the page renders from. External links open in a new tab.
#[derive(Clone, Copy)]
pub struct BrowserNavigator {
    route: RwSignal<String>,
    on_close: Callback<()>,
}

impl BrowserNavigator {
    pub fn new(route: RwSignal<String>, on_close: Callback<()>) -> Self {
        Self { route, on_close }
    }
}

impl Navigator for BrowserNavigator {
    fn route_to(&self, path: &str) {
        let url = route_url(path);
        let pushed = web_sys::window()
            .and_then(|window| window.history().ok())
            .map(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&url)));

        if let Some(Err(err)) = pushed {
            tracing::warn!(?err, %url, "history.pushState failed");
        }
        self.route.set(url);
    }

    fn open_external(&self, uri: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.open_with_url_and_target(uri, "_blank") {
            tracing::warn!(?err, uri, "window.open failed");
        }
    }

    fn close(&self) {
        self.on_close.run(());
    }
}

/// Current location path, used as the initial route.
pub fn current_route() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Absolute site path for a link target.
fn route_url(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_url() {
        assert_eq!(route_url("/homelab"), "/homelab");
        assert_eq!(route_url("projects/rentals"), "/projects/rentals");
        assert_eq!(route_url("/"), "/");
    }
}
