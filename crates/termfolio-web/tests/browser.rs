#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use termfolio::Navigator;
use termfolio_web::BrowserNavigator;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_route_updates_signal_and_location() {
    let route = RwSignal::new("/".to_string());
    let navigator = BrowserNavigator::new(route, Callback::new(|_: ()| {}));

    navigator.route_to("/homelab");
    assert_eq!(route.get_untracked(), "/homelab");

    let pathname = web_sys::window().unwrap().location().pathname().unwrap();
    assert_eq!(pathname, "/homelab");
}

#[wasm_bindgen_test]
fn test_close_runs_callback() {
    let closed = RwSignal::new(false);
    let navigator = BrowserNavigator::new(
        RwSignal::new("/".to_string()),
        Callback::new(move |_: ()| closed.set(true)),
    );

    navigator.close();
    assert!(closed.get_untracked());
}
