//! Terminal overlay component.
//!
//! Owns one [`Session`] for as long as it is mounted, renders its
//! scrollback, and arms the timers it hands back.

use std::sync::Arc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use termfolio::{
    Key, KeyOutcome, Navigator, OutputLine, RecordingNavigator, ScheduledTimer, Session,
    TerminalConfig, VirtualFs,
};

use crate::components::terminal::{Input, Output};
use crate::navigator::BrowserNavigator;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

// ============================================================================
// Helper Functions
// ============================================================================

/// Focus the terminal input element.
fn focus_input() {
    use wasm_bindgen::JsCast;
    if let Some(window) = web_sys::window()
        && let Some(document) = window.document()
        && let Some(input) = document.query_selector("input").ok().flatten()
        && let Ok(element) = input.dyn_into::<web_sys::HtmlElement>()
    {
        let _ = element.focus();
    }
}

/// Arm browser timers for deferred output.
///
/// Callbacks go through `try_update`, so a timer that outlives the
/// terminal (signal disposed) does nothing, and a closed session ignores
/// the id.
fn arm_timers(session: RwSignal<Session>, timers: Vec<ScheduledTimer>) {
    for timer in timers {
        let millis = u32::try_from(timer.delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || {
            let fired = session.try_update(|s| s.fire(timer.id));
            tracing::trace!(timer = timer.id.get(), ?fired, "timer elapsed");
        })
        .forget();
    }
}

/// Run a session operation, then replay its navigation.
///
/// Requests are recorded during the update and dispatched afterwards so
/// that closing the terminal never happens while the session is borrowed.
fn with_navigation<T: Default>(
    session: RwSignal<Session>,
    navigator: &dyn Navigator,
    f: impl FnOnce(&mut Session, &dyn Navigator) -> T,
) -> T {
    let recorder = RecordingNavigator::new();
    let result = session
        .try_update(|s| f(s, &recorder))
        .unwrap_or_default();
    for request in recorder.take() {
        request.dispatch(navigator);
    }
    result
}

/// Hand a key to the session along with the text typed so far.
///
/// Typing only touches `input`; the session sees the line when a key it
/// reacts to arrives, and `input` picks up whatever the key left behind
/// (a history entry, a completion, or an empty line after Enter).
fn press_key(
    session: RwSignal<Session>,
    input: RwSignal<String>,
    navigator: &dyn Navigator,
    key: Key,
) -> KeyOutcome {
    let typed = input.get_untracked();
    let (outcome, line) = with_navigation(session, navigator, |s, nav| {
        s.set_input(typed);
        let outcome = s.handle_key(key, nav);
        (outcome, Some(s.state().input().to_string()))
    });
    if let Some(line) = line {
        input.try_set(line);
    }
    outcome
}

/// Close button: end the session, then dismiss the overlay.
fn close_terminal(session: RwSignal<Session>, navigator: &dyn Navigator) {
    session.try_update(Session::close);
    navigator.close();
}

fn container_class(maximized: bool) -> String {
    if maximized {
        format!("{} {}", css::container, css::maximized)
    } else {
        css::container.to_string()
    }
}

// ============================================================================
// Terminal Component
// ============================================================================

#[component]
pub fn Terminal(
    fs: Arc<VirtualFs>,
    navigator: BrowserNavigator,
    load_error: Option<String>,
) -> impl IntoView {
    let mut session = match Session::new(fs, TerminalConfig::default()) {
        Ok(session) => session,
        Err(err) => {
            tracing::error!(%err, "invalid terminal configuration");
            return view! { <div class=css::container>{err.to_string()}</div> }.into_any();
        }
    };
    if let Some(message) = load_error {
        session.print(OutputLine::error(format!("Filesystem unavailable: {message}")));
    }
    tracing::debug!("terminal session opened");

    let session = RwSignal::new(session);
    let input = RwSignal::new(String::new());
    let maximized = RwSignal::new(false);
    let output_ref = NodeRef::<leptos::html::Div>::new();

    // Memos, so unrelated session updates don't re-render
    let prompt = Memo::new(move |_| session.with(|s| s.prompt()));
    let newest_line = Memo::new(move |_| {
        session.with(|s| s.state().scrollback().iter().last().map(|line| line.id))
    });

    // Callbacks
    let on_input = Callback::new(move |value: String| input.set(value));
    let on_key = Callback::new(move |key: Key| {
        let outcome = press_key(session, input, &navigator, key);
        arm_timers(session, outcome.timers);
        outcome.prevent_default
    });

    // Keep the newest line in view
    Effect::new(move || {
        newest_line.track();
        maximized.track();
        if let Some(output) = output_ref.get() {
            output.set_scroll_top(output.scroll_height());
        }
    });

    let handle_click = move |_| focus_input();
    let toggle_maximized = move |_| maximized.update(|m| *m = !*m);
    let handle_close = move |_| close_terminal(session, &navigator);

    view! {
        <div class=move || if maximized.get() { css::overlayMaximized } else { css::overlay }>
            <div class=move || container_class(maximized.get()) on:click=handle_click>
                <div class=css::titleBar>
                    <span class=css::title>{prompt}</span>
                    <div class=css::controls>
                        <button
                            class=css::control
                            title=move || if maximized.get() { "Restore" } else { "Maximize" }
                            on:click=toggle_maximized
                        >
                            {move || if maximized.get() { "\u{2752}" } else { "\u{25A1}" }}
                        </button>
                        <button
                            class=format!("{} {}", css::control, css::close)
                            title="Close"
                            on:click=handle_close
                        >
                            "\u{2715}"
                        </button>
                    </div>
                </div>

                <div node_ref=output_ref class=css::output>
                    <For
                        each=move || session.with(|s| s.state().scrollback().to_vec())
                        key=|line| line.id
                        children=|line| view! { <Output line=line /> }
                    />
                </div>

                <div class=css::inputArea>
                    <Input prompt=prompt value=input on_input=on_input on_key=on_key />
                </div>
            </div>
        </div>
    }
    .into_any()
}
