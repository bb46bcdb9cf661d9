//! Terminal session: state, input handling and deferred output.
//!
//! A [`Session`] owns everything one open terminal needs. Hosts feed it
//! keystrokes through [`Session::handle_key`] (or the finer-grained
//! methods), render [`SessionState::scrollback`], and drive timers: every
//! [`ScheduledTimer`] returned must eventually be passed back to
//! [`Session::fire`] once its delay has elapsed.

use std::collections::BTreeMap;
use std::mem;
use std::sync::Arc;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{APP_NAME, APP_VERSION, TerminalConfig};
use crate::core::{
    AutocompleteResult, Command, CommandResult, VirtualFs, autocomplete, execute_command,
    parse_input,
};
use crate::error::ConfigError;
use crate::models::{OutputLine, VirtualPath};
use crate::navigator::{NavRequest, Navigator};
use crate::utils::RingBuffer;

// =============================================================================
// Timers
// =============================================================================

/// Handle for a batch of deferred output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A timer the host must arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTimer {
    pub id: TimerId,
    pub delay: Duration,
}

// =============================================================================
// Keys
// =============================================================================

/// Keys the terminal reacts to. Everything else edits the input normally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    ArrowUp,
    ArrowDown,
    Tab,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Enter),
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "Tab" => Some(Self::Tab),
            _ => None,
        }
    }
}

/// What the host should do after a key was handled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Suppress the browser's default action (caret moves, focus change).
    pub prevent_default: bool,
    /// Timers to arm.
    pub timers: Vec<ScheduledTimer>,
}

// =============================================================================
// SessionState
// =============================================================================

/// Observable state of a terminal session.
#[derive(Clone, Debug)]
pub struct SessionState {
    current_path: VirtualPath,
    scrollback: RingBuffer<OutputLine>,
    history: RingBuffer<String>,
    /// Index into history counted from the most recent entry.
    history_cursor: Option<usize>,
    input: String,
    pending: BTreeMap<TimerId, Vec<OutputLine>>,
    next_timer: u64,
    closed: bool,
}

impl SessionState {
    fn new(config: &TerminalConfig) -> Self {
        Self {
            current_path: VirtualPath::root(),
            scrollback: RingBuffer::new(config.scrollback_limit),
            history: RingBuffer::new(config.history_limit),
            history_cursor: None,
            input: String::new(),
            pending: BTreeMap::new(),
            next_timer: 0,
            closed: false,
        }
    }

    /// Working directory; always a directory of the session's filesystem.
    pub fn current_path(&self) -> &VirtualPath {
        &self.current_path
    }

    /// Rendered output, oldest first.
    pub fn scrollback(&self) -> &RingBuffer<OutputLine> {
        &self.scrollback
    }

    /// Submitted command lines as typed, oldest first.
    pub fn history(&self) -> &RingBuffer<String> {
        &self.history
    }

    /// Position while browsing history; 0 is the most recent entry.
    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    /// The line being edited.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Number of deferred batches still waiting.
    pub fn pending_timers(&self) -> usize {
        self.pending.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// History entry at `cursor`, counted from the most recent.
    fn history_entry(&self, cursor: usize) -> Option<&String> {
        let index = self.history.len().checked_sub(cursor + 1)?;
        self.history.get(index)
    }
}

// =============================================================================
// Session
// =============================================================================

/// An open terminal.
///
/// Created when the terminal view opens and dropped when it closes;
/// reopening starts from a fresh session.
pub struct Session {
    fs: Arc<VirtualFs>,
    config: TerminalConfig,
    state: SessionState,
    rng: StdRng,
}

impl Session {
    /// Start a session, seeded with the boot banner when configured.
    pub fn new(fs: Arc<VirtualFs>, config: TerminalConfig) -> Result<Self, ConfigError> {
        Self::with_rng(fs, config, StdRng::from_entropy())
    }

    /// Start a session with a specific random generator.
    pub fn with_rng(
        fs: Arc<VirtualFs>,
        config: TerminalConfig,
        rng: StdRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut state = SessionState::new(&config);
        if config.banner {
            state.scrollback.extend(boot_banner());
        }

        Ok(Self {
            fs,
            config,
            state,
            rng,
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn is_closed(&self) -> bool {
        self.state.closed
    }

    /// Prompt shown before the input and in command echoes.
    ///
    /// Format: `{user}@{host}:{cwd}`
    pub fn prompt(&self) -> String {
        format!(
            "{}@{}:{}",
            self.config.user,
            self.config.host,
            self.state.current_path.display()
        )
    }

    /// Append a line outside of any command (host notices).
    pub fn print(&mut self, line: OutputLine) {
        if !self.state.closed {
            self.state.scrollback.push(line);
        }
    }

    /// Replace the input line (the host's text edits).
    pub fn set_input(&mut self, input: impl Into<String>) {
        if !self.state.closed {
            self.state.input = input.into();
        }
    }

    /// Dispatch a key press.
    pub fn handle_key(&mut self, key: Key, navigator: &dyn Navigator) -> KeyOutcome {
        if self.state.closed {
            return KeyOutcome::default();
        }

        match key {
            Key::Enter => KeyOutcome {
                prevent_default: false,
                timers: self.submit(navigator),
            },
            Key::ArrowUp => {
                self.history_up();
                KeyOutcome {
                    prevent_default: true,
                    timers: Vec::new(),
                }
            }
            Key::ArrowDown => {
                self.history_down();
                KeyOutcome {
                    prevent_default: true,
                    timers: Vec::new(),
                }
            }
            Key::Tab => {
                self.complete();
                KeyOutcome {
                    prevent_default: true,
                    timers: Vec::new(),
                }
            }
        }
    }

    /// Submit the current input and clear it.
    pub fn submit(&mut self, navigator: &dyn Navigator) -> Vec<ScheduledTimer> {
        let line = mem::take(&mut self.state.input);
        self.submit_line(&line, navigator)
    }

    /// Run one command line.
    ///
    /// Appends the echo, runs the command, applies its result, then records
    /// the raw line in history. `clear` and `exit` skip echo and history.
    /// Blank lines and closed sessions do nothing.
    pub fn submit_line(&mut self, line: &str, navigator: &dyn Navigator) -> Vec<ScheduledTimer> {
        if self.state.closed {
            return Vec::new();
        }
        let Some(parsed) = parse_input(line) else {
            return Vec::new();
        };

        let cmd = Command::parse(&parsed.name, &parsed.args);
        let recorded = cmd.is_recorded();
        tracing::debug!(command = ?cmd, cwd = %self.state.current_path, "dispatching command");

        if recorded {
            let echo = OutputLine::command(self.prompt(), line.trim());
            self.state.scrollback.push(echo);
        }

        let result = execute_command(cmd, &self.fs, &self.state.current_path, &mut self.rng);
        let timers = self.apply(result, navigator);

        if recorded {
            self.state.history.push(line.to_string());
        }
        self.state.history_cursor = None;

        timers
    }

    /// Apply a command result: output, working directory, navigation, then
    /// deferred output.
    fn apply(&mut self, result: CommandResult, navigator: &dyn Navigator) -> Vec<ScheduledTimer> {
        if result.clear {
            self.state.scrollback.clear();
            self.state.input.clear();
            self.state.history_cursor = None;
        }

        self.state.scrollback.extend(result.output);

        if let Some(cwd) = result.cwd {
            self.state.current_path = cwd;
        }

        for request in &result.navigation {
            request.dispatch(navigator);
            if *request == NavRequest::Close {
                self.close();
            }
        }

        if self.state.closed {
            return Vec::new();
        }

        result
            .deferred
            .into_iter()
            .map(|deferred| {
                let id = TimerId(self.state.next_timer);
                self.state.next_timer += 1;
                self.state.pending.insert(id, deferred.lines);
                tracing::trace!(
                    timer = id.0,
                    delay_ms = deferred.delay.as_millis() as u64,
                    "scheduled output"
                );
                ScheduledTimer {
                    id,
                    delay: deferred.delay,
                }
            })
            .collect()
    }

    /// Recall the previous (older) history entry into the input.
    pub fn history_up(&mut self) {
        if self.state.closed || self.state.history.is_empty() {
            return;
        }

        let next = match self.state.history_cursor {
            None => 0,
            Some(i) if i + 1 < self.state.history.len() => i + 1,
            // Already at the oldest entry
            Some(_) => return,
        };

        if let Some(entry) = self.state.history_entry(next).cloned() {
            self.state.history_cursor = Some(next);
            self.state.input = entry;
        }
    }

    /// Recall the next (newer) history entry, or leave history browsing
    /// with an empty input.
    pub fn history_down(&mut self) {
        if self.state.closed {
            return;
        }

        match self.state.history_cursor {
            Some(i) if i > 0 => {
                if let Some(entry) = self.state.history_entry(i - 1).cloned() {
                    self.state.history_cursor = Some(i - 1);
                    self.state.input = entry;
                }
            }
            _ => {
                self.state.history_cursor = None;
                self.state.input.clear();
            }
        }
    }

    /// Tab completion. The input changes only on a unique match.
    pub fn complete(&mut self) -> AutocompleteResult {
        if self.state.closed {
            return AutocompleteResult::None;
        }

        let result = autocomplete(&self.state.input, &self.state.current_path, &self.fs);
        if let AutocompleteResult::Single(completed) = &result {
            self.state.input = completed.clone();
        }
        result
    }

    /// Deliver the output of an elapsed timer.
    ///
    /// Returns `false` when the session is closed or the timer is unknown
    /// or already fired.
    pub fn fire(&mut self, id: TimerId) -> bool {
        if self.state.closed {
            return false;
        }

        match self.state.pending.remove(&id) {
            Some(lines) => {
                tracing::trace!(timer = id.0, lines = lines.len(), "timer fired");
                self.state.scrollback.extend(lines);
                true
            }
            None => false,
        }
    }

    /// Close the session, cancelling all pending output.
    pub fn close(&mut self) {
        if self.state.closed {
            return;
        }
        tracing::debug!(cancelled = self.state.pending.len(), "closing terminal session");
        self.state.pending.clear();
        self.state.closed = true;
    }
}

/// Lines shown when a session starts.
pub fn boot_banner() -> Vec<OutputLine> {
    vec![
        OutputLine::info(format!("Initializing {APP_NAME} v{APP_VERSION}...")),
        OutputLine::success("System Verified. Connection Secure."),
        OutputLine::info("Type \"help\" to see available commands."),
    ]
}
