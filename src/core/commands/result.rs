//! Command execution result type.

use std::time::Duration;

use crate::models::{OutputLine, VirtualPath};
use crate::navigator::NavRequest;

/// Output that a command prints after a delay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deferred {
    pub delay: Duration,
    pub lines: Vec<OutputLine>,
}

/// Result of executing a command.
///
/// Handlers never touch the session. They describe what should happen and
/// the session applies it: output first, then the new working directory,
/// navigation requests, and deferred output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Output lines to append
    pub output: Vec<OutputLine>,
    /// New working directory (e.g., for `cd`)
    pub cwd: Option<VirtualPath>,
    /// Requests for the navigator, in order
    pub navigation: Vec<NavRequest>,
    /// Output to print later
    pub deferred: Vec<Deferred>,
    /// Wipe the scrollback (`clear`)
    pub clear: bool,
}

impl CommandResult {
    /// A result with just output.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            ..Self::default()
        }
    }

    /// A single output line.
    pub fn line(line: OutputLine) -> Self {
        Self::output(vec![line])
    }

    /// No output, no side effects.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Change the working directory silently.
    pub fn change_dir(path: VirtualPath) -> Self {
        Self {
            cwd: Some(path),
            ..Self::default()
        }
    }

    /// Wipe the scrollback.
    pub fn clear_screen() -> Self {
        Self {
            clear: true,
            ..Self::default()
        }
    }

    /// Add a navigator request.
    pub fn with_navigation(mut self, request: NavRequest) -> Self {
        self.navigation.push(request);
        self
    }

    /// Add output printed after `delay`.
    pub fn with_deferred(mut self, delay: Duration, lines: Vec<OutputLine>) -> Self {
        self.deferred.push(Deferred { delay, lines });
        self
    }
}
