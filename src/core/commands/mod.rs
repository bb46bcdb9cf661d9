//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `CommandResult` describing what a command wants done
//! - `execute_command` running a command against the virtual filesystem
//!
//! # Architecture
//!
//! Input is split by [`parse_input`](crate::core::parse_input), the first
//! token is dispatched by [`Command::parse`], and [`execute_command`] turns
//! the command into a [`CommandResult`] without touching session state.

mod execute;
mod result;
mod simulations;

pub use execute::execute_command;
pub use result::{CommandResult, Deferred};

use std::fmt;

use crate::config::ROOT_SEGMENT;

// =============================================================================
// Path Argument Type
// =============================================================================

/// An entry name passed to a command (e.g., `cd projects`, `cat about.txt`).
///
/// Stored as typed; it is only checked against the virtual filesystem when
/// the command runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Where `cd` should go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CdTarget {
    /// `cd`, `cd ~`
    Home,
    /// `cd ..`
    Parent,
    /// `cd <name>`
    Child(PathArg),
}

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Ls,
    Cd(CdTarget),
    Cat(Option<PathArg>),
    Open(Option<PathArg>),
    Whoami,
    Clear,
    Exit,
    Sudo,
    Nmap(Option<String>),
    Matrix,
    Unknown(String),
}

impl Command {
    /// Command names offered by tab completion, in display order.
    pub fn names() -> &'static [&'static str] {
        &[
            "help", "ls", "cd", "cat", "open", "whoami", "clear", "exit", "nmap", "sudo", "matrix",
        ]
    }

    /// Parse command from name and arguments.
    ///
    /// The name is matched case-insensitively; only the first argument is
    /// used.
    pub fn parse(name: &str, args: &[String]) -> Self {
        let arg = args.first();
        match name.to_lowercase().as_str() {
            "help" => Self::Help,
            "ls" | "ll" => Self::Ls,
            "cd" => Self::Cd(match arg.map(String::as_str) {
                None | Some(ROOT_SEGMENT) => CdTarget::Home,
                Some("..") => CdTarget::Parent,
                Some(name) => CdTarget::Child(PathArg::new(name)),
            }),
            "cat" => Self::Cat(arg.map(PathArg::new)),
            "open" => Self::Open(arg.map(PathArg::new)),
            "whoami" => Self::Whoami,
            "clear" => Self::Clear,
            "exit" => Self::Exit,
            "sudo" => Self::Sudo,
            "nmap" => Self::Nmap(arg.cloned()),
            "matrix" => Self::Matrix,
            _ => Self::Unknown(name.to_string()),
        }
    }

    /// Whether a submission of this command is echoed and kept in history.
    ///
    /// `clear` and `exit` leave no trace.
    pub fn is_recorded(&self) -> bool {
        !matches!(self, Self::Clear | Self::Exit)
    }
}

// =============================================================================
// Tests
// =============================================================================
