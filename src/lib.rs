//! Session engine for a portfolio site's fake terminal.
//!
//! A Unix-flavoured shell over a small read-only virtual filesystem. The
//! engine is pure Rust with no DOM access: hosts drive a [`Session`] with
//! keystrokes, render its scrollback, arm the timers it hands back, and
//! perform navigation through a [`Navigator`].
//!
//! ```
//! use std::sync::Arc;
//! use termfolio::{RecordingNavigator, Session, TerminalConfig, VirtualFs};
//!
//! let fs = Arc::new(VirtualFs::builtin()?);
//! let mut session = Session::new(fs, TerminalConfig::default())?;
//! let nav = RecordingNavigator::new();
//!
//! session.submit_line("cd projects", &nav);
//! assert_eq!(session.state().current_path().display(), "~/projects");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod navigator;
pub mod session;
pub mod utils;

pub use crate::config::TerminalConfig;
pub use crate::core::{AutocompleteResult, Command, CommandResult, VirtualFs, execute_command};
pub use error::{ConfigError, ManifestError};
pub use models::{LineKind, ListEntry, OutputLine, OutputLineData, TextStyle, VirtualPath};
pub use navigator::{NavRequest, Navigator, RecordingNavigator};
pub use session::{Key, KeyOutcome, ScheduledTimer, Session, SessionState, TimerId};
