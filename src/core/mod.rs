//! Core business logic for the terminal.
//!
//! This module provides:
//! - [`Command`] parsing and [`execute_command`] execution
//! - [`VirtualFs`] virtual filesystem resolution
//! - [`autocomplete`] for tab completion

mod autocomplete;
mod commands;
mod filesystem;
pub mod parser;

pub use autocomplete::{AutocompleteResult, autocomplete};
pub use commands::{CdTarget, Command, CommandResult, Deferred, PathArg, execute_command};
pub use filesystem::{VirtualFs, is_external_target};
pub use parser::{CommandLine, parse_input};
