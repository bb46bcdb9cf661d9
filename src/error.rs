//! Error types for engine construction.
//!
//! Command failures never surface here: every handler turns them into
//! output lines. These errors only arise while building a session:
//!
//! - [`ManifestError`] - loading the virtual filesystem manifest
//! - [`ConfigError`] - parsing a [`TerminalConfig`](crate::config::TerminalConfig)

use thiserror::Error;

/// Virtual filesystem manifest errors.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest is not valid JSON or does not match the node schema.
    #[error("manifest parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// The top-level node is not a directory named `~`.
    #[error("manifest root must be a directory named '~', found '{0}'")]
    InvalidRoot(String),
    /// An entry name is empty, reserved, or contains whitespace or `/`.
    #[error("invalid entry name {name:?} in {parent}")]
    InvalidName { parent: String, name: String },
    /// Two entries in one directory share a name.
    #[error("duplicate entry '{name}' in {parent}")]
    DuplicateName { parent: String, name: String },
}

/// Terminal configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration is not valid JSON.
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// A capacity was set to zero.
    #[error("{field} must be greater than zero")]
    ZeroLimit { field: &'static str },
}
