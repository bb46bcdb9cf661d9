//! Data models shared by the engine and its hosts.
//!
//! - [`VirtualNode`], [`Directory`], [`ManifestNode`] - Virtual filesystem tree
//! - [`VirtualPath`] - Working-directory paths
//! - [`OutputLine`], [`LineKind`] - Scrollback content

mod filesystem;
mod path;
mod terminal;

pub use filesystem::{Directory, ManifestNode, VirtualNode};
pub use path::VirtualPath;
pub use terminal::{LineKind, ListEntry, OutputLine, OutputLineData, TextStyle};
