//! Virtual filesystem node types and the manifest schema they are built from.

use serde::Deserialize;

// =============================================================================
// Tree
// =============================================================================

/// A node in the virtual filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VirtualNode {
    Directory(Directory),
    File {
        content: String,
    },
    Link {
        target: String,
        /// Opened in a new browsing context instead of routed in-app.
        external: bool,
        description: Option<String>,
    },
}

impl VirtualNode {
    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Self::Directory(dir) => Some(dir),
            _ => None,
        }
    }
}

/// Directory contents, kept in insertion order.
///
/// Listings are expected to be small, so lookups scan the entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Directory {
    entries: Vec<(String, VirtualNode)>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Returns `false` (and leaves the directory unchanged)
    /// if the name is already taken.
    pub fn insert(&mut self, name: impl Into<String>, node: VirtualNode) -> bool {
        let name = name.into();
        if self.get(&name).is_some() {
            return false;
        }
        self.entries.push((name, node));
        true
    }

    pub fn get(&self, name: &str) -> Option<&VirtualNode> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, node)| node)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VirtualNode)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Entry names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Manifest
// =============================================================================

/// One node of the JSON manifest.
///
/// ```json
/// { "type": "directory", "name": "~", "children": [
///     { "type": "file", "name": "about.txt", "content": "..." },
///     { "type": "link", "name": "github", "target": "https://github.com/..." }
/// ] }
/// ```
///
/// A link without `external` is external when its target carries a URI
/// scheme.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ManifestNode {
    Directory {
        name: String,
        #[serde(default)]
        children: Vec<ManifestNode>,
    },
    File {
        name: String,
        #[serde(default)]
        content: String,
    },
    Link {
        name: String,
        target: String,
        #[serde(default)]
        external: Option<bool>,
        #[serde(default)]
        description: Option<String>,
    },
}

impl ManifestNode {
    pub fn name(&self) -> &str {
        match self {
            Self::Directory { name, .. } | Self::File { name, .. } | Self::Link { name, .. } => {
                name
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(content: &str) -> VirtualNode {
        VirtualNode::File {
            content: content.to_string(),
        }
    }

    #[test]
    fn test_directory_preserves_insertion_order() {
        let mut dir = Directory::new();
        assert!(dir.insert("zeta", file("z")));
        assert!(dir.insert("alpha", file("a")));
        assert!(dir.insert("mid", VirtualNode::Directory(Directory::new())));
        assert_eq!(dir.names().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_directory_rejects_duplicates() {
        let mut dir = Directory::new();
        assert!(dir.insert("a", file("first")));
        assert!(!dir.insert("a", file("second")));
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.get("a"), Some(&file("first")));
    }

    #[test]
    fn test_manifest_node_parsing() {
        let node: ManifestNode = serde_json::from_str(
            r#"{"type": "link", "name": "github", "target": "https://github.com"}"#,
        )
        .unwrap();
        match node {
            ManifestNode::Link {
                name,
                target,
                external,
                description,
            } => {
                assert_eq!(name, "github");
                assert_eq!(target, "https://github.com");
                assert_eq!(external, None);
                assert_eq!(description, None);
            }
            _ => panic!("Expected Link variant"),
        }
    }

    #[test]
    fn test_manifest_unknown_type() {
        let result: Result<ManifestNode, _> =
            serde_json::from_str(r#"{"type": "socket", "name": "x"}"#);
        assert!(result.is_err());
    }
}
