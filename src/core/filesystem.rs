use std::sync::LazyLock;

use regex::Regex;

use crate::config::{FILESYSTEM_MANIFEST, ROOT_SEGMENT};
use crate::error::ManifestError;
use crate::models::{Directory, ListEntry, ManifestNode, TextStyle, VirtualNode, VirtualPath};

/// Matches targets that carry a URI scheme (`https:`, `mailto:`).
static URI_SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("URI scheme pattern is valid")
});

/// Names that would be ambiguous with `cd` arguments.
const RESERVED_NAMES: &[&str] = &[".", "..", ROOT_SEGMENT];

/// Read-only virtual filesystem.
///
/// Built once from a manifest and never mutated; sessions share it behind an
/// `Arc`. Paths are [`VirtualPath`]s, resolved segment by segment from the
/// root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualFs {
    root: Directory,
}

impl VirtualFs {
    /// Filesystem described by the bundled manifest.
    pub fn builtin() -> Result<Self, ManifestError> {
        Self::from_manifest_json(FILESYSTEM_MANIFEST)
            .inspect_err(|err| tracing::warn!(%err, "bundled manifest rejected"))
    }

    /// A filesystem with an empty root.
    pub fn empty() -> Self {
        Self {
            root: Directory::new(),
        }
    }

    /// Parse a JSON manifest and build the tree.
    pub fn from_manifest_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: ManifestNode = serde_json::from_str(json)?;
        Self::from_manifest(&manifest)
    }

    /// Build the tree from a parsed manifest.
    ///
    /// The manifest root must be a directory named `~`. Entry names must be
    /// unique within their directory, non-empty, free of whitespace and `/`,
    /// and not one of `.`, `..`, `~`.
    pub fn from_manifest(manifest: &ManifestNode) -> Result<Self, ManifestError> {
        let ManifestNode::Directory { name, children } = manifest else {
            return Err(ManifestError::InvalidRoot(manifest.name().to_string()));
        };
        if name != ROOT_SEGMENT {
            return Err(ManifestError::InvalidRoot(name.clone()));
        }

        let root = Self::build_directory(&VirtualPath::root(), children)?;
        tracing::debug!(entries = root.len(), "mounted virtual filesystem");
        Ok(Self { root })
    }

    fn build_directory(
        path: &VirtualPath,
        children: &[ManifestNode],
    ) -> Result<Directory, ManifestError> {
        let mut dir = Directory::new();

        for child in children {
            let name = child.name();
            if !Self::is_valid_name(name) {
                return Err(ManifestError::InvalidName {
                    parent: path.display(),
                    name: name.to_string(),
                });
            }

            let node = match child {
                ManifestNode::Directory { children, .. } => {
                    VirtualNode::Directory(Self::build_directory(&path.join(name), children)?)
                }
                ManifestNode::File { content, .. } => VirtualNode::File {
                    content: content.clone(),
                },
                ManifestNode::Link {
                    target,
                    external,
                    description,
                    ..
                } => VirtualNode::Link {
                    target: target.clone(),
                    external: external.unwrap_or_else(|| is_external_target(target)),
                    description: description.clone(),
                },
            };

            if !dir.insert(name, node) {
                return Err(ManifestError::DuplicateName {
                    parent: path.display(),
                    name: name.to_string(),
                });
            }
        }

        Ok(dir)
    }

    fn is_valid_name(name: &str) -> bool {
        !name.is_empty()
            && !RESERVED_NAMES.contains(&name)
            && !name.contains('/')
            && !name.chars().any(char::is_whitespace)
    }

    pub fn root(&self) -> &Directory {
        &self.root
    }

    /// Resolve a path to the directory it names.
    ///
    /// Walks from the root; every segment after the first must name a
    /// directory inside the previous one. Returns `None` on any miss or
    /// non-directory intermediate.
    pub fn resolve(&self, path: &VirtualPath) -> Option<&Directory> {
        let mut current = &self.root;
        for segment in path.components() {
            current = current.get(segment)?.as_directory()?;
        }
        Some(current)
    }

    /// Look up `name` inside the directory at `dir`.
    pub fn lookup(&self, dir: &VirtualPath, name: &str) -> Option<&VirtualNode> {
        self.resolve(dir)?.get(name)
    }

    pub fn is_directory(&self, path: &VirtualPath) -> bool {
        self.resolve(path).is_some()
    }

    /// List a directory in insertion order.
    pub fn list_dir(&self, path: &VirtualPath) -> Option<Vec<ListEntry>> {
        let dir = self.resolve(path)?;
        let entries = dir
            .iter()
            .map(|(name, node)| {
                let (style, description) = match node {
                    VirtualNode::Directory(_) => (TextStyle::Directory, None),
                    VirtualNode::File { .. } => (TextStyle::File, None),
                    VirtualNode::Link { description, .. } => {
                        (TextStyle::Link, description.clone())
                    }
                };
                ListEntry {
                    name: name.to_string(),
                    style,
                    description,
                }
            })
            .collect();
        Some(entries)
    }

    /// Entry names of the directory at `path`, in insertion order.
    pub fn children_names(&self, path: &VirtualPath) -> Vec<&str> {
        self.resolve(path)
            .map(|dir| dir.names().collect())
            .unwrap_or_default()
    }

    /// Every directory path in the tree, parents before children.
    pub fn directories(&self) -> Vec<VirtualPath> {
        let mut found = vec![VirtualPath::root()];
        let mut index = 0;
        while index < found.len() {
            let path = found[index].clone();
            if let Some(dir) = self.resolve(&path) {
                for (name, node) in dir.iter() {
                    if node.is_directory() {
                        found.push(path.join(name));
                    }
                }
            }
            index += 1;
        }
        found
    }
}

/// Whether a link target leaves the site.
pub fn is_external_target(target: &str) -> bool {
    URI_SCHEME.is_match(target)
}
