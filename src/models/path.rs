//! Working-directory paths.

use std::fmt;

use crate::config::ROOT_SEGMENT;

/// A path in the virtual filesystem as an ordered list of segments.
///
/// The first segment is always the root (`~`). Moving up is done by
/// truncating the segment list, so nodes never need parent links.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VirtualPath(Vec<String>);

impl VirtualPath {
    /// The root directory.
    pub fn root() -> Self {
        Self(vec![ROOT_SEGMENT.to_string()])
    }

    /// Build a path from segments. Returns `None` unless the first is `~`.
    pub fn from_segments<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.first().map(String::as_str) != Some(ROOT_SEGMENT) {
            return None;
        }
        Some(Self(segments))
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments, root included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.len() == 1
    }

    /// Segments below the root.
    pub fn components(&self) -> &[String] {
        &self.0[1..]
    }

    /// This path with one more segment.
    pub fn join(&self, name: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.into());
        Self(segments)
    }

    /// The enclosing directory, or `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    /// Display form used in the prompt (`~`, `~/projects`).
    pub fn display(&self) -> String {
        self.0.join("/")
    }
}

impl Default for VirtualPath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root() {
        let root = VirtualPath::root();
        assert!(root.is_root());
        assert_eq!(root.display(), "~");
        assert!(root.parent().is_none());
        assert!(root.components().is_empty());
    }

    #[test]
    fn test_join_and_parent() {
        let projects = VirtualPath::root().join("projects");
        assert_eq!(projects.display(), "~/projects");
        assert_eq!(projects.len(), 2);
        assert_eq!(projects.parent(), Some(VirtualPath::root()));
    }

    #[test]
    fn test_from_segments_requires_root() {
        assert!(VirtualPath::from_segments(["projects"]).is_none());
        assert!(VirtualPath::from_segments(Vec::<String>::new()).is_none());
        let path = VirtualPath::from_segments(["~", "socials"]).unwrap();
        assert_eq!(path.to_string(), "~/socials");
    }
}
