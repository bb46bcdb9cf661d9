//! Terminal output types.

use std::borrow::Cow;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Category of an output line, used by hosts to pick a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineKind {
    Command,
    Info,
    Success,
    Error,
    Warning,
    Text,
    Matrix,
}

impl LineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Text => "text",
            Self::Matrix => "matrix",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text styling for `ls` entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    /// Directory entries (blue, bold)
    Directory,
    /// Regular files
    File,
    /// Links to pages or external sites
    Link,
}

/// One entry of an `ls` listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListEntry {
    pub name: String,
    pub style: TextStyle,
    /// Short blurb attached to some links.
    pub description: Option<String>,
}

impl ListEntry {
    /// Name as printed: directories get a trailing `/`.
    pub fn display_name(&self) -> Cow<'_, str> {
        match self.style {
            TextStyle::Directory => Cow::Owned(format!("{}/", self.name)),
            TextStyle::File | TextStyle::Link => Cow::Borrowed(&self.name),
        }
    }
}

/// Represents a single line of output in the terminal with a unique ID
#[derive(Clone, Debug)]
pub struct OutputLine {
    /// Unique ID for keyed rendering
    pub id: usize,
    pub data: OutputLineData,
}

/// The actual content of an output line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputLineData {
    /// Echo of a submitted command
    Command { prompt: String, input: String },
    Text(String),
    Info(String),
    Success(String),
    Error(String),
    /// Usage hints
    Warning(String),
    /// Digital rain
    Matrix(String),
    /// Directory listing, rendered on one line
    Listing(Vec<ListEntry>),
}

static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Info(s.into()))
    }

    pub fn success(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Success(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn warning(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Warning(s.into()))
    }

    pub fn matrix(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Matrix(s.into()))
    }

    pub fn command(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            input: input.into(),
        })
    }

    pub fn listing(entries: Vec<ListEntry>) -> Self {
        Self::new(OutputLineData::Listing(entries))
    }

    pub fn kind(&self) -> LineKind {
        match &self.data {
            OutputLineData::Command { .. } => LineKind::Command,
            OutputLineData::Text(_) | OutputLineData::Listing(_) => LineKind::Text,
            OutputLineData::Info(_) => LineKind::Info,
            OutputLineData::Success(_) => LineKind::Success,
            OutputLineData::Error(_) => LineKind::Error,
            OutputLineData::Warning(_) => LineKind::Warning,
            OutputLineData::Matrix(_) => LineKind::Matrix,
        }
    }

    /// Plain-text rendering of the line.
    pub fn text_content(&self) -> Cow<'_, str> {
        match &self.data {
            OutputLineData::Command { prompt, input } => Cow::Owned(format!("{prompt}$ {input}")),
            OutputLineData::Text(s)
            | OutputLineData::Info(s)
            | OutputLineData::Success(s)
            | OutputLineData::Error(s)
            | OutputLineData::Warning(s)
            | OutputLineData::Matrix(s) => Cow::Borrowed(s),
            OutputLineData::Listing(entries) => Cow::Owned(
                entries
                    .iter()
                    .map(|entry| entry.display_name())
                    .collect::<Vec<_>>()
                    .join("  "),
            ),
        }
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // IDs are not part of the content
        self.data == other.data
    }
}

impl Eq for OutputLine {}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, style: TextStyle) -> ListEntry {
        ListEntry {
            name: name.to_string(),
            style,
            description: None,
        }
    }

    #[test]
    fn test_output_line_kinds() {
        assert_eq!(OutputLine::text("a").kind(), LineKind::Text);
        assert_eq!(OutputLine::info("a").kind(), LineKind::Info);
        assert_eq!(OutputLine::success("a").kind(), LineKind::Success);
        assert_eq!(OutputLine::error("a").kind(), LineKind::Error);
        assert_eq!(OutputLine::warning("a").kind(), LineKind::Warning);
        assert_eq!(OutputLine::matrix("0101").kind(), LineKind::Matrix);
        assert_eq!(OutputLine::command("p", "ls").kind(), LineKind::Command);
        assert_eq!(OutputLine::listing(vec![]).kind(), LineKind::Text);
    }

    #[test]
    fn test_command_line_text() {
        let line = OutputLine::command("user@dc-portfolio:~", "ls");
        assert_eq!(line.text_content(), "user@dc-portfolio:~$ ls");
    }

    #[test]
    fn test_listing_text_marks_directories() {
        let line = OutputLine::listing(vec![
            entry("about.txt", TextStyle::File),
            entry("projects", TextStyle::Directory),
            entry("resume.pdf", TextStyle::Link),
        ]);
        assert_eq!(line.text_content(), "about.txt  projects/  resume.pdf");
    }

    #[test]
    fn test_unique_ids() {
        let line1 = OutputLine::text("first");
        let line2 = OutputLine::text("second");
        let line3 = OutputLine::text("first");

        assert_ne!(line1.id, line2.id);
        assert_ne!(line1.id, line3.id);
        assert_ne!(line2.id, line3.id);

        // But content equality works
        assert_eq!(line1, line3);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(LineKind::Warning.to_string(), "warning");
        assert_eq!(LineKind::Command.as_str(), "command");
    }
}
