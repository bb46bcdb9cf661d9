//! Tab autocomplete for command names and entry names.
//!
//! - One token: complete against the command names (e.g., "wh" → "whoami ")
//! - More tokens: complete the last token against the entries of the
//!   current directory (e.g., "cat ab" → "cat about.txt ")
//!
//! Only a unique match completes. Matching is case-sensitive.

use crate::core::{Command, VirtualFs};
use crate::models::VirtualPath;

// ============================================================================
// Public Types
// ============================================================================

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AutocompleteResult {
    /// Single match - the completed input line, with a trailing space.
    Single(String),
    /// Several candidates - the input stays as typed.
    Multiple(Vec<String>),
    /// No matches found.
    None,
}

// ============================================================================
// Public API
// ============================================================================

/// Complete the last token of `input`.
pub fn autocomplete(input: &str, cwd: &VirtualPath, fs: &VirtualFs) -> AutocompleteResult {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let Some((&partial, _)) = tokens.split_last() else {
        return AutocompleteResult::None;
    };

    let candidates: Vec<String> = if tokens.len() == 1 {
        Command::names()
            .iter()
            .filter(|name| name.starts_with(partial))
            .map(|name| name.to_string())
            .collect()
    } else {
        fs.children_names(cwd)
            .into_iter()
            .filter(|name| name.starts_with(partial))
            .map(str::to_string)
            .collect()
    };

    match candidates.len() {
        0 => AutocompleteResult::None,
        1 => {
            let mut completed: Vec<&str> = tokens[..tokens.len() - 1].to_vec();
            completed.push(&candidates[0]);
            AutocompleteResult::Single(format!("{} ", completed.join(" ")))
        }
        _ => AutocompleteResult::Multiple(candidates),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MANIFEST: &str = r#"{
        "type": "directory",
        "name": "~",
        "children": [
            { "type": "file", "name": "about.txt", "content": "" },
            { "type": "directory", "name": "projects", "children": [
                { "type": "link", "name": "homelab", "target": "/homelab" },
                { "type": "link", "name": "home-assistant", "target": "/ha" }
            ] },
            { "type": "link", "name": "resume.pdf", "target": "/resume.pdf" }
        ]
    }"#;

    fn create_test_fs() -> VirtualFs {
        VirtualFs::from_manifest_json(TEST_MANIFEST).unwrap()
    }

    fn complete(input: &str) -> AutocompleteResult {
        autocomplete(input, &VirtualPath::root(), &create_test_fs())
    }

    #[test]
    fn test_command_completion() {
        assert_eq!(complete("wh"), AutocompleteResult::Single("whoami ".into()));
        assert_eq!(complete("ma"), AutocompleteResult::Single("matrix ".into()));
        assert_eq!(complete("  he"), AutocompleteResult::Single("help ".into()));
    }

    #[test]
    fn test_command_completion_ambiguous() {
        assert_eq!(
            complete("c"),
            AutocompleteResult::Multiple(vec!["cd".into(), "cat".into(), "clear".into()])
        );
    }

    #[test]
    fn test_command_completion_is_case_sensitive() {
        assert_eq!(complete("WH"), AutocompleteResult::None);
    }

    #[test]
    fn test_entry_completion() {
        assert_eq!(
            complete("cat ab"),
            AutocompleteResult::Single("cat about.txt ".into())
        );
        assert_eq!(
            complete("cd   pro"),
            AutocompleteResult::Single("cd projects ".into())
        );
    }

    #[test]
    fn test_entry_completion_uses_cwd() {
        let fs = create_test_fs();
        let projects = VirtualPath::root().join("projects");
        assert_eq!(
            autocomplete("open home", &projects, &fs),
            AutocompleteResult::Multiple(vec!["homelab".into(), "home-assistant".into()])
        );
        assert_eq!(
            autocomplete("open homel", &projects, &fs),
            AutocompleteResult::Single("open homelab ".into())
        );
    }

    #[test]
    fn test_completes_last_token_only() {
        assert_eq!(
            complete("cat x re"),
            AutocompleteResult::Single("cat x resume.pdf ".into())
        );
    }

    #[test]
    fn test_no_completion() {
        assert_eq!(complete(""), AutocompleteResult::None);
        assert_eq!(complete("   "), AutocompleteResult::None);
        assert_eq!(complete("cat zzz"), AutocompleteResult::None);
        assert_eq!(complete("xyz"), AutocompleteResult::None);
    }
}
