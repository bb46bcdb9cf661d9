//! Command line parsing.
//!
//! The terminal is a single-argument shell: a line is trimmed, split on
//! whitespace, and the first token names the command. There is no quoting,
//! piping, or expansion.

/// A parsed, non-empty command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLine {
    /// Command name as typed.
    pub name: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// The only argument any command looks at.
    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

/// Parse user input into a command line.
///
/// Returns `None` for blank input.
pub fn parse_input(input: &str) -> Option<CommandLine> {
    let mut tokens = input.split_whitespace();
    let name = tokens.next()?.to_string();
    let args = tokens.map(str::to_string).collect();
    Some(CommandLine { name, args })
}
