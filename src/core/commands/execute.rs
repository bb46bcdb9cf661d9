//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and returns results.

use rand::Rng;

use crate::config::{HELP_TEXT, HOME_ROUTE, NMAP_DEFAULT_TARGET, WHOAMI_TEXT};
use crate::core::VirtualFs;
use crate::models::{OutputLine, VirtualNode, VirtualPath};
use crate::navigator::NavRequest;

use super::{CdTarget, Command, CommandResult, PathArg, simulations};

/// Execute a parsed command and describe its effects.
///
/// Pure: the session is never touched. Working-directory changes,
/// navigation and delayed output come back in the [`CommandResult`].
///
/// # Arguments
///
/// * `cmd` - The parsed command to execute
/// * `fs` - Virtual filesystem
/// * `cwd` - Current working directory
/// * `rng` - Randomness for `matrix`
pub fn execute_command<R: Rng + ?Sized>(
    cmd: Command,
    fs: &VirtualFs,
    cwd: &VirtualPath,
    rng: &mut R,
) -> CommandResult {
    match cmd {
        Command::Help => execute_help(),
        Command::Ls => execute_ls(fs, cwd),
        Command::Cd(target) => execute_cd(target, fs, cwd),
        Command::Cat(file) => execute_cat(file, fs, cwd),
        Command::Open(link) => execute_open(link, fs, cwd),
        Command::Whoami => CommandResult::line(OutputLine::success(WHOAMI_TEXT)),
        Command::Clear => CommandResult::clear_screen(),
        Command::Exit => CommandResult::empty().with_navigation(NavRequest::Close),
        Command::Sudo => simulations::sudo(),
        Command::Nmap(target) => {
            simulations::nmap(target.as_deref().unwrap_or(NMAP_DEFAULT_TARGET))
        }
        Command::Matrix => simulations::matrix(rng),
        Command::Unknown(name) => {
            CommandResult::line(OutputLine::error(format!("Command not found: {name}")))
        }
    }
}

fn execute_help() -> CommandResult {
    let mut lines = vec![OutputLine::info("Available Commands:")];
    lines.extend(HELP_TEXT.lines().map(OutputLine::text));
    CommandResult::output(lines)
}

/// Execute `ls` command.
fn execute_ls(fs: &VirtualFs, cwd: &VirtualPath) -> CommandResult {
    match fs.list_dir(cwd) {
        Some(entries) if entries.is_empty() => {
            CommandResult::line(OutputLine::text("Directory is empty."))
        }
        Some(entries) => CommandResult::line(OutputLine::listing(entries)),
        // The session only ever stores directory paths
        None => {
            tracing::warn!(path = %cwd, "working directory does not resolve");
            CommandResult::line(OutputLine::error(format!("ls: {cwd}: Not a directory")))
        }
    }
}

/// Execute `cd` command.
fn execute_cd(target: CdTarget, fs: &VirtualFs, cwd: &VirtualPath) -> CommandResult {
    match target {
        CdTarget::Home => CommandResult::change_dir(VirtualPath::root())
            .with_navigation(NavRequest::Route(HOME_ROUTE.to_string())),
        CdTarget::Parent => match cwd.parent() {
            Some(parent) => CommandResult::change_dir(parent),
            None => CommandResult::empty(),
        },
        CdTarget::Child(name) => match fs.lookup(cwd, name.as_str()) {
            Some(node) if node.is_directory() => CommandResult::change_dir(cwd.join(name.as_str())),
            _ => CommandResult::line(OutputLine::error(format!(
                "cd: {name}: Not a directory"
            ))),
        },
    }
}

/// Execute `cat` command.
fn execute_cat(file: Option<PathArg>, fs: &VirtualFs, cwd: &VirtualPath) -> CommandResult {
    let Some(name) = file else {
        return CommandResult::line(OutputLine::warning("Usage: cat [file]"));
    };

    match fs.lookup(cwd, name.as_str()) {
        Some(VirtualNode::File { content }) => CommandResult::line(OutputLine::text(content.as_str())),
        _ => CommandResult::line(OutputLine::error(format!("cat: {name}: No such file"))),
    }
}

/// Execute `open` command.
fn execute_open(link: Option<PathArg>, fs: &VirtualFs, cwd: &VirtualPath) -> CommandResult {
    let Some(name) = link else {
        return CommandResult::line(OutputLine::warning("Usage: open [link]"));
    };

    match fs.lookup(cwd, name.as_str()) {
        Some(VirtualNode::Link {
            target, external, ..
        }) => {
            let request = if *external {
                NavRequest::External(target.clone())
            } else {
                NavRequest::Route(target.clone())
            };
            CommandResult::line(OutputLine::success(format!("Opening {name}...")))
                .with_navigation(request)
        }
        _ => CommandResult::line(OutputLine::error(format!("Cannot open {name}"))),
    }
}
