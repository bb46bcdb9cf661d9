//! Terminal configuration.
//!
//! Centralizes the constants used by the session engine. Text assets and the
//! virtual filesystem manifest are loaded at compile time using `include_str!`.

use serde::Deserialize;

use crate::error::ConfigError;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Body of the `help` command, one command per line.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// JSON manifest describing the bundled virtual filesystem.
pub const FILESYSTEM_MANIFEST: &str = include_str!("../assets/filesystem.json");

// =============================================================================
// Identity
// =============================================================================

/// Operating system name shown in the boot banner.
pub const APP_NAME: &str = "DC-OS";

/// Version shown in the boot banner.
pub const APP_VERSION: &str = "2.0";

/// Default user shown in the prompt.
pub const PROMPT_USER: &str = "user";

/// Default host shown in the prompt and in `sudo` refusals.
pub const PROMPT_HOST: &str = "dc-portfolio";

/// Output of `whoami`.
pub const WHOAMI_TEXT: &str = "uid=1000(guest) gid=1000(guest) groups=1000(guest),27(sudo)";

// =============================================================================
// Filesystem
// =============================================================================

/// Name of the root directory; every path starts with it.
pub const ROOT_SEGMENT: &str = "~";

/// Site route the navigator is sent to by `cd` / `cd ~`.
pub const HOME_ROUTE: &str = "/";

// =============================================================================
// Limits
// =============================================================================

/// Maximum number of scrollback lines kept per session.
pub const MAX_SCROLLBACK: usize = 1000;

/// Maximum number of submitted commands kept for recall.
pub const MAX_COMMAND_HISTORY: usize = 100;

// =============================================================================
// Simulated commands
// =============================================================================

/// Delays for commands that print part of their output later (milliseconds).
pub mod delays {
    /// `sudo` refusal.
    pub const SUDO_MS: u64 = 1000;
    /// `nmap` port table.
    pub const NMAP_MS: u64 = 800;
    /// Interval between `matrix` frames.
    pub const MATRIX_FRAME_MS: u64 = 100;
}

/// Digital rain parameters for `matrix`.
pub mod matrix {
    /// Number of rain lines printed after the greeting.
    pub const FRAMES: usize = 16;
    /// Shortest rain line.
    pub const MIN_WIDTH: usize = 20;
    /// Longest rain line (exclusive).
    pub const MAX_WIDTH: usize = 80;
}

/// Target scanned by `nmap` when none is given.
pub const NMAP_DEFAULT_TARGET: &str = "127.0.0.1";

// =============================================================================
// Runtime configuration
// =============================================================================

/// Per-session settings a host may override.
///
/// Every field falls back to the constants above, so a partial JSON object
/// such as `{"user": "visitor"}` is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// User part of the prompt.
    pub user: String,
    /// Host part of the prompt.
    pub host: String,
    /// Scrollback capacity; the oldest lines are dropped beyond it.
    pub scrollback_limit: usize,
    /// Command history capacity; the oldest entries are dropped beyond it.
    pub history_limit: usize,
    /// Seed new sessions with the boot banner.
    pub banner: bool,
}

impl TerminalConfig {
    /// Parse a configuration from JSON, rejecting zero capacities.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the limits are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scrollback_limit == 0 {
            return Err(ConfigError::ZeroLimit {
                field: "scrollback_limit",
            });
        }
        if self.history_limit == 0 {
            return Err(ConfigError::ZeroLimit {
                field: "history_limit",
            });
        }
        Ok(())
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            user: PROMPT_USER.to_string(),
            host: PROMPT_HOST.to_string(),
            scrollback_limit: MAX_SCROLLBACK,
            history_limit: MAX_COMMAND_HISTORY,
            banner: true,
        }
    }
}
