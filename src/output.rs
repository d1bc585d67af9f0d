//! # Output Configuration
//!
//! Controls how `botpick` decorates its progress output: colored commit
//! hashes and emoji status markers when the terminal supports them, plain
//! text otherwise. The summary and diagnostic sentences themselves never
//! change, so scripts can match on them regardless of color settings.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::env;

use console::style;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

/// Kind of status line being printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Skip,
    Pick,
    Done,
    Fail,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `always` and `never` are absolute; anything else means auto-detect.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Prefix for a status line.
    pub fn marker(&self, status: Status) -> &'static str {
        match (self.use_color, status) {
            (true, Status::Skip) => "⏭️ ",
            (true, Status::Pick) => "🍒",
            (true, Status::Done) => "✅",
            (true, Status::Fail) => "❌",
            (false, Status::Skip) => "[SKIP]",
            (false, Status::Pick) => "[PICK]",
            (false, Status::Done) => "[DONE]",
            (false, Status::Fail) => "[FAIL]",
        }
    }

    /// A commit hash, highlighted when colors are enabled.
    pub fn hash(&self, hash: &str) -> String {
        if self.use_color {
            style(hash).yellow().force_styling(true).to_string()
        } else {
            hash.to_string()
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}
