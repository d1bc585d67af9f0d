//! # CLI Command Implementations
//!
//! Each subcommand of `botpick` lives in its own file with:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic by calling into the `botpick` library.

use std::path::PathBuf;

use botpick::output::OutputConfig;

pub mod apply;
pub mod collect;
pub mod completions;

/// Settings shared by every subcommand, taken from the global flags.
#[derive(Debug, Clone)]
pub struct Context {
    /// Working copy git runs in.
    pub repo: PathBuf,
    pub output: OutputConfig,
}
