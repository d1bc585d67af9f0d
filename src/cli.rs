//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use botpick::defaults;
use botpick::output::OutputConfig;

use crate::commands::{self, Context};

/// botpick - Collect a bot's commits and replay them onto the current branch
#[derive(Parser, Debug)]
#[command(name = "botpick")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Working copy to run git in; relative commit-file paths resolve against it
    #[arg(long, global = true, value_name = "DIR", env = defaults::ENV_REPO, default_value = ".")]
    repo: PathBuf,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (RUST_LOG takes precedence when set)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Record a bot's commits (hash, date, subject, files) into a JSON file
    Collect(commands::collect::CollectArgs),

    /// Cherry-pick recorded commits that are not yet on the current branch
    Apply(commands::apply::ApplyArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let context = Context {
            repo: self.repo,
            output: OutputConfig::from_env_and_flag(&self.color),
        };

        match self.command {
            Commands::Collect(args) => commands::collect::execute(args, &context),
            Commands::Apply(args) => commands::apply::execute(args, &context),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Route `log` records to stderr through `env_logger`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A logger may already be installed when running under a test harness.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
