//! # Collect Command Implementation
//!
//! Implements `botpick collect`: list every commit whose author matches the
//! filter, newest first, and write hash, date, subject and changed files for
//! each one to the commits file. The file is replaced on every run.
//!
//! With no arguments the command collects `Builder.io` commits into
//! `Frontend_development/builderio_commits.json` under the repository root.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;

use botpick::collector;
use botpick::defaults;
use botpick::history::DefaultHistoryOperations;
use botpick::output::Status;

use super::Context;

/// Record a bot's commits into a JSON file
#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Author name (or pattern) passed to `git log --author`
    #[arg(long, value_name = "NAME", env = defaults::ENV_AUTHOR, default_value = defaults::DEFAULT_AUTHOR)]
    pub author: String,

    /// Commits file to write; relative paths resolve against the repository root
    #[arg(short, long, value_name = "PATH", env = defaults::ENV_COMMITS_FILE)]
    pub output: Option<PathBuf>,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the `collect` command.
pub fn execute(args: CollectArgs, context: &Context) -> Result<()> {
    let path = defaults::resolve_commits_file(&context.repo, args.output.as_deref());
    let history = DefaultHistoryOperations::new(&context.repo);

    let commits = collector::collect_to_file(&history, &args.author, &path)
        .with_context(|| format!("Failed to collect commits by {}", args.author))?;

    if !args.quiet {
        println!(
            "{} Collected {} commits by {} into {}",
            context.output.marker(Status::Done),
            commits.len(),
            args.author,
            path.display()
        );
    }

    Ok(())
}
