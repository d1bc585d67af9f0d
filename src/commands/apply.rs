//! # Apply Command Implementation
//!
//! Implements `botpick apply`: read the commits file and cherry-pick every
//! record that `HEAD` does not already contain, newest first, with
//! `-X ours` so the current branch wins conflicts.
//!
//! - Records already reachable from `HEAD` are reported and skipped.
//! - Merge commits are replayed against their first parent (`-m 1`).
//! - The first failed cherry-pick stops the run; the process exits with
//!   git's status and the working copy is left for manual resolution.
//! - `--dry-run` performs the ancestry checks only and reports what would
//!   be cherry-picked.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use botpick::defaults;
use botpick::history::DefaultHistoryOperations;
use botpick::output::Status;
use botpick::record;
use botpick::replayer::{self, ReplayEvent, ReplayOptions};

use super::Context;

/// Cherry-pick recorded commits onto the current branch
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Commits file to read; relative paths resolve against the repository root
    #[arg(short, long, value_name = "PATH", env = defaults::ENV_COMMITS_FILE)]
    pub file: Option<PathBuf>,

    /// Show what would be cherry-picked without changing the branch
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Only print the summary and errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the `apply` command.
pub fn execute(args: ApplyArgs, context: &Context) -> Result<()> {
    let path = defaults::resolve_commits_file(&context.repo, args.file.as_deref());
    let records = record::from_file(&path)?;

    let history = DefaultHistoryOperations::new(&context.repo);
    let options = ReplayOptions {
        dry_run: args.dry_run,
    };
    let out = &context.output;
    let quiet = args.quiet;

    if !quiet && args.dry_run {
        println!("🔎 DRY RUN MODE - No changes will be made");
    }

    let summary = replayer::replay(&history, &records, options, &mut |event| {
        if quiet {
            return;
        }
        match event {
            ReplayEvent::Skipped { hash } => println!(
                "{} Skipping {} (already in history)",
                out.marker(Status::Skip),
                out.hash(hash)
            ),
            ReplayEvent::Applying { hash, .. } => println!(
                "{} Cherry-picking {}...",
                out.marker(Status::Pick),
                out.hash(hash)
            ),
            ReplayEvent::WouldApply { hash, mainline } => println!(
                "{} Would cherry-pick {}{}",
                out.marker(Status::Pick),
                out.hash(hash),
                if mainline.is_some() {
                    " (merge commit, first parent)"
                } else {
                    ""
                }
            ),
            // Failures surface as the returned error.
            ReplayEvent::Applied { .. } | ReplayEvent::Failed { .. } => {}
        }
    })?;

    println!("{} {}", out.marker(Status::Done), summary);
    Ok(())
}
