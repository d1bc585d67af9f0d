//! # botpick
//!
//! This library collects the commits a bot authored in a git repository and
//! replays them onto the current branch. It backs the `botpick` command-line
//! tool but can be driven directly by anything that wants the same behavior.
//!
//! ## Quick Example
//!
//! ```no_run
//! use botpick::collector;
//! use botpick::history::DefaultHistoryOperations;
//! use botpick::replayer::{self, ReplayOptions};
//! use std::path::Path;
//!
//! let history = DefaultHistoryOperations::new(".");
//! let file = Path::new("Frontend_development/builderio_commits.json");
//!
//! // Snapshot the bot's commits...
//! let records = collector::collect_to_file(&history, "Builder.io", file).unwrap();
//!
//! // ...and replay whatever HEAD does not already contain.
//! let summary = replayer::replay(&history, &records, ReplayOptions::default(), &mut |_| {}).unwrap();
//! println!("{}", summary);
//! ```
//!
//! ## Core Concepts
//!
//! - **Commit records (`record`)**: hash, date, subject and changed files of a
//!   commit, persisted newest-first as an indented JSON array.
//! - **History access (`history`, `git`)**: the `HistoryOperations` trait is the
//!   only way the rest of the library touches git. `DefaultHistoryOperations`
//!   runs the system `git` binary in a given working copy.
//! - **Collector (`collector`)**: `git log --author` plus `git show` per commit,
//!   written out as commit records.
//! - **Replayer (`replayer`)**: ancestry check, then `git cherry-pick -X ours`
//!   (with `-m 1` for merges), halting on the first failure.

pub mod collector;
pub mod defaults;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod history;
pub mod output;
pub mod record;
pub mod replayer;

#[cfg(test)]
mod parser_proptest;
