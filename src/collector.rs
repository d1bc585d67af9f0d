//! # Collector
//!
//! Builds the commits file for one author: list the author's commits newest
//! first, look up each commit's metadata, and write the records out as an
//! indented JSON array.
//!
//! Commits for which the history reports no metadata are skipped rather than
//! treated as errors. The skip is logged at `warn` level so an operator can
//! tell a genuinely empty entry from a query that silently returned nothing.

use std::path::Path;

use log::{debug, warn};

use crate::error::Result;
use crate::history::HistoryOperations;
use crate::record::{self, CommitRecord};

/// Collect records for every commit authored by `author`, newest first.
pub fn collect_commits(history: &dyn HistoryOperations, author: &str) -> Result<Vec<CommitRecord>> {
    let hashes = history.log_by_author(author)?;
    debug!("found {} commits by {}", hashes.len(), author);

    let mut commits = Vec::with_capacity(hashes.len());
    for hash in &hashes {
        let Some(commit) = history.show(hash)? else {
            warn!("git show returned no output for {}, skipping", hash);
            continue;
        };

        if !commit.has_valid_date() {
            warn!("commit {} has unexpected date format {:?}", commit.hash, commit.date);
        }

        commits.push(commit);
    }

    Ok(commits)
}

/// Collect records for `author` and write them to `output`, replacing the file.
///
/// Returns the records that were written.
pub fn collect_to_file(
    history: &dyn HistoryOperations,
    author: &str,
    output: &Path,
) -> Result<Vec<CommitRecord>> {
    let commits = collect_commits(history, author)?;
    record::to_file(output, &commits)?;
    debug!("wrote {} records to {}", commits.len(), output.display());
    Ok(commits)
}
