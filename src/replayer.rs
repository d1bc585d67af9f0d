//! # Replayer
//!
//! Applies the records of a commits file onto the current branch, in file
//! order (newest first), one cherry-pick at a time.
//!
//! Each record goes through a small state machine:
//!
//! ```text
//! Unchecked ──► AlreadyApplied                 (reachable from HEAD, skipped)
//!     │
//!     └──────► Applying ──► Applied            (cherry-pick exited 0)
//!                   │
//!                   └─────► Failed             (halts the whole run)
//! ```
//!
//! Every cherry-pick uses the `ours` strategy option so that conflicting
//! hunks keep the current branch's version. Merge commits are replayed
//! against their first parent. A failed cherry-pick stops the run with
//! [`Error::CherryPickFailed`]; the working copy is left as git left it and
//! the operator resolves it by hand before rerunning. Rerunning is safe
//! because records that made it onto the branch are skipped.

use std::fmt;

use log::info;

use crate::error::{Error, Result};
use crate::history::HistoryOperations;
use crate::record::CommitRecord;

/// Parent used as the mainline when replaying a merge commit.
pub const FIRST_PARENT: u32 = 1;

/// Terminal state of a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    /// Already reachable from `HEAD`; nothing was done.
    AlreadyApplied,
    /// Cherry-picked successfully.
    Applied,
    /// Not yet applied; dry run only.
    WouldApply,
    /// Cherry-pick exited with this non-zero status.
    Failed { code: i32 },
}

/// Progress notifications emitted while replaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayEvent<'a> {
    Skipped { hash: &'a str },
    Applying { hash: &'a str, mainline: Option<u32> },
    Applied { hash: &'a str },
    WouldApply { hash: &'a str, mainline: Option<u32> },
    Failed { hash: &'a str, code: i32 },
}

/// Options controlling a replay run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayOptions {
    /// Check ancestry only; never run the cherry-pick.
    pub dry_run: bool,
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub skipped: usize,
    pub dry_run: bool,
}

impl fmt::Display for ReplaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.dry_run { "Would apply" } else { "Applied" };
        write!(
            f,
            "{} {} commits; skipped {} already present.",
            verb, self.applied, self.skipped
        )
    }
}

/// Mainline argument for a commit with `parents` parents.
pub fn mainline_for(parents: usize) -> Option<u32> {
    (parents > 1).then_some(FIRST_PARENT)
}

/// Drive one record from `Unchecked` to a terminal state.
fn replay_record(
    history: &dyn HistoryOperations,
    record: &CommitRecord,
    options: ReplayOptions,
    on_event: &mut dyn FnMut(ReplayEvent<'_>),
) -> Result<RecordState> {
    let hash = record.hash.as_str();

    if history.is_applied(hash)? {
        info!("{}: already applied", hash);
        on_event(ReplayEvent::Skipped { hash });
        return Ok(RecordState::AlreadyApplied);
    }

    let mainline = mainline_for(history.parent_count(hash)?);

    if options.dry_run {
        info!("{}: would apply (mainline {:?})", hash, mainline);
        on_event(ReplayEvent::WouldApply { hash, mainline });
        return Ok(RecordState::WouldApply);
    }

    info!("{}: applying (mainline {:?})", hash, mainline);
    on_event(ReplayEvent::Applying { hash, mainline });

    let code = history.cherry_pick(hash, mainline)?;
    if code != 0 {
        info!("{}: failed with status {}", hash, code);
        on_event(ReplayEvent::Failed { hash, code });
        return Ok(RecordState::Failed { code });
    }

    info!("{}: applied", hash);
    on_event(ReplayEvent::Applied { hash });
    Ok(RecordState::Applied)
}

/// Replay `records` in order, stopping at the first failed cherry-pick.
///
/// Returns the applied/skipped counts on success. A failed cherry-pick
/// returns [`Error::CherryPickFailed`] carrying git's exit status; records
/// after it are not looked at.
pub fn replay(
    history: &dyn HistoryOperations,
    records: &[CommitRecord],
    options: ReplayOptions,
    on_event: &mut dyn FnMut(ReplayEvent<'_>),
) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary {
        dry_run: options.dry_run,
        ..ReplaySummary::default()
    };

    for record in records {
        match replay_record(history, record, options, on_event)? {
            RecordState::AlreadyApplied => summary.skipped += 1,
            RecordState::Applied | RecordState::WouldApply => summary.applied += 1,
            RecordState::Failed { code } => {
                return Err(Error::CherryPickFailed {
                    hash: record.hash.clone(),
                    code,
                });
            }
        }
    }

    Ok(summary)
}
