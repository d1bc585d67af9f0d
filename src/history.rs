//! # History Store Access
//!
//! The collector and the replayer never call `git` directly. They go through
//! the `HistoryOperations` trait, which names exactly the history queries and
//! mutations they need. This keeps the working copy an explicit handle rather
//! than ambient process state, and lets tests substitute an in-memory history.
//!
//! - **`DefaultHistoryOperations`**: the real implementation, delegating to
//!   the functions in [`crate::git`] for a given repository root.
//! - **`MockHistory`** (tests only): a scripted history that records every
//!   cherry-pick it is asked to perform.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::record::CommitRecord;

/// Trait for history operations - allows mocking in tests
pub trait HistoryOperations {
    /// Hashes of commits authored by `author`, newest first.
    fn log_by_author(&self, author: &str) -> Result<Vec<String>>;

    /// Metadata for a single commit, or `None` if the history reports nothing.
    fn show(&self, hash: &str) -> Result<Option<CommitRecord>>;

    /// Whether `hash` is already reachable from `HEAD`.
    fn is_applied(&self, hash: &str) -> Result<bool>;

    /// Number of parents of `hash`.
    fn parent_count(&self, hash: &str) -> Result<usize>;

    /// Replay `hash` onto the current branch, favoring the current branch on
    /// conflicts. `mainline` restricts a merge commit to one parent's lineage.
    ///
    /// Returns the exit status of the replay; zero means success.
    fn cherry_pick(&self, hash: &str, mainline: Option<u32>) -> Result<i32>;
}

/// The default implementation of `HistoryOperations`, which runs the system
/// `git` command inside a working copy.
#[derive(Debug, Clone)]
pub struct DefaultHistoryOperations {
    repo_root: PathBuf,
}

impl DefaultHistoryOperations {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }

    /// The working copy git runs in.
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }
}

impl HistoryOperations for DefaultHistoryOperations {
    fn log_by_author(&self, author: &str) -> Result<Vec<String>> {
        crate::git::log_hashes(&self.repo_root, author)
    }

    fn show(&self, hash: &str) -> Result<Option<CommitRecord>> {
        crate::git::show_commit(&self.repo_root, hash)
    }

    fn is_applied(&self, hash: &str) -> Result<bool> {
        crate::git::is_ancestor(&self.repo_root, hash, "HEAD")
    }

    fn parent_count(&self, hash: &str) -> Result<usize> {
        crate::git::parent_count(&self.repo_root, hash)
    }

    fn cherry_pick(&self, hash: &str, mainline: Option<u32>) -> Result<i32> {
        crate::git::cherry_pick(&self.repo_root, hash, mainline)
    }
}
