//! # Error Handling
//!
//! This module defines the centralized error type for the `botpick` library.
//! It uses `thiserror` to build a single `Error` enum covering every failure
//! the collector and the replayer can run into, with enough context in each
//! variant to tell the operator what to look at.
//!
//! ## Key Components
//!
//! - **`Error`**: All library failures. Git failures carry the command that
//!   was run; commits-file failures carry the path.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! - **`Error::exit_code`**: The process exit status an error maps to. A failed
//!   cherry-pick propagates git's own status; everything else is a general
//!   error.

use std::path::PathBuf;

use thiserror::Error;

use crate::exit_codes;

/// Main error type for botpick operations
#[derive(Error, Debug)]
pub enum Error {
    /// The `git` executable could not be started.
    #[error("Failed to run git {command}: {message}")]
    GitSpawn { command: String, message: String },

    /// A git query exited with a non-zero status.
    #[error("Git command failed: git {command} (exit code {}): {stderr}", code.map(|c| c.to_string()).unwrap_or_else(|| "none".to_string()))]
    GitCommand {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// `git show` printed something, but not the hash/date/subject header.
    #[error("Unexpected git show output for {hash}: {output:?}")]
    MalformedShowOutput { hash: String, output: String },

    /// `git rev-list --parents` printed nothing for a commit.
    #[error("Unexpected git rev-list output for {hash}: {output:?}")]
    MalformedParents { hash: String, output: String },

    /// The commits file could not be read.
    #[error("Failed to read commits file {}: {source}", path.display())]
    CommitsFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The commits file is not a valid JSON array of commit records.
    #[error("Malformed commits file {}: {source}", path.display())]
    CommitsFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The commits file could not be written.
    #[error("Failed to write commits file {}: {source}", path.display())]
    CommitsFileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record in the commits file failed validation.
    #[error("Invalid commit record at index {index}: {message}")]
    InvalidRecord { index: usize, message: String },

    /// `git cherry-pick` failed; the run halts here.
    #[error("Failed while cherry-picking {hash}. Resolve conflicts and rerun if needed.")]
    CherryPickFailed { hash: String, code: i32 },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit status this error should terminate with.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::CherryPickFailed { code, .. } => *code,
            _ => exit_codes::ERROR,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
