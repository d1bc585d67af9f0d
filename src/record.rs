//! # Commit Records
//!
//! This module defines the data model shared by the collector and the
//! replayer: a `CommitRecord` per commit, and the commits file that holds a
//! newest-first list of them as an indented JSON array.
//!
//! ## File Format
//!
//! ```json
//! [
//!   {
//!     "hash": "4f1c2a...",
//!     "date": "2024-01-01",
//!     "subject": "Update hero section",
//!     "files": [
//!       "src/components/homes/home/HeroArea.tsx"
//!     ]
//!   }
//! ]
//! ```
//!
//! The collector rewrites the whole file on every run. The replayer only
//! reads it, and rejects it as malformed if it is not a JSON array of
//! records or if any record has an empty hash.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single commit as recorded in the commits file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Full commit hash.
    pub hash: String,
    /// Author date in `YYYY-MM-DD` form.
    pub date: String,
    /// First line of the commit message.
    pub subject: String,
    /// Paths touched by the commit, in git's order. May be empty.
    pub files: Vec<String>,
}

impl CommitRecord {
    /// Returns true if `date` is in `YYYY-MM-DD` form.
    pub fn has_valid_date(&self) -> bool {
        static DATE: OnceLock<Regex> = OnceLock::new();
        DATE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"))
            .is_match(&self.date)
    }
}

/// Parse a commits file body into records.
///
/// Every record must carry a non-blank hash; the replayer has nothing to
/// cherry-pick otherwise.
pub fn parse(path: &Path, content: &str) -> Result<Vec<CommitRecord>> {
    let records: Vec<CommitRecord> =
        serde_json::from_str(content).map_err(|source| Error::CommitsFileParse {
            path: path.to_path_buf(),
            source,
        })?;

    for (index, record) in records.iter().enumerate() {
        if record.hash.trim().is_empty() {
            return Err(Error::InvalidRecord {
                index,
                message: "hash is empty".to_string(),
            });
        }
    }

    Ok(records)
}

/// Load the commits file at `path`.
pub fn from_file(path: &Path) -> Result<Vec<CommitRecord>> {
    let content = fs::read_to_string(path).map_err(|source| Error::CommitsFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse(path, &content)
}

/// Serialize records as an indented JSON array.
pub fn to_json(records: &[CommitRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write records to `path`, replacing any existing file.
///
/// Missing parent directories are created.
pub fn to_file(path: &Path, records: &[CommitRecord]) -> Result<()> {
    let json = to_json(records)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::CommitsFileWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    fs::write(path, json).map_err(|source| Error::CommitsFileWrite {
        path: path.to_path_buf(),
        source,
    })
}
