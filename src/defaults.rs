//! Default values for botpick.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::{Path, PathBuf};

/// Author filter used when `--author` is not given.
pub const DEFAULT_AUTHOR: &str = "Builder.io";

/// Commits file location, relative to the repository root.
pub const DEFAULT_COMMITS_FILE: &str = "Frontend_development/builderio_commits.json";

/// Environment variable overriding the repository root.
pub const ENV_REPO: &str = "BOTPICK_REPO";

/// Environment variable overriding the author filter.
pub const ENV_AUTHOR: &str = "BOTPICK_AUTHOR";

/// Environment variable overriding the commits file path.
pub const ENV_COMMITS_FILE: &str = "BOTPICK_COMMITS_FILE";

/// Resolves the commits file path against the repository root.
///
/// Absolute paths are returned unchanged. Relative paths (including the
/// default) are interpreted relative to `repo_root`, so `collect` and `apply`
/// agree on the location no matter which directory they are launched from.
pub fn resolve_commits_file(repo_root: &Path, file: Option<&Path>) -> PathBuf {
    let file = file.unwrap_or_else(|| Path::new(DEFAULT_COMMITS_FILE));
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        repo_root.join(file)
    }
}
