//! Process exit codes used by the `botpick` binary.
//!
//! - `0`: success
//! - `1`: general error (missing or malformed commits file, failed git query)
//! - `2`: invalid command-line usage (reported by clap)
//!
//! A failed `git cherry-pick` is the exception: `apply` exits with whatever
//! status git returned, so wrappers see the same code they would have seen
//! running git directly.

/// Successful run.
pub const SUCCESS: i32 = 0;

/// General error.
pub const ERROR: i32 = 1;

/// Invalid command-line usage.
pub const USAGE: i32 = 2;
