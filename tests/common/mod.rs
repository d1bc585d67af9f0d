//! Shared test utilities for E2E tests.
//!
//! Every test gets a throwaway git repository under an `assert_fs::TempDir`,
//! with identities pinned through environment variables so the tests do not
//! depend on the host's git configuration.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let repo = TestRepo::new();
//!     let hash = repo.commit_as(BOT, "a.txt", "a", "bot change");
//!     repo.command().arg("collect").assert().success();
//! }
//! ```

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::{TestRepo, BOT, HUMAN};
}

/// Author name the tool collects by default.
pub const BOT: &str = "Builder.io";

/// Any other author.
pub const HUMAN: &str = "Jane Doe";

/// A temporary git repository plus helpers for building history.
pub struct TestRepo {
    temp_dir: assert_fs::TempDir,
    out_dir: assert_fs::TempDir,
}

impl TestRepo {
    /// Create a repository on branch `main` with a single base commit by `HUMAN`.
    pub fn new() -> Self {
        let repo = Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
            out_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        };
        repo.git(&["init", "-q"]);
        repo.commit_as(HUMAN, "README.md", "# test\n", "base");
        repo.git(&["checkout", "-q", "-B", "main"]);
        repo
    }

    /// Root of the working copy.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// A path next to (not inside) the working copy, for commits files that
    /// must not show up as untracked changes.
    pub fn outside(&self, name: &str) -> PathBuf {
        self.out_dir.path().join(name)
    }

    /// Run git in the repository and return trimmed stdout, panicking on failure.
    pub fn git(&self, args: &[&str]) -> String {
        let output = self
            .git_command(HUMAN)
            .args(args)
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    fn git_command(&self, author: &str) -> Command {
        let mut cmd = Command::new("git");
        cmd.current_dir(self.path());
        for (key, value) in identity_env(author) {
            cmd.env(key, value);
        }
        cmd
    }

    /// Write `file` and commit it as `author`; returns the new commit hash.
    pub fn commit_as(&self, author: &str, file: &str, content: &str, subject: &str) -> String {
        let full_path = self.path().join(file);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");

        let status = self
            .git_command(author)
            .args(["add", file])
            .status()
            .expect("Failed to run git add");
        assert!(status.success());
        let status = self
            .git_command(author)
            .args(["commit", "-q", "-m", subject])
            .status()
            .expect("Failed to run git commit");
        assert!(status.success());

        self.head()
    }

    /// Merge `branch` into the current branch with a merge commit by `author`.
    pub fn merge_as(&self, author: &str, branch: &str) -> String {
        let status = self
            .git_command(author)
            .args(["merge", "-q", "--no-ff", "-m", "merge", branch])
            .status()
            .expect("Failed to run git merge");
        assert!(status.success());
        self.head()
    }

    pub fn head(&self) -> String {
        self.git(&["rev-parse", "HEAD"])
    }

    pub fn checkout(&self, branch: &str) {
        self.git(&["checkout", "-q", branch]);
    }

    pub fn new_branch(&self, branch: &str, start: &str) {
        self.git(&["checkout", "-q", "-b", branch, start]);
    }

    pub fn commit_count(&self) -> usize {
        self.git(&["rev-list", "--count", "HEAD"])
            .parse()
            .expect("rev-list --count prints a number")
    }

    /// Write a commits file listing `hashes` (newest first) at `path`.
    pub fn write_commits_file(&self, path: &Path, hashes: &[&str]) {
        let records: Vec<serde_json::Value> = hashes
            .iter()
            .map(|hash| {
                serde_json::json!({
                    "hash": hash,
                    "date": "2024-01-01",
                    "subject": "fix",
                    "files": [],
                })
            })
            .collect();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(path, serde_json::to_string_pretty(&records).unwrap())
            .expect("Failed to write commits file");
    }

    /// A `botpick` command pointed at this repository, with colors off.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("botpick");
        cmd.current_dir(self.path())
            .arg("--color")
            .arg("never")
            .env_remove("BOTPICK_REPO")
            .env_remove("BOTPICK_AUTHOR")
            .env_remove("BOTPICK_COMMITS_FILE");
        for (key, value) in identity_env(HUMAN) {
            cmd.env(key, value);
        }
        cmd
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

fn identity_env(author: &str) -> Vec<(&'static str, String)> {
    vec![
        ("GIT_AUTHOR_NAME", author.to_string()),
        ("GIT_AUTHOR_EMAIL", "author@example.com".to_string()),
        ("GIT_AUTHOR_DATE", "2024-01-01T12:00:00Z".to_string()),
        ("GIT_COMMITTER_NAME", HUMAN.to_string()),
        ("GIT_COMMITTER_EMAIL", "committer@example.com".to_string()),
        ("GIT_CONFIG_NOSYSTEM", "1".to_string()),
        ("GIT_CONFIG_GLOBAL", "/dev/null".to_string()),
    ]
}
