//! Thin wrappers around the system `git` executable.
//!
//! Every function takes the working copy root explicitly and runs git with
//! that directory as its `current_dir`, so nothing here depends on the
//! process working directory. Query output is captured and parsed; the
//! cherry-pick inherits stdio so the operator sees git's own conflict report.

use std::path::Path;
use std::process::{Command, Output};

use log::debug;

use crate::error::{Error, Result};
use crate::record::CommitRecord;

/// Format string for `git show`: hash, date, subject, one per line.
const SHOW_FORMAT: &str = "--format=%H%n%ad%n%s";

/// Strategy option that resolves conflicting hunks in favor of the current branch.
const STRATEGY_OURS: &str = "ours";

fn git(repo: &Path, args: &[&str]) -> Command {
    debug!("git {} (in {})", args.join(" "), repo.display());
    let mut cmd = Command::new("git");
    cmd.args(args).current_dir(repo);
    cmd
}

fn spawn_error(args: &[&str], e: std::io::Error) -> Error {
    Error::GitSpawn {
        command: args.join(" "),
        message: e.to_string(),
    }
}

fn output(repo: &Path, args: &[&str]) -> Result<Output> {
    git(repo, args).output().map_err(|e| spawn_error(args, e))
}

/// Run a git query and return its stdout, failing on a non-zero exit.
fn query(repo: &Path, args: &[&str]) -> Result<String> {
    let output = output(repo, args)?;

    if !output.status.success() {
        return Err(Error::GitCommand {
            command: args.join(" "),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// List the hashes of commits whose author matches `author`, newest first.
pub fn log_hashes(repo: &Path, author: &str) -> Result<Vec<String>> {
    let author_arg = format!("--author={}", author);
    let stdout = query(repo, &["log", &author_arg, "--format=%H"])?;
    Ok(stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Fetch hash, date, subject and changed files for one commit.
///
/// Returns `Ok(None)` when git prints nothing for the commit.
pub fn show_commit(repo: &Path, hash: &str) -> Result<Option<CommitRecord>> {
    let stdout = query(
        repo,
        &["show", "--name-only", SHOW_FORMAT, "--date=short", hash],
    )?;
    parse_show_output(hash, &stdout)
}

/// Parse the output of `git show --name-only --format=%H%n%ad%n%s`.
///
/// The first three lines are the header; every following non-blank line is a
/// changed path. Empty output yields `None`.
pub fn parse_show_output(hash: &str, output: &str) -> Result<Option<CommitRecord>> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let mut lines = trimmed.lines();
    let (Some(commit), Some(date), Some(subject)) = (lines.next(), lines.next(), lines.next())
    else {
        return Err(Error::MalformedShowOutput {
            hash: hash.to_string(),
            output: trimmed.to_string(),
        });
    };

    Ok(Some(CommitRecord {
        hash: commit.to_string(),
        date: date.to_string(),
        subject: subject.to_string(),
        files: lines
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
    }))
}

/// Check whether `commit` is an ancestor of `tip`.
///
/// Any non-zero exit from `git merge-base --is-ancestor` is read as "no",
/// including unknown revisions. Only failing to start git is an error.
pub fn is_ancestor(repo: &Path, commit: &str, tip: &str) -> Result<bool> {
    let args = ["merge-base", "--is-ancestor", commit, tip];
    let output = output(repo, &args)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            debug!("merge-base for {}: {}", commit, stderr.trim());
        }
    }

    Ok(output.status.success())
}

/// Count the parents of `commit`.
pub fn parent_count(repo: &Path, commit: &str) -> Result<usize> {
    let stdout = query(repo, &["rev-list", "--parents", "-n", "1", commit])?;
    parse_parent_count(commit, &stdout)
}

/// Parse `git rev-list --parents -n 1` output: the commit followed by its parents.
pub fn parse_parent_count(commit: &str, output: &str) -> Result<usize> {
    let tokens = output.split_whitespace().count();
    if tokens == 0 {
        return Err(Error::MalformedParents {
            hash: commit.to_string(),
            output: output.to_string(),
        });
    }
    Ok(tokens - 1)
}

/// Build the argument list for a cherry-pick with the "ours" strategy option.
///
/// `mainline` selects the parent to diff against for merge commits (`-m`).
pub fn cherry_pick_args(commit: &str, mainline: Option<u32>) -> Vec<String> {
    let mut args = vec![
        "cherry-pick".to_string(),
        "-X".to_string(),
        STRATEGY_OURS.to_string(),
    ];
    if let Some(parent) = mainline {
        args.push("-m".to_string());
        args.push(parent.to_string());
    }
    args.push(commit.to_string());
    args
}

/// Cherry-pick `commit` onto the current branch.
///
/// git's stdio is inherited. Returns git's exit status; a process killed by
/// a signal is reported as `1`.
pub fn cherry_pick(repo: &Path, commit: &str, mainline: Option<u32>) -> Result<i32> {
    let args = cherry_pick_args(commit, mainline);
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let status = git(repo, &args)
        .status()
        .map_err(|e| spawn_error(&args, e))?;

    Ok(status.code().unwrap_or(1))
}
