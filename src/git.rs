//! # Git Module
//!
//! This module contains the two git interactions the tool depends on:
//! resolving the repository root and listing candidate Rust files. Both go
//! through the `git` command-line tool rather than an embedded library, so git
//! must be installed for file enumeration to work.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::debug;

/// Errors from invoking the external `git` tool.
#[derive(Debug, thiserror::Error)]
pub enum GitError {
  /// The git binary could not be spawned at all.
  #[error("Failed to run `git {args}`: {source}")]
  Spawn {
    args: String,
    #[source]
    source: std::io::Error,
  },

  /// git ran but exited with a non-zero status.
  #[error("`git {args}` failed with {status}: {stderr}")]
  CommandFailed {
    args: String,
    status: std::process::ExitStatus,
    stderr: String,
  },
}

/// Runs a git command in `dir`, capturing output and failing on non-zero exit.
fn run_git(dir: &Path, args: &[&str]) -> Result<Output, GitError> {
  let output = Command::new("git")
    .args(args)
    .current_dir(dir)
    .output()
    .map_err(|source| GitError::Spawn {
      args: args.join(" "),
      source,
    })?;

  if !output.status.success() {
    return Err(GitError::CommandFailed {
      args: args.join(" "),
      status: output.status,
      stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    });
  }

  Ok(output)
}

/// Resolves the repository root for the run.
///
/// Asks git for the top-level directory of the repository enclosing `start`.
/// When that fails for any reason (git missing, not inside a repository), the
/// fallback is the directory two levels above the running executable, which
/// matches the layout this tool is normally installed under. The fallback may
/// not actually be a repository root; that inaccuracy surfaces later as an
/// enumeration failure rather than here.
///
/// This function never fails.
pub fn resolve_repo_root(start: &Path) -> PathBuf {
  match run_git(start, &["rev-parse", "--show-toplevel"]) {
    Ok(output) => {
      let top_level = String::from_utf8_lossy(&output.stdout).trim().to_string();
      if !top_level.is_empty() {
        debug!("Repository root from git: {}", top_level);
        return PathBuf::from(top_level);
      }
      debug!("git rev-parse returned empty output, using fallback root");
      fallback_root(start)
    }
    Err(e) => {
      debug!("Could not resolve repository root via git ({}), using fallback", e);
      fallback_root(start)
    }
  }
}

/// Fallback root: two directory levels above the running executable, or the
/// starting directory when even the executable path is unavailable.
fn fallback_root(start: &Path) -> PathBuf {
  std::env::current_exe()
    .ok()
    .and_then(|exe| exe.parent().and_then(Path::parent).map(Path::to_path_buf))
    .unwrap_or_else(|| start.to_path_buf())
}

/// Lists every candidate Rust file in the repository.
///
/// Runs `git ls-files --cached --others --exclude-standard -- *.rs` from the
/// repository root, picking up tracked files plus untracked files that are not
/// ignored. Blank lines in the output are discarded; the remaining relative
/// paths are joined onto `repo_root` in the order git emitted them.
///
/// # Errors
///
/// Returns an error when git cannot be spawned or exits non-zero (for example
/// when `repo_root` is not actually a repository). There is no recovery here:
/// the caller aborts the run.
pub fn list_rust_files(repo_root: &Path) -> Result<Vec<PathBuf>, GitError> {
  let output = run_git(
    repo_root,
    &["ls-files", "--cached", "--others", "--exclude-standard", "--", "*.rs"],
  )?;

  let stdout = String::from_utf8_lossy(&output.stdout);
  let files: Vec<PathBuf> = stdout
    .lines()
    .filter(|line| !line.trim().is_empty())
    .map(|line| repo_root.join(line))
    .collect();

  debug!("git ls-files reported {} Rust files", files.len());

  Ok(files)
}
