//! # Output Module
//!
//! Centralizes the tool's user-facing output: the "no files" notice and the
//! end-of-run summary line. Keeping the strings here makes the exact wording
//! easy to verify in tests and stable for scripts that parse it.

use owo_colors::{OwoColorize, Stream};

use crate::info_log;
use crate::logging::is_quiet;
use crate::processor::RunSummary;

/// Print the notice for a run that found no candidate files.
pub fn print_no_files() {
  info_log!("No Rust files found.");
}

/// Print the one-line summary after a fully successful run.
///
/// Reports the total candidates examined and how many were rewritten. The
/// changed count is highlighted when anything was rewritten.
pub fn print_summary(summary: &RunSummary) {
  if is_quiet() {
    return;
  }

  let examined = summary.examined.if_supports_color(Stream::Stdout, |n| n.cyan()).to_string();
  let changed = if summary.changed > 0 {
    summary.changed.if_supports_color(Stream::Stdout, |n| n.green()).to_string()
  } else {
    summary.changed.if_supports_color(Stream::Stdout, |n| n.cyan()).to_string()
  };

  println!("Processed {} Rust files; added header to {}.", examined, changed);
}
