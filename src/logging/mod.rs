//! # Logging Module
//!
//! Logging utilities for the license-headers tool:
//! - diagnostic `tracing` output on stderr, controlled by `-v`/`-q`
//! - user-facing output macros that respect quiet mode
//!
//! Verbose diagnostics go to stderr and user-facing lines go to stdout so the
//! tool stays friendly to pipelines.

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// Logs a message to stderr if verbose mode is enabled.
///
/// Uses the same format string syntax as [`eprintln!`].
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Logs a user-facing message to stdout unless quiet mode is enabled.
///
/// Uses the same format string syntax as [`println!`].
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Prints an info message, colored when the terminal supports it.
///
/// Used by the [`info_log!`] macro; not intended to be called directly.
pub fn print_info_log(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.yellow()));
}
