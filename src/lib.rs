//! # license-headers
//!
//! A tool that ensures the project license header is present at the top of
//! every Rust source file in the repository.
//!
//! `license-headers` asks git for the repository root and for all tracked and
//! untracked (non-ignored) `*.rs` files, then prepends the fixed header to any
//! file that does not already carry it. Files are modified in place, one at a
//! time, and a file that already starts with the header (optionally after
//! blank lines, or behind a UTF-8 byte-order-mark) is left byte-identical.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use license_headers::{git, processor::Processor};
//!
//! fn main() -> anyhow::Result<()> {
//!     let repo_root = git::resolve_repo_root(Path::new("."));
//!     let files = git::list_rust_files(&repo_root)?;
//!
//!     let summary = Processor::new().process(&files)?;
//!     println!("changed {} of {}", summary.changed, summary.examined);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`git`] - repository root resolution and candidate file enumeration
//! * [`header`] - the fixed header constant and pure content checks
//! * [`processor`] - the read-check-write sequence over candidate files
//! * [`logging`] - verbosity, color mode, and tracing setup

pub mod cli;
pub mod git;
pub mod header;
pub mod logging;
pub mod output;
pub mod processor;
