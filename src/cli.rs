//! # CLI Module
//!
//! Command-line surface of the tool. There are no functional options: which
//! files are touched and what gets written are fixed by the header constant
//! and the enclosing repository. The only switches control output verbosity
//! and color.

use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use tracing::debug;

use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::processor::Processor;
use crate::{git, output};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Version string with embedded git metadata from the build script.
const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), " ", env!("GIT_DATE"), ")");

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  version,
  long_version = LONG_VERSION,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Run from anywhere inside the repository. Tracked and untracked
(non-ignored) *.rs files are scanned; files already carrying the header are
left untouched."
)]
pub struct Cli {
  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output
  #[arg(long, value_name = "WHEN", value_enum, default_value = "auto")]
  pub colors: ColorMode,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

/// Run the header applicator with the given arguments.
///
/// Resolves the repository root, enumerates candidate files, applies the
/// header to each one that lacks it, and prints the summary. Exits cleanly on
/// an empty candidate set; any enumeration or file I/O failure propagates to
/// the caller as the process error.
pub fn run(args: Cli) -> Result<()> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let current_dir = std::env::current_dir().with_context(|| "Failed to get current directory")?;
  let repo_root = git::resolve_repo_root(&current_dir);
  debug!("Using repository root: {}", repo_root.display());

  let files = git::list_rust_files(&repo_root)
    .with_context(|| format!("Failed to enumerate Rust files under {}", repo_root.display()))?;

  if files.is_empty() {
    output::print_no_files();
    return Ok(());
  }

  let summary = Processor::new().process(&files)?;
  output::print_summary(&summary);

  Ok(())
}
