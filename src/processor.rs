//! # Processor Module
//!
//! This module contains the core read-check-write sequence: for each candidate
//! file, read it as UTF-8 text, check for the license header, and rewrite the
//! file with the header prepended when it is missing.
//!
//! Files are processed strictly one at a time. A write happens when and only
//! when the header was absent, and each file is rewritten at most once per
//! run. There is no backup and no rollback; a failure mid-run leaves earlier
//! files with their changes applied.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::trace;

use crate::header;
use crate::verbose_log;

/// Counts accumulated over a full run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
  /// Total number of candidate files examined.
  pub examined: usize,
  /// Number of files that were actually rewritten.
  pub changed: usize,
}

/// Processor for applying the license header to files.
pub struct Processor;

impl Processor {
  pub const fn new() -> Self {
    Self
  }

  /// Processes every candidate sequentially, in the given order.
  ///
  /// # Errors
  ///
  /// The first file that cannot be read or written aborts the run; files
  /// already processed keep their changes.
  pub fn process(&self, files: &[PathBuf]) -> Result<RunSummary> {
    let mut changed = 0;
    for file in files {
      if self.apply_header(file)? {
        changed += 1;
      }
    }

    Ok(RunSummary {
      examined: files.len(),
      changed,
    })
  }

  /// Ensures the license header is present in a single file.
  ///
  /// A leading byte-order-mark is preserved at position zero, ahead of the
  /// header. Returns `true` when the file was rewritten, `false` when the
  /// header was already present.
  ///
  /// # Errors
  ///
  /// Returns an error when the file cannot be read as UTF-8 text or the
  /// rewrite fails.
  pub fn apply_header(&self, path: &Path) -> Result<bool> {
    let original =
      std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

    let (bom, body) = header::split_bom(&original);

    if header::has_header(body) {
      trace!("Header already present: {}", path.display());
      return Ok(false);
    }

    let updated = header::prepend_header(bom, body);
    std::fs::write(path, updated).with_context(|| format!("Failed to write file: {}", path.display()))?;

    verbose_log!("Added header to: {}", path.display());
    Ok(true)
  }
}

impl Default for Processor {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::tempdir;

  use super::*;
  use crate::header::LICENSE_HEADER;

  #[test]
  fn test_adds_header_to_plain_file() -> Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("plain.rs");
    fs::write(&path, "fn main() {}\n")?;

    let changed = Processor::new().apply_header(&path)?;
    assert!(changed);

    let content = fs::read_to_string(&path)?;
    assert_eq!(content, format!("{}fn main() {{}}\n", LICENSE_HEADER));

    Ok(())
  }

  #[test]
  fn test_no_write_when_header_present() -> Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("headered.rs");
    let original = format!("{}fn main() {{}}\n", LICENSE_HEADER);
    fs::write(&path, &original)?;

    let changed = Processor::new().apply_header(&path)?;
    assert!(!changed);
    assert_eq!(fs::read_to_string(&path)?, original);

    Ok(())
  }

  #[test]
  fn test_bom_preserved_ahead_of_header() -> Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("bom.rs");
    fs::write(&path, "\u{feff}fn main() {}\n")?;

    let changed = Processor::new().apply_header(&path)?;
    assert!(changed);

    let content = fs::read_to_string(&path)?;
    assert_eq!(content, format!("\u{feff}{}fn main() {{}}\n", LICENSE_HEADER));
    // Exactly one BOM, at position zero.
    assert_eq!(content.matches('\u{feff}').count(), 1);

    Ok(())
  }

  #[test]
  fn test_bom_file_with_header_untouched() -> Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("bom_headered.rs");
    let original = format!("\u{feff}{}fn main() {{}}\n", LICENSE_HEADER);
    fs::write(&path, &original)?;

    let changed = Processor::new().apply_header(&path)?;
    assert!(!changed);
    assert_eq!(fs::read_to_string(&path)?, original);

    Ok(())
  }

  #[test]
  fn test_leading_newlines_count_as_present() -> Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("blank_lines.rs");
    let original = format!("\n\n{}fn main() {{}}\n", LICENSE_HEADER);
    fs::write(&path, &original)?;

    let changed = Processor::new().apply_header(&path)?;
    assert!(!changed);
    assert_eq!(fs::read_to_string(&path)?, original);

    Ok(())
  }

  #[test]
  fn test_empty_file_gets_exactly_the_header() -> Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("empty.rs");
    fs::write(&path, "")?;

    let changed = Processor::new().apply_header(&path)?;
    assert!(changed);
    assert_eq!(fs::read_to_string(&path)?, LICENSE_HEADER);

    Ok(())
  }

  #[test]
  fn test_second_pass_is_a_no_op() -> Result<()> {
    let temp_dir = tempdir()?;
    let paths = [
      temp_dir.path().join("a.rs"),
      temp_dir.path().join("b.rs"),
      temp_dir.path().join("c.rs"),
    ];
    fs::write(&paths[0], "mod a;\n")?;
    fs::write(&paths[1], format!("{}mod b;\n", LICENSE_HEADER))?;
    fs::write(&paths[2], "\u{feff}mod c;\n")?;

    let processor = Processor::new();
    let files: Vec<PathBuf> = paths.to_vec();

    let first = processor.process(&files)?;
    assert_eq!(first, RunSummary { examined: 3, changed: 2 });

    let after_first: Vec<String> = paths.iter().map(|p| fs::read_to_string(p)).collect::<Result<_, _>>()?;

    let second = processor.process(&files)?;
    assert_eq!(second, RunSummary { examined: 3, changed: 0 });

    let after_second: Vec<String> = paths.iter().map(|p| fs::read_to_string(p)).collect::<Result<_, _>>()?;
    assert_eq!(after_first, after_second);

    Ok(())
  }

  #[test]
  fn test_non_utf8_file_is_an_error() -> Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("binary.rs");
    fs::write(&path, [0xC0u8, 0xFF, 0x00, 0x01])?;

    let result = Processor::new().apply_header(&path);
    assert!(result.is_err());
    // The file must be left untouched on a read failure.
    assert_eq!(fs::read(&path)?, vec![0xC0u8, 0xFF, 0x00, 0x01]);

    Ok(())
  }

  #[test]
  fn test_vanished_file_aborts_with_error() {
    let temp_dir = tempdir().expect("tempdir");
    let missing = temp_dir.path().join("missing.rs");

    let result = Processor::new().apply_header(&missing);
    assert!(result.is_err());
  }
}
