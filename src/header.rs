//! # Header Module
//!
//! This module defines the fixed license header and the pure content checks
//! built around it. Nothing here touches the filesystem; all functions operate
//! on in-memory text so they can be tested in isolation.

/// The exact header text prepended to source files.
///
/// Three logical lines: the copyright line, the SPDX identifier line, and a
/// blank line. Detection is an exact-prefix match against this constant, so
/// any change here changes which files are considered headered.
pub const LICENSE_HEADER: &str =
  "// Copyright (C) 2025 SyncMyOrders Sp. z o.o.\n// SPDX-License-Identifier: AGPL-3.0-or-later\n";

/// UTF-8 byte-order-mark, kept at position zero when a file carries one.
pub const BOM: char = '\u{feff}';

/// Checks whether `body` already starts with the license header.
///
/// Leading newline characters are tolerated (and only newlines). Any other
/// leading bytes, including spaces or tabs, cause the check to fail and a
/// duplicate header to be prepended. This narrow tolerance is intentional and
/// must not be broadened: it matches the behavior existing repositories were
/// formatted under.
pub fn has_header(body: &str) -> bool {
  body.starts_with(LICENSE_HEADER) || body.trim_start_matches('\n').starts_with(LICENSE_HEADER)
}

/// Splits an optional leading byte-order-mark from the content.
///
/// Returns `(bom, body)` where `bom` is either the empty string or the
/// single-character BOM prefix, and `body` is the remainder.
pub fn split_bom(content: &str) -> (&str, &str) {
  match content.strip_prefix(BOM) {
    Some(body) => (&content[..BOM.len_utf8()], body),
    None => ("", content),
  }
}

/// Builds the rewritten file content: `BOM (if any) + HEADER + body`.
pub fn prepend_header(bom: &str, body: &str) -> String {
  let mut updated = String::with_capacity(bom.len() + LICENSE_HEADER.len() + body.len());
  updated.push_str(bom);
  updated.push_str(LICENSE_HEADER);
  updated.push_str(body);
  updated
}
