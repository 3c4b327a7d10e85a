//! # license-headers
//!
//! A tool that ensures the project license header is present at the top of
//! every Rust source file in the repository.

use anyhow::Result;
use license_headers::cli::{self, Cli};

fn main() -> Result<()> {
  cli::run(Cli::parse_args())
}
