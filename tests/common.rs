//! Shared test utilities for integration tests.
//!
//! Provides helpers for writing stats sources into temporary directories and
//! building configurations that point at them.

#![allow(dead_code)]

use anyhow::Result;
use std::path::{Path, PathBuf};
use stylx_stats::Config;

/// Sample stats feed in the shape the backend serves.
pub const SAMPLE_STATS: &str = "\
# Weekly trends

Views grew **12%** compared to last week.

## Top categories

1. Dresses
2. Jackets
3. Sneakers

| Category | Videos | Share |
|:---------|-------:|:-----:|
| Dresses  | 41     | 38%   |
| Jackets  | 27     |
";

/// Writes stats markdown to `stats.md` inside the directory.
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn write_stats(dir: &Path, content: &str) -> Result<PathBuf> {
    let path = dir.join("stats.md");
    std::fs::write(&path, content)?;
    Ok(path)
}

/// Builds configuration reading `input` and writing into `output`.
pub fn config_for(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Config {
    Config {
        input: input.into(),
        output: output.into(),
        title: "Statistics".to_string(),
        fragment: false,
        unavailable_message: None,
        error_message: None,
        no_open: true,
    }
}
