use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Resolve the archive output root: `ARCHIVE_OUTPUT` if set, else the
/// current working directory
pub fn get_output_dir() -> Result<PathBuf> {
    match env::var("ARCHIVE_OUTPUT") {
        Ok(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => env::current_dir().context("Failed to resolve current working directory"),
    }
}
