//! Atomic JSON writes: temp file + rename

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Serialize a value to pretty JSON and atomically replace `path` with it.
///
/// The content is written to a temporary file in the destination directory
/// and renamed onto the final path in one step, so a concurrent reader sees
/// either the complete previous content or the complete new content, never a
/// torn file. If the write fails before the rename, the previous content is
/// left intact.
pub fn atomic_write<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize value to JSON")?;

    let file_name = path
        .file_name()
        .with_context(|| format!("Destination has no file name: {}", path.display()))?;
    let temp_path = path.with_file_name(format!("{}.tmp", file_name.to_string_lossy()));

    fs::write(&temp_path, json)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file onto: {}", path.display()))?;

    Ok(())
}
