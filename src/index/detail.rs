use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::index::{ARCHIVE_DIR_NAME, JSON_INDEX_FILENAME};
use crate::models::Link;
use crate::utils::atomic_write;

/// Write a link's detail index into its own archive directory
///
/// Serializes the link in extended form (all attributes plus the full
/// per-method history of attempts) and atomically replaces
/// `<link_dir>/index.json`. This is a full overwrite: the caller is
/// responsible for accumulating history on the in-memory link before
/// writing, the codec never merges with prior on-disk state.
pub fn write_link_details(link: &Link, out_dir: &Path) -> Result<()> {
    write_link_details_to(link, &link.link_dir(out_dir))
}

/// Like [`write_link_details`], targeting an explicit directory
pub fn write_link_details_to(link: &Link, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create link directory: {}", dir.display()))?;

    atomic_write(link, &dir.join(JSON_INDEX_FILENAME))
        .with_context(|| format!("Failed to write detail index for {}", link.url))
}

/// Load one link's detail index from its archive directory
///
/// Returns `Ok(None)` when the directory has no `index.json` - the archive
/// run for that link may simply not have finished producing one.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or decoded.
pub fn parse_link_details(dir: &Path) -> Result<Option<Link>> {
    let index_path = dir.join(JSON_INDEX_FILENAME);
    if !index_path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(&index_path)
        .with_context(|| format!("Failed to read detail index: {}", index_path.display()))?;
    let link = serde_json::from_str(&raw)
        .with_context(|| format!("Malformed detail index: {}", index_path.display()))?;

    Ok(Some(link))
}

/// Scan the archive data directory and yield every parseable link
///
/// Enumerates the immediate subdirectories of `<out_dir>/archive/` (the
/// directory test follows symlinks) and lazily parses the detail index of
/// each one that has an `index.json`. Subdirectories without one are
/// silently skipped. This scan is the disaster-recovery path: the main
/// index can always be rebuilt from what it yields.
///
/// # Returns
///
/// A lazy, finite, single-pass iterator of `Result<Link>`. Enumeration
/// order is filesystem-defined and not guaranteed sorted - callers needing
/// a stable order must sort explicitly. A missing `archive/` directory
/// yields an empty sequence.
///
/// # Errors
///
/// An unreadable directory entry or a malformed detail index surfaces as an
/// `Err` item for that entry; iteration continues past it.
pub fn parse_links_details(out_dir: &Path) -> Result<DetailIndexScan> {
    let archive_dir = out_dir.join(ARCHIVE_DIR_NAME);
    if !archive_dir.exists() {
        return Ok(DetailIndexScan { entries: None });
    }

    let entries = fs::read_dir(&archive_dir)
        .with_context(|| format!("Failed to read archive directory: {}", archive_dir.display()))?;

    Ok(DetailIndexScan { entries: Some(entries) })
}

/// Lazy iterator over the detail indexes found under `archive/`
pub struct DetailIndexScan {
    entries: Option<fs::ReadDir>,
}

impl Iterator for DetailIndexScan {
    type Item = Result<Link>;

    fn next(&mut self) -> Option<Self::Item> {
        let entries = self.entries.as_mut()?;
        loop {
            let entry = match entries.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    return Some(Err(e).context("Failed to read archive directory entry"));
                }
            };

            // Path::is_dir follows symlinks, so symlinked link dirs count
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            match parse_link_details(&path) {
                Ok(Some(link)) => return Some(Ok(link)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
