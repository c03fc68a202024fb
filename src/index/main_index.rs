use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::index::JSON_INDEX_FILENAME;
use crate::index::header::IndexHeader;
use crate::models::Link;
use crate::utils::atomic_write;

/// Full main-index snapshot document as written to disk
#[derive(Serialize)]
struct MainIndex<'a> {
    #[serde(flatten)]
    header: IndexHeader,
    num_links: usize,
    updated: DateTime<Utc>,
    last_run_cmd: Vec<String>,
    links: &'a [Link],
}

/// Write the main index snapshot for the complete current link set
///
/// Assembles the descriptive header, link count, snapshot timestamp and the
/// invoking command line, then atomically replaces `<out_dir>/index.json`.
/// The write is a full replace of the previous snapshot, never a merge.
///
/// # Errors
///
/// Returns an error if serialization or the underlying file write fails; a
/// failed write leaves the previous index file intact.
pub fn write_main_index(links: &[Link], out_dir: &Path) -> Result<()> {
    write_main_index_with_header(links, IndexHeader::current(), out_dir)
}

/// Like [`write_main_index`], with a caller-supplied header (e.g. one
/// carrying a helper-tool dependency manifest)
pub fn write_main_index_with_header(
    links: &[Link],
    header: IndexHeader,
    out_dir: &Path,
) -> Result<()> {
    let index = MainIndex {
        header,
        num_links: links.len(),
        updated: Utc::now(),
        last_run_cmd: env::args().collect(),
        links,
    };

    atomic_write(&index, &out_dir.join(JSON_INDEX_FILENAME))
        .context("Failed to write main index")
}

/// Parse the main index and return a lazy sequence of links
///
/// A missing index file is the valid "never archived anything yet" state and
/// produces an empty iterator. The returned iterator is finite, single-pass
/// and forward-only: entries decode one at a time as the caller advances, and
/// consuming the sequence twice requires calling this function again.
///
/// # Errors
///
/// Returns an error if the file exists but contains malformed JSON or lacks
/// a `links` array. Individual entries that fail to decode surface as `Err`
/// items from the iterator.
pub fn parse_main_index(out_dir: &Path) -> Result<MainIndexLinks> {
    let index_path = out_dir.join(JSON_INDEX_FILENAME);
    if !index_path.exists() {
        return Ok(MainIndexLinks::empty());
    }

    let raw = fs::read_to_string(&index_path)
        .with_context(|| format!("Failed to read main index: {}", index_path.display()))?;
    let mut document: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Malformed main index: {}", index_path.display()))?;

    let links = document
        .get_mut("links")
        .map(Value::take)
        .ok_or_else(|| anyhow!("Main index is missing the `links` key: {}", index_path.display()))?;
    let entries = match links {
        Value::Array(entries) => entries,
        _ => return Err(anyhow!("Main index `links` must be an array: {}", index_path.display())),
    };

    Ok(MainIndexLinks { entries: entries.into_iter(), position: 0 })
}

/// Lazy iterator over the links of one main-index snapshot
#[derive(Debug)]
pub struct MainIndexLinks {
    entries: std::vec::IntoIter<Value>,
    position: usize,
}

impl MainIndexLinks {
    fn empty() -> Self {
        Self { entries: Vec::new().into_iter(), position: 0 }
    }
}

impl Iterator for MainIndexLinks {
    type Item = Result<Link>;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.entries.next()?;
        self.position += 1;
        let position = self.position;
        Some(
            Link::from_json(value)
                .with_context(|| format!("Invalid link at position {} in main index", position)),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}
