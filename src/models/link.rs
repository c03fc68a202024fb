use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::index::ARCHIVE_DIR_NAME;
use crate::models::ArchiveResult;

/// One archived resource.
///
/// The `timestamp` string is the link's identity key and doubles as the name
/// of its output directory under `archive/`. The per-method `history` holds
/// every attempt in chronological order; it only gains a key once a method
/// has actually run against the link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    #[serde(deserialize_with = "crate::models::deserializers::deserialize_link_timestamp")]
    pub timestamp: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "crate::models::deserializers::deserialize_tags")]
    pub tags: BTreeSet<String>,
    /// Provenance of how this URL was discovered (import file, feed, ...)
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub history: BTreeMap<String, Vec<ArchiveResult>>,
}

impl Link {
    /// Create a new in-memory link with no archive history yet
    pub fn new(url: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timestamp: timestamp.into(),
            title: None,
            tags: BTreeSet::new(),
            sources: Vec::new(),
            history: BTreeMap::new(),
        }
    }

    /// Directory holding this link's archived output and detail index.
    ///
    /// Derived from the output root; never persisted in the JSON body.
    pub fn link_dir(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(ARCHIVE_DIR_NAME).join(&self.timestamp)
    }

    /// Record one archive-method attempt, preserving chronological order
    pub fn add_result(&mut self, result: ArchiveResult) {
        self.history.entry(result.method.clone()).or_default().push(result);
    }

    /// Whether any method has ever succeeded against this link
    pub fn is_archived(&self) -> bool {
        self.history.values().flatten().any(|r| r.succeeded())
    }

    /// Reconstruct a link from a parsed JSON document.
    ///
    /// Schema-tolerant: documents written by older tool versions decode with
    /// defaults for missing optional fields, and unknown fields are ignored.
    pub fn from_json(value: Value) -> Result<Self> {
        serde_json::from_value(value).context("Failed to deserialize link from JSON")
    }
}
