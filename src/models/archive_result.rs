use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one archive-method attempt.
///
/// `Unknown` absorbs status strings introduced by newer tool versions so old
/// binaries can still read their documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveStatus {
    Succeeded,
    Failed,
    Skipped,
    #[serde(other)]
    Unknown,
}

/// One attempt to run one archive method against one link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveResult {
    pub method: String,
    #[serde(deserialize_with = "crate::models::deserializers::deserialize_timestamp")]
    pub start_ts: DateTime<Utc>,
    #[serde(deserialize_with = "crate::models::deserializers::deserialize_timestamp")]
    pub end_ts: DateTime<Utc>,
    pub status: ArchiveStatus,
    /// Path or extracted value produced by the method, if any.
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ArchiveResult {
    pub fn succeeded(&self) -> bool {
        self.status == ArchiveStatus::Succeeded
    }
}
