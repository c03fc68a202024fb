use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Custom deserializer for timestamps that accepts both integers (ms) and RFC3339 strings
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => {
            // Assume it's a Unix timestamp in milliseconds
            let ms = n.as_i64().ok_or_else(|| Error::custom("invalid timestamp"))?;
            DateTime::from_timestamp_millis(ms)
                .ok_or_else(|| Error::custom("timestamp out of range"))
        }
        Value::String(s) => {
            // Parse as RFC3339
            s.parse::<DateTime<Utc>>()
                .map_err(|e| Error::custom(format!("invalid RFC3339 timestamp: {}", e)))
        }
        _ => Err(Error::custom("timestamp must be a number or string")),
    }
}

/// Custom deserializer for the link identity timestamp.
///
/// Stored as a string ("1544212312.234") in current documents, but very old
/// indexes carry a bare JSON number. Either way the key must be non-empty
/// since it doubles as the link's directory name.
pub fn deserialize_link_timestamp<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let timestamp = match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => return Err(Error::custom("link timestamp must be a string or number")),
    };

    if timestamp.is_empty() {
        return Err(Error::custom("link timestamp cannot be empty"));
    }

    Ok(timestamp)
}

/// Custom deserializer for tags that accepts both the legacy comma-separated
/// string form ("news,tech") and the current array form (["news", "tech"])
pub fn deserialize_tags<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(BTreeSet::new()),
        Value::String(s) => Ok(s
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                _ => Err(Error::custom("tags must be strings")),
            })
            .collect(),
        _ => Err(Error::custom("tags must be a string or an array of strings")),
    }
}
