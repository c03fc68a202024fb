//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Builder for creating archive output directory structures on disk.
///
/// Fixture files are written as raw JSON strings so reader tests stay
/// independent of the serializer under test.
pub struct ArchiveDirBuilder {
    temp_dir: TempDir,
}

impl ArchiveDirBuilder {
    /// Create a new builder with an empty output root
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the output root
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a main index file with the given raw content
    pub fn with_raw_main_index(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("index.json"), content)
            .expect("Failed to write main index");
        self
    }

    /// Write a main index containing the given links and a minimal header
    pub fn with_main_index(self, links: &[LinkBuilder]) -> Self {
        let entries = links.iter().map(|l| l.to_json()).collect::<Vec<_>>().join(",");
        let content = format!(r#"{{"num_links":{},"links":[{}]}}"#, links.len(), entries);
        self.with_raw_main_index(&content)
    }

    /// Create `archive/<timestamp>/index.json` for the given link
    pub fn with_detail_index(self, link: &LinkBuilder) -> Self {
        self.with_raw_detail_index(&link.timestamp, &link.to_json())
    }

    /// Create `archive/<timestamp>/index.json` with raw content
    pub fn with_raw_detail_index(self, timestamp: &str, content: &str) -> Self {
        let link_dir = self.temp_dir.path().join("archive").join(timestamp);
        fs::create_dir_all(&link_dir).expect("Failed to create link dir");
        fs::write(link_dir.join("index.json"), content).expect("Failed to write detail index");
        self
    }

    /// Create `archive/<timestamp>/` without an index.json (unfinished run)
    pub fn with_empty_link_dir(self, timestamp: &str) -> Self {
        let link_dir = self.temp_dir.path().join("archive").join(timestamp);
        fs::create_dir_all(&link_dir).expect("Failed to create link dir");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ArchiveDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder emitting raw link JSON documents
pub struct LinkBuilder {
    pub url: String,
    pub timestamp: String,
    title: Option<String>,
    tags: Vec<String>,
    sources: Vec<String>,
    history: Vec<(String, Vec<ArchiveResultBuilder>)>,
}

impl LinkBuilder {
    /// Create a new link with default values
    pub fn new(url: &str, timestamp: &str) -> Self {
        Self {
            url: url.to_string(),
            timestamp: timestamp.to_string(),
            title: None,
            tags: Vec::new(),
            sources: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Set the title
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Add a tag
    pub fn tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }

    /// Add a provenance source
    pub fn source(mut self, source: &str) -> Self {
        self.sources.push(source.to_string());
        self
    }

    /// Add the attempts recorded for one archive method
    pub fn method_history(mut self, method: &str, attempts: Vec<ArchiveResultBuilder>) -> Self {
        self.history.push((method.to_string(), attempts));
        self
    }

    /// Convert to a raw JSON string
    pub fn to_json(&self) -> String {
        let title_field =
            self.title.as_ref().map(|t| format!(r#","title":"{}""#, t)).unwrap_or_default();

        let tags_field = if self.tags.is_empty() {
            String::new()
        } else {
            let quoted: Vec<String> = self.tags.iter().map(|t| format!(r#""{}""#, t)).collect();
            format!(r#","tags":[{}]"#, quoted.join(","))
        };

        let sources_field = if self.sources.is_empty() {
            String::new()
        } else {
            let quoted: Vec<String> = self.sources.iter().map(|s| format!(r#""{}""#, s)).collect();
            format!(r#","sources":[{}]"#, quoted.join(","))
        };

        let history_field = if self.history.is_empty() {
            String::new()
        } else {
            let methods: Vec<String> = self
                .history
                .iter()
                .map(|(method, attempts)| {
                    let entries: Vec<String> =
                        attempts.iter().map(|a| a.to_json(method)).collect();
                    format!(r#""{}":[{}]"#, method, entries.join(","))
                })
                .collect();
            format!(r#","history":{{{}}}"#, methods.join(","))
        };

        format!(
            r#"{{"url":"{}","timestamp":"{}"{}{}{}{}}}"#,
            self.url, self.timestamp, title_field, tags_field, sources_field, history_field
        )
    }
}

/// Builder for archive-method attempt records inside link history
pub struct ArchiveResultBuilder {
    start_ts: String,
    end_ts: String,
    status: String,
    output: Option<String>,
    error: Option<String>,
}

impl ArchiveResultBuilder {
    /// Create a succeeded attempt with default timestamps
    pub fn succeeded() -> Self {
        Self {
            start_ts: "2024-01-15T12:00:00Z".to_string(),
            end_ts: "2024-01-15T12:00:01Z".to_string(),
            status: "succeeded".to_string(),
            output: None,
            error: None,
        }
    }

    /// Create a failed attempt with default timestamps
    pub fn failed(error: &str) -> Self {
        Self {
            start_ts: "2024-01-15T12:00:00Z".to_string(),
            end_ts: "2024-01-15T12:00:01Z".to_string(),
            status: "failed".to_string(),
            output: None,
            error: Some(error.to_string()),
        }
    }

    /// Set the status string verbatim
    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    /// Set the output reference
    pub fn output(mut self, output: &str) -> Self {
        self.output = Some(output.to_string());
        self
    }

    /// Set the start/end timestamps (raw JSON values, e.g. RFC3339 strings
    /// need surrounding quotes, epoch millis don't)
    pub fn raw_timestamps(mut self, start: &str, end: &str) -> Self {
        self.start_ts = start.trim_matches('"').to_string();
        self.end_ts = end.trim_matches('"').to_string();
        self
    }

    /// Convert to a raw JSON string for the given method name
    pub fn to_json(&self, method: &str) -> String {
        let start = raw_timestamp_value(&self.start_ts);
        let end = raw_timestamp_value(&self.end_ts);
        let output_field =
            self.output.as_ref().map(|o| format!(r#","output":"{}""#, o)).unwrap_or_default();
        let error_field =
            self.error.as_ref().map(|e| format!(r#","error":"{}""#, e)).unwrap_or_default();

        format!(
            r#"{{"method":"{}","start_ts":{},"end_ts":{},"status":"{}"{}{}}}"#,
            method, start, end, self.status, output_field, error_field
        )
    }
}

/// Emit a timestamp as a bare number when it looks like epoch millis,
/// otherwise as a quoted string
fn raw_timestamp_value(ts: &str) -> String {
    if ts.chars().all(|c| c.is_ascii_digit()) {
        ts.to_string()
    } else {
        format!(r#""{}""#, ts)
    }
}

/// Helper to create an output root with two finished links and one
/// unfinished link directory
pub fn realistic_archive_dir() -> TempDir {
    ArchiveDirBuilder::new()
        .with_detail_index(
            &LinkBuilder::new("https://example.com/a", "100")
                .title("Example A")
                .tag("news")
                .source("https://getpocket.com/export")
                .method_history(
                    "title",
                    vec![ArchiveResultBuilder::succeeded().output("Example A")],
                ),
        )
        .with_detail_index(
            &LinkBuilder::new("https://example.com/b", "200")
                .method_history("wget", vec![ArchiveResultBuilder::failed("exit status 8")]),
        )
        .with_empty_link_dir("300")
        .build()
}
