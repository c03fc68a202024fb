//! Fixed descriptive header embedded in every main-index snapshot

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Schema identifier for main-index documents
pub const SCHEMA: &str = "linkvault.index.json";

const INDEX_INFO: &str =
    "This is an index of site data archived by LinkVault: the self-hosted web archive.";

const FOOTER_INFO: &str =
    "Archive files were downloaded on behalf of the owner of this LinkVault instance; \
     content copyright remains with the original publishers.";

/// Process-wide descriptive header written at the top of the main index.
///
/// Everything here is fixed at build time except the dependency manifest,
/// which the embedding application may attach before the first snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexHeader {
    pub info: String,
    pub schema: String,
    pub copyright_info: String,
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub project: String,
    pub version: String,
    pub git_sha: String,
    pub website: String,
    pub docs: String,
    pub source: String,
    pub issues: String,
    /// Versions of the helper tools used by the archive methods, as reported
    /// by the embedding application
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
}

impl IndexHeader {
    /// Header for the running tool version
    pub fn current() -> Self {
        Self {
            info: INDEX_INFO.to_string(),
            schema: SCHEMA.to_string(),
            copyright_info: FOOTER_INFO.to_string(),
            meta: Meta {
                project: "LinkVault".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                git_sha: option_env!("GIT_SHA").unwrap_or("unknown").to_string(),
                website: "https://linkvault.sh".to_string(),
                docs: "https://github.com/linkvault/linkvault/wiki".to_string(),
                source: "https://github.com/linkvault/linkvault".to_string(),
                issues: "https://github.com/linkvault/linkvault/issues".to_string(),
                dependencies: BTreeMap::new(),
            },
        }
    }

    /// Attach the helper-tool version manifest
    pub fn with_dependencies(mut self, dependencies: BTreeMap<String, String>) -> Self {
        self.meta.dependencies = dependencies;
        self
    }
}
