//! Data models for archived links.
//!
//! This module defines the data structures persisted by the index codecs:
//!
//! - [`Link`] - one archived resource, keyed by its timestamp
//! - [`ArchiveResult`] - one attempt of one archive method against a link
//! - [`ArchiveStatus`] - outcome of an attempt
//!
//! These models use serde for JSON (de)serialization with custom
//! deserializers for fields whose on-disk shape changed across tool versions
//! (timestamps, tags) in the `deserializers` module. Documents written by
//! older versions decode with sensible defaults; unknown fields are ignored.

pub mod archive_result;
pub mod deserializers;
pub mod link;

pub use archive_result::{ArchiveResult, ArchiveStatus};
pub use link::Link;
