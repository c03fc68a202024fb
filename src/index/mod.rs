//! Two-level JSON index: main snapshot + per-link detail indexes
//!
//! # Error Handling Strategy
//!
//! The codecs distinguish three situations:
//!
//! - **Absence**: a missing index file is a valid state, not an error. The
//!   main-index reader yields an empty sequence, the detail reader returns
//!   `None`, and the scanner silently skips link directories whose archive
//!   run hasn't produced an `index.json` yet.
//!
//! - **Parse failure**: malformed JSON on disk, or a main index without a
//!   `links` key, is fatal for that read call. No best-effort recovery is
//!   attempted - corrupted on-disk state comes from outside this crate and
//!   must surface loudly. Errors carry file-path context via anyhow.
//!
//! - **Write failure**: surfaced to the caller without retries. Because all
//!   writes go through the atomic temp-file + rename discipline, the prior
//!   index content stays intact whenever a write fails.
//!
//! The detail indexes are the durable source of truth; the main index is a
//! derived snapshot that can always be regenerated from the directory scan.

pub mod detail;
pub mod header;
pub mod main_index;

pub use detail::{parse_link_details, parse_links_details, write_link_details};
pub use header::IndexHeader;
pub use main_index::{parse_main_index, write_main_index};

/// Filename used for both the main index and the per-link detail indexes
pub const JSON_INDEX_FILENAME: &str = "index.json";

/// Subdirectory of the output root holding one directory per archived link
pub const ARCHIVE_DIR_NAME: &str = "archive";
