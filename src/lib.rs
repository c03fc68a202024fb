//! LinkVault index core - file-based index for archived web resources
//!
//! This library implements LinkVault's two-level persistence layer:
//!
//! - A **main index** (`index.json` at the output root) summarizing every
//!   archived link in one snapshot document
//! - Per-link **detail indexes** (`archive/<timestamp>/index.json`) that are
//!   the durable source of truth, written after each archive method completes
//! - A directory scanner that reconstructs the full link set purely from the
//!   detail indexes on disk, so the main index can always be rebuilt
//!
//! All writes go through an atomic temp-file + rename discipline, so readers
//! never observe a partially-written index file.
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use linkvault::{Link, parse_main_index, write_main_index};
//!
//! let out_dir = PathBuf::from("/data/archive");
//! let links = vec![Link::new("https://example.com", "1544212312.234")];
//! write_main_index(&links, &out_dir)?;
//!
//! let restored: Vec<Link> = parse_main_index(&out_dir)?.collect::<anyhow::Result<_>>()?;
//! println!("Indexed {} links", restored.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod index;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use index::detail::{
    parse_link_details, parse_links_details, write_link_details, write_link_details_to,
};
pub use index::header::IndexHeader;
pub use index::main_index::{parse_main_index, write_main_index};
pub use models::{ArchiveResult, ArchiveStatus, Link};
pub use utils::atomic::atomic_write;
