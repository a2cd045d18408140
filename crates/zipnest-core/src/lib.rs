//! Programmatic ZIP compression and extraction with folder-nesting semantics.
//!
//! `zipnest-core` compresses files and directory trees into ZIP archives and
//! restores them. A directory root contributes its contents with names
//! relative to the root, so the root's own name never appears inside the
//! archive; extraction can optionally nest its output in a folder named
//! after the archive. All operations are synchronous and run on the calling
//! thread.
//!
//! # Examples
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! zipnest_core::compress("backup.zip", &["photos", "notes.txt"])?;
//! zipnest_core::extract_to("backup.zip", "/restore")?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod archiver;
pub mod error;
pub mod extractor;
pub mod options;
pub mod test_utils;
pub mod walker;

// Re-export main API types
pub use api::compress;
pub use api::extract;
pub use api::extract_retain;
pub use api::extract_to;
pub use api::extract_to_retain;
pub use archiver::Archiver;
pub use error::ArchiveError;
pub use error::Result;
pub use extractor::Extractor;
pub use options::CompressOptions;
pub use options::ExtractOptions;
pub use walker::SourceEntry;
