//! Test utilities for building ZIP fixtures.
//!
//! This module provides a reusable builder for crafting archives with exact
//! entry layouts, including entry names a well-behaved compressor would never
//! produce.
//!
//! # Panics
//!
//! Everything here may panic on I/O errors since it is designed for test use
//! only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;
use std::path::Path;

/// Builder for in-memory ZIP fixtures.
///
/// # Examples
///
/// ```
/// use zipnest_core::test_utils::ZipFixture;
///
/// let zip_data = ZipFixture::new()
///     .add_file("file.txt", b"content")
///     .add_directory("dir/")
///     .build();
/// assert!(!zip_data.is_empty());
/// ```
pub struct ZipFixture {
    zip: zip::ZipWriter<Cursor<Vec<u8>>>,
}

impl ZipFixture {
    /// Creates a new fixture builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zip: zip::ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Adds a regular file entry, stored uncompressed.
    #[must_use]
    pub fn add_file(mut self, path: &str, data: &[u8]) -> Self {
        use zip::write::SimpleFileOptions;

        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored)
            .unix_permissions(0o644);

        self.zip.start_file(path, options).unwrap();
        self.zip.write_all(data).unwrap();
        self
    }

    /// Adds an explicit directory entry.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        use zip::write::SimpleFileOptions;

        let options = SimpleFileOptions::default().unix_permissions(0o755);
        self.zip.add_directory(path, options).unwrap();
        self
    }

    /// Builds and returns the archive bytes.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.zip.finish().unwrap().into_inner()
    }

    /// Builds the archive and writes it to `path`.
    pub fn write_to(self, path: &Path) {
        std::fs::write(path, self.build()).unwrap();
    }
}

impl Default for ZipFixture {
    fn default() -> Self {
        Self::new()
    }
}
