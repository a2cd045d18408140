//! Error types for archive operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while packing or unpacking an archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A compression request was made with an empty list of input roots.
    #[error("no input paths were given")]
    NoInputs,

    /// An input root does not exist on the filesystem.
    #[error("source not found: {path}")]
    SourceNotFound {
        /// The missing input path.
        path: PathBuf,
    },

    /// A directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// The source is corrupted or not a ZIP archive.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// Compression level outside the supported range.
    #[error("invalid compression level: {level} (expected 0-9)")]
    InvalidCompressionLevel {
        /// The rejected level.
        level: u8,
    },

    /// A stored entry path would land outside the destination directory.
    ///
    /// Only raised when the `reject_unsafe_paths` policy in
    /// [`crate::ExtractOptions`] is enabled; by default entry paths are
    /// joined to the destination exactly as stored.
    #[error("entry path escapes destination directory: {path}")]
    UnsafeEntryPath {
        /// The offending entry path as stored in the archive.
        path: PathBuf,
    },
}

impl ArchiveError {
    /// Returns `true` if this error came from the operating system rather
    /// than from request validation or archive structure.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    /// use zipnest_core::ArchiveError;
    ///
    /// let err = ArchiveError::Io(io::Error::other("disk on fire"));
    /// assert!(err.is_io());
    ///
    /// let err = ArchiveError::NoInputs;
    /// assert!(!err.is_io());
    /// ```
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::CreateDir { .. })
    }

    /// Returns the underlying I/O error kind, if any.
    ///
    /// Useful for classifying failures without destructuring the variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    /// use zipnest_core::ArchiveError;
    ///
    /// let err = ArchiveError::Io(io::Error::new(io::ErrorKind::NotFound, "missing"));
    /// assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
    ///
    /// let err = ArchiveError::InvalidArchive("truncated".to_string());
    /// assert_eq!(err.io_kind(), None);
    /// ```
    #[must_use]
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Io(err) | Self::CreateDir { source: err, .. } => Some(err.kind()),
            _ => None,
        }
    }
}
