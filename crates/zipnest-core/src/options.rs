//! Configuration for compression and extraction operations.

use crate::ArchiveError;
use crate::Result;

/// Configuration for packing files into a ZIP archive.
///
/// # Examples
///
/// ```
/// use zipnest_core::CompressOptions;
///
/// // Balanced defaults
/// let options = CompressOptions::default();
///
/// // Best compression
/// let best = CompressOptions::default().with_compression_level(9);
/// ```
#[derive(Debug, Clone)]
pub struct CompressOptions {
    /// Deflate compression level (0-9).
    ///
    /// `0` stores entries uncompressed; higher values trade speed for
    /// smaller output. `None` uses the encoder's own default.
    ///
    /// Default: `Some(6)` (balanced).
    pub compression_level: Option<u8>,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            compression_level: Some(6),
        }
    }
}

impl CompressOptions {
    /// Creates a `CompressOptions` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compression level.
    ///
    /// # Panics
    ///
    /// Panics if the level is above 9. Use [`Self::validate`] for
    /// non-panicking validation.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        assert!(level <= 9, "compression level must be 0-9");
        self.compression_level = Some(level);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::InvalidCompressionLevel`] if the level is
    /// above 9.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.compression_level
            && level > 9
        {
            return Err(ArchiveError::InvalidCompressionLevel { level });
        }
        Ok(())
    }
}

/// Configuration for unpacking a ZIP archive.
///
/// # Examples
///
/// ```
/// use zipnest_core::ExtractOptions;
///
/// let options = ExtractOptions::default()
///     .with_retain_archive_as_folder(true)
///     .with_reject_unsafe_paths(true);
/// assert!(options.retain_archive_as_folder);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Nest all extracted content inside a folder named after the archive,
    /// with the archive's final extension stripped.
    ///
    /// Default: `false` (entries land directly in the destination).
    pub retain_archive_as_folder: bool,

    /// Refuse entries whose stored path would land outside the destination
    /// directory (absolute names or `..` segments).
    ///
    /// Default: `false` — stored names are joined to the destination as-is,
    /// matching the behavior of common desktop tools. Enable this policy
    /// when the archive comes from an untrusted source.
    pub reject_unsafe_paths: bool,
}

impl ExtractOptions {
    /// Creates an `ExtractOptions` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether extracted content is nested in an archive-named folder.
    #[must_use]
    pub fn with_retain_archive_as_folder(mut self, retain: bool) -> Self {
        self.retain_archive_as_folder = retain;
        self
    }

    /// Sets whether escaping entry paths are rejected.
    #[must_use]
    pub fn with_reject_unsafe_paths(mut self, reject: bool) -> Self {
        self.reject_unsafe_paths = reject;
        self
    }
}
