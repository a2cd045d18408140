//! Convenience entry points for one-call compression and extraction.

use crate::Archiver;
use crate::CompressOptions;
use crate::ExtractOptions;
use crate::Extractor;
use crate::Result;
use std::path::Path;

/// Compresses files and directory trees into a ZIP archive with default
/// options.
///
/// # Examples
///
/// ```no_run
/// zipnest_core::compress("backup.zip", &["photos", "notes.txt"])?;
/// # Ok::<(), zipnest_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// See [`Archiver::compress`].
pub fn compress<P: AsRef<Path>, S: AsRef<Path>>(
    destination_archive: P,
    sources: &[S],
) -> Result<()> {
    Archiver::new(CompressOptions::default()).compress(destination_archive, sources)
}

/// Extracts an archive into the directory that contains it.
///
/// # Examples
///
/// ```no_run
/// zipnest_core::extract("downloads/backup.zip")?;
/// # Ok::<(), zipnest_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// See [`Extractor::extract`].
pub fn extract<P: AsRef<Path>>(archive: P) -> Result<()> {
    Extractor::new(ExtractOptions::default()).extract_alongside(archive)
}

/// Extracts an archive next to itself, optionally nesting the output in a
/// folder named after the archive.
///
/// # Examples
///
/// ```no_run
/// // Contents of backup.zip land in downloads/backup/.
/// zipnest_core::extract_retain("downloads/backup.zip", true)?;
/// # Ok::<(), zipnest_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// See [`Extractor::extract`].
pub fn extract_retain<P: AsRef<Path>>(archive: P, retain_archive_as_folder: bool) -> Result<()> {
    Extractor::new(
        ExtractOptions::default().with_retain_archive_as_folder(retain_archive_as_folder),
    )
    .extract_alongside(archive)
}

/// Extracts an archive into an explicit destination directory.
///
/// # Examples
///
/// ```no_run
/// zipnest_core::extract_to("backup.zip", "/restore")?;
/// # Ok::<(), zipnest_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// See [`Extractor::extract`].
pub fn extract_to<P: AsRef<Path>, Q: AsRef<Path>>(archive: P, dest_dir: Q) -> Result<()> {
    Extractor::new(ExtractOptions::default()).extract(archive, dest_dir)
}

/// Extracts an archive into an explicit destination directory, optionally
/// nesting the output in a folder named after the archive.
///
/// # Examples
///
/// ```no_run
/// // Contents of backup.zip land in /restore/backup/.
/// zipnest_core::extract_to_retain("backup.zip", "/restore", true)?;
/// # Ok::<(), zipnest_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// See [`Extractor::extract`].
pub fn extract_to_retain<P: AsRef<Path>, Q: AsRef<Path>>(
    archive: P,
    dest_dir: Q,
    retain_archive_as_folder: bool,
) -> Result<()> {
    Extractor::new(
        ExtractOptions::default().with_retain_archive_as_folder(retain_archive_as_folder),
    )
    .extract(archive, dest_dir)
}
