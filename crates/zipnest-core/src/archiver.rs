//! ZIP archive creation.

use crate::ArchiveError;
use crate::CompressOptions;
use crate::Result;
use crate::walker::SourceEntry;
use crate::walker::collect_root;
use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Chunk size for streaming file contents into the archive.
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Writes ZIP archives from files and directory trees.
///
/// # Examples
///
/// ```no_run
/// use zipnest_core::Archiver;
/// use zipnest_core::CompressOptions;
///
/// let archiver = Archiver::new(CompressOptions::default().with_compression_level(9));
/// archiver.compress("backup.zip", &["photos", "notes.txt"])?;
/// # Ok::<(), zipnest_core::ArchiveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Archiver {
    options: CompressOptions,
}

impl Archiver {
    /// Creates an archiver with the given options.
    #[must_use]
    pub const fn new(options: CompressOptions) -> Self {
        Self { options }
    }

    /// Compresses the input roots into a ZIP archive at `dest`.
    ///
    /// Roots are processed in order. A directory root contributes its
    /// descendant files with names relative to the root; a file root
    /// contributes one entry named after the file. The destination is
    /// created before any root is walked, so a failure mid-way leaves a
    /// finalized archive holding the entries written so far.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::InvalidCompressionLevel`] for a level above 9,
    /// [`ArchiveError::NoInputs`] when `sources` is empty,
    /// [`ArchiveError::SourceNotFound`] when a root does not exist, and
    /// [`ArchiveError::Io`] for filesystem or ZIP encoding failures.
    pub fn compress<P: AsRef<Path>, S: AsRef<Path>>(&self, dest: P, sources: &[S]) -> Result<()> {
        self.options.validate()?;
        if sources.is_empty() {
            return Err(ArchiveError::NoInputs);
        }

        let file = File::create(dest.as_ref())?;
        let mut zip = ZipWriter::new(file);

        match write_sources(&mut zip, sources, self.entry_options()) {
            Ok(()) => {
                zip.finish().map_err(|e| {
                    std::io::Error::other(format!("failed to finish ZIP archive: {e}"))
                })?;
                Ok(())
            }
            Err(err) => {
                // Finalize what was already written; the first error wins.
                let _ = zip.finish();
                Err(err)
            }
        }
    }

    /// Maps the configured compression level onto per-entry ZIP options.
    fn entry_options(&self) -> SimpleFileOptions {
        match self.options.compression_level {
            Some(0) => SimpleFileOptions::default().compression_method(CompressionMethod::Stored),
            Some(level) => SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .compression_level(Some(i64::from(level))),
            None => SimpleFileOptions::default().compression_method(CompressionMethod::Deflated),
        }
    }
}

/// Walks every root and streams its files into the ZIP writer.
fn write_sources<W: Write + Seek, S: AsRef<Path>>(
    zip: &mut ZipWriter<W>,
    sources: &[S],
    options: SimpleFileOptions,
) -> Result<()> {
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];
    for source in sources {
        for entry in collect_root(source.as_ref())? {
            write_file(zip, &entry, options, &mut buffer)?;
        }
    }
    Ok(())
}

/// Streams one file into the archive under its entry name.
fn write_file<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    entry: &SourceEntry,
    options: SimpleFileOptions,
    buffer: &mut [u8],
) -> Result<()> {
    // Open before starting the entry so an unreadable file does not leave
    // a dangling entry header in the archive.
    let mut file = File::open(&entry.path)?;
    zip.start_file(entry.name.as_str(), options)
        .map_err(|e| std::io::Error::other(format!("failed to start entry in ZIP: {e}")))?;

    loop {
        let bytes_read = file.read(buffer)?;
        if bytes_read == 0 {
            break;
        }
        zip.write_all(&buffer[..bytes_read])?;
    }

    Ok(())
}
