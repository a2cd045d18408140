//! ZIP archive extraction.

use crate::ArchiveError;
use crate::ExtractOptions;
use crate::Result;
use std::ffi::OsStr;
use std::fs;
use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;
use zip::ZipArchive;

/// Restores files from ZIP archives onto the filesystem.
///
/// # Examples
///
/// ```no_run
/// use zipnest_core::ExtractOptions;
/// use zipnest_core::Extractor;
///
/// let extractor = Extractor::new(ExtractOptions::default().with_retain_archive_as_folder(true));
/// extractor.extract("backup.zip", "/restore")?;
/// # Ok::<(), zipnest_core::ArchiveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    /// Creates an extractor with the given options.
    #[must_use]
    pub const fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Extracts an archive into the directory that contains it.
    ///
    /// An archive with a parentless relative path extracts into the current
    /// working directory.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Extractor::extract`].
    pub fn extract_alongside<P: AsRef<Path>>(&self, archive: P) -> Result<()> {
        let archive = archive.as_ref();
        let dest = parent_dir(archive);
        self.extract(archive, dest)
    }

    /// Extracts every entry of `archive` under `dest_dir`.
    ///
    /// The effective destination (including the nesting folder when
    /// `retain_archive_as_folder` is set) is created before the archive is
    /// opened. Entries are restored in archive order; existing files are
    /// overwritten, and the first failure aborts the run with everything
    /// before it already on disk.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Io`] when the archive cannot be read or an
    /// output file cannot be written, [`ArchiveError::CreateDir`] when a
    /// directory cannot be created, [`ArchiveError::InvalidArchive`] when
    /// the bytes are not a ZIP archive, and [`ArchiveError::UnsafeEntryPath`]
    /// when path checking is enabled and an entry escapes the destination.
    pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(&self, archive: P, dest_dir: Q) -> Result<()> {
        let archive = archive.as_ref();
        let dest = self.effective_dest(archive, dest_dir.as_ref())?;
        fs::create_dir_all(&dest).map_err(|source| ArchiveError::CreateDir {
            path: dest.clone(),
            source,
        })?;

        let file = File::open(archive)?;
        let mut zip = ZipArchive::new(file)
            .map_err(|e| ArchiveError::InvalidArchive(format!("failed to open ZIP archive: {e}")))?;

        for index in 0..zip.len() {
            let mut entry = zip.by_index(index).map_err(|e| {
                ArchiveError::InvalidArchive(format!("failed to read entry {index}: {e}"))
            })?;
            let out_path = self.entry_destination(&dest, entry.name())?;

            if entry.is_dir() {
                fs::create_dir_all(&out_path).map_err(|source| ArchiveError::CreateDir {
                    path: out_path.clone(),
                    source,
                })?;
                continue;
            }

            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent).map_err(|source| ArchiveError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }

            let mut out = BufWriter::new(File::create(&out_path)?);
            io::copy(&mut entry, &mut out)?;
            out.flush()?;
        }

        Ok(())
    }

    /// Resolves where entries land, applying the nesting folder if enabled.
    fn effective_dest(&self, archive: &Path, dest: &Path) -> Result<PathBuf> {
        if self.options.retain_archive_as_folder {
            Ok(dest.join(nest_folder_name(archive)?))
        } else {
            Ok(dest.to_path_buf())
        }
    }

    /// Maps an entry name to its on-disk path.
    fn entry_destination(&self, dest: &Path, name: &str) -> Result<PathBuf> {
        if self.options.reject_unsafe_paths {
            checked_entry_path(dest, name)
        } else {
            Ok(dest.join(name))
        }
    }
}

/// Derives the nesting folder name: the archive file name minus its final
/// extension. A name without an extension is used as-is.
fn nest_folder_name(archive: &Path) -> Result<&OsStr> {
    archive.file_stem().ok_or_else(|| {
        ArchiveError::InvalidArchive(format!(
            "archive path has no file name: {}",
            archive.display()
        ))
    })
}

/// Directory containing the archive, falling back to the current directory
/// for a parentless relative path.
fn parent_dir(archive: &Path) -> PathBuf {
    match archive.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Joins an entry name onto the destination, rejecting names that could
/// step outside it.
fn checked_entry_path(dest: &Path, name: &str) -> Result<PathBuf> {
    let mut out = dest.to_path_buf();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ArchiveError::UnsafeEntryPath {
                    path: PathBuf::from(name),
                });
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::ZipFixture;
    use tempfile::TempDir;

    #[test]
    fn test_nest_folder_name_strips_final_extension() {
        assert_eq!(
            nest_folder_name(Path::new("photos.backup.zip")).unwrap(),
            "photos.backup"
        );
        assert_eq!(nest_folder_name(Path::new("a.zip")).unwrap(), "a");
        assert_eq!(nest_folder_name(Path::new("archive")).unwrap(), "archive");
        assert_eq!(nest_folder_name(Path::new(".zip")).unwrap(), ".zip");
    }

    #[test]
    fn test_nest_folder_name_requires_file_name() {
        assert!(matches!(
            nest_folder_name(Path::new("/")),
            Err(ArchiveError::InvalidArchive(_))
        ));
    }

    #[test]
    fn test_parent_dir_resolution() {
        assert_eq!(parent_dir(Path::new("/tmp/x/a.zip")), PathBuf::from("/tmp/x"));
        assert_eq!(parent_dir(Path::new("a.zip")), PathBuf::from("."));
        assert_eq!(parent_dir(Path::new("/a.zip")), PathBuf::from("/"));
    }

    #[test]
    fn test_checked_entry_path_accepts_normal_names() {
        let dest = Path::new("/out");
        assert_eq!(
            checked_entry_path(dest, "a/b.txt").unwrap(),
            PathBuf::from("/out/a/b.txt")
        );
        assert_eq!(
            checked_entry_path(dest, "./c.txt").unwrap(),
            PathBuf::from("/out/c.txt")
        );
    }

    #[test]
    fn test_checked_entry_path_rejects_escapes() {
        let dest = Path::new("/out");
        for name in ["../evil.txt", "/etc/passwd", "a/../../b.txt"] {
            assert!(matches!(
                checked_entry_path(dest, name),
                Err(ArchiveError::UnsafeEntryPath { .. })
            ));
        }
    }

    #[test]
    fn test_extract_flat_archive() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("flat.zip");
        ZipFixture::new()
            .add_file("a.txt", b"alpha")
            .add_file("b.txt", b"beta")
            .write_to(&archive);
        let dest = temp.path().join("out");

        Extractor::default().extract(&archive, &dest).unwrap();

        assert_eq!(fs::read(dest.join("a.txt")).unwrap(), b"alpha");
        assert_eq!(fs::read(dest.join("b.txt")).unwrap(), b"beta");
    }

    #[test]
    fn test_extract_recreates_directory_entries() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("tree.zip");
        ZipFixture::new()
            .add_directory("sub/")
            .add_file("sub/file.txt", b"nested")
            .add_directory("hollow/")
            .write_to(&archive);
        let dest = temp.path().join("out");

        Extractor::default().extract(&archive, &dest).unwrap();

        assert_eq!(fs::read(dest.join("sub/file.txt")).unwrap(), b"nested");
        assert!(dest.join("hollow").is_dir(), "explicit directory entry restored");
    }

    #[test]
    fn test_extract_creates_missing_parents() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("deep.zip");
        // No directory entries at all, only a deep file name.
        ZipFixture::new()
            .add_file("a/b/c/leaf.txt", b"leaf")
            .write_to(&archive);
        let dest = temp.path().join("out");

        Extractor::default().extract(&archive, &dest).unwrap();

        assert_eq!(fs::read(dest.join("a/b/c/leaf.txt")).unwrap(), b"leaf");
    }

    #[test]
    fn test_extract_with_retained_folder() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("bundle.zip");
        ZipFixture::new().add_file("inner.txt", b"kept").write_to(&archive);
        let dest = temp.path().join("out");

        Extractor::new(ExtractOptions::default().with_retain_archive_as_folder(true))
            .extract(&archive, &dest)
            .unwrap();

        assert_eq!(fs::read(dest.join("bundle/inner.txt")).unwrap(), b"kept");
        assert!(!dest.join("inner.txt").exists());
    }

    #[test]
    fn test_extract_alongside_archive() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("here.zip");
        ZipFixture::new().add_file("sibling.txt", b"hi").write_to(&archive);

        Extractor::default().extract_alongside(&archive).unwrap();

        assert_eq!(fs::read(temp.path().join("sibling.txt")).unwrap(), b"hi");
    }

    #[test]
    fn test_extract_alongside_with_retained_folder() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("pack.zip");
        ZipFixture::new().add_file("inner.txt", b"hi").write_to(&archive);

        Extractor::new(ExtractOptions::default().with_retain_archive_as_folder(true))
            .extract_alongside(&archive)
            .unwrap();

        assert_eq!(fs::read(temp.path().join("pack/inner.txt")).unwrap(), b"hi");
    }

    #[test]
    fn test_extract_missing_archive_leaves_empty_dest() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("absent.zip");
        let dest = temp.path().join("out");

        let result = Extractor::default().extract(&archive, &dest);

        assert!(matches!(
            &result,
            Err(ArchiveError::Io(e)) if e.kind() == io::ErrorKind::NotFound
        ));
        // The destination is created before the archive is opened.
        assert!(dest.is_dir());
        assert_eq!(fs::read_dir(&dest).unwrap().count(), 0);
    }

    #[test]
    fn test_extract_rejects_non_zip_bytes() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("not.zip");
        fs::write(&archive, b"this is not an archive").unwrap();
        let dest = temp.path().join("out");

        let result = Extractor::default().extract(&archive, &dest);
        assert!(matches!(result, Err(ArchiveError::InvalidArchive(_))));
    }

    #[test]
    fn test_extract_overwrites_existing_files() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("new.zip");
        ZipFixture::new().add_file("a.txt", b"fresh").write_to(&archive);
        let dest = temp.path().join("out");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("a.txt"), b"stale").unwrap();

        Extractor::default().extract(&archive, &dest).unwrap();

        assert_eq!(fs::read(dest.join("a.txt")).unwrap(), b"fresh");
    }

    #[test]
    fn test_extract_aborts_on_first_failure() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("seq.zip");
        ZipFixture::new()
            .add_file("one.txt", b"1")
            .add_file("blocked.txt", b"2")
            .add_file("three.txt", b"3")
            .write_to(&archive);
        let dest = temp.path().join("out");
        // A directory squatting on the entry's path makes File::create fail.
        fs::create_dir_all(dest.join("blocked.txt")).unwrap();

        let result = Extractor::default().extract(&archive, &dest);

        assert!(matches!(result, Err(ArchiveError::Io(_))));
        assert!(dest.join("one.txt").is_file(), "entries before the failure stay");
        assert!(!dest.join("three.txt").exists(), "entries after it are skipped");
    }

    #[test]
    fn test_extract_follows_traversal_names_by_default() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("sneaky.zip");
        ZipFixture::new().add_file("../evil.txt", b"out").write_to(&archive);
        let dest = temp.path().join("inner");

        Extractor::default().extract(&archive, &dest).unwrap();

        // Default behavior joins names verbatim, so the entry lands outside.
        assert!(temp.path().join("evil.txt").is_file());
        assert!(!dest.join("evil.txt").exists());
    }

    #[test]
    fn test_extract_rejects_traversal_names_when_enabled() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("sneaky.zip");
        ZipFixture::new().add_file("../evil.txt", b"out").write_to(&archive);
        let dest = temp.path().join("inner");

        let result = Extractor::new(ExtractOptions::default().with_reject_unsafe_paths(true))
            .extract(&archive, &dest);

        assert!(matches!(
            result,
            Err(ArchiveError::UnsafeEntryPath { path }) if path == Path::new("../evil.txt")
        ));
        assert!(!temp.path().join("evil.txt").exists());
    }
}
