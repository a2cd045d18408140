//! Filesystem traversal for archive sources.
//!
//! Decides what relative name each file gets inside an archive: a file root
//! is named after itself, a directory root contributes its descendants with
//! names relative to the root. Directories are never emitted as entries, so
//! empty directories leave no trace in the archive.

use crate::ArchiveError;
use crate::Result;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// A file scheduled for inclusion in an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Location of the file on disk.
    pub path: PathBuf,
    /// Archive-relative name, forward-slash separated.
    pub name: String,
}

/// Collects the files reachable from every input root, in root order.
///
/// # Examples
///
/// ```no_run
/// use zipnest_core::walker::collect_sources;
///
/// let entries = collect_sources(&["photos", "notes.txt"])?;
/// for entry in &entries {
///     println!("{}", entry.name);
/// }
/// # Ok::<(), zipnest_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// Returns [`ArchiveError::SourceNotFound`] for a root that does not exist,
/// or [`ArchiveError::Io`] when a directory cannot be listed.
pub fn collect_sources<P: AsRef<Path>>(roots: &[P]) -> Result<Vec<SourceEntry>> {
    let mut entries = Vec::new();
    for root in roots {
        entries.extend(collect_root(root.as_ref())?);
    }
    Ok(entries)
}

/// Collects the files reachable from a single input root.
///
/// A directory root uses itself as the base directory, so its own name never
/// appears in entry names. A file root uses its parent as the base and
/// contributes exactly one entry named after the file.
///
/// # Errors
///
/// Returns [`ArchiveError::SourceNotFound`] if the root does not exist, or
/// [`ArchiveError::Io`] when a directory cannot be listed or a name is not
/// valid UTF-8.
pub fn collect_root(root: &Path) -> Result<Vec<SourceEntry>> {
    if !root.exists() {
        return Err(ArchiveError::SourceNotFound {
            path: root.to_path_buf(),
        });
    }

    if root.is_dir() {
        collect_dir(root)
    } else {
        let name = file_entry_name(root)?;
        Ok(vec![SourceEntry {
            path: root.to_path_buf(),
            name,
        }])
    }
}

/// Walks a directory tree with a work queue of pending directories.
///
/// Call depth stays constant regardless of how deep the tree nests. Within
/// one directory, entries follow the listing order of the filesystem.
fn collect_dir(base: &Path) -> Result<Vec<SourceEntry>> {
    let mut entries = Vec::new();
    let mut pending = vec![base.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for child in fs::read_dir(&dir)? {
            let child = child?;
            let path = child.path();
            // is_dir resolves symlinks, so a link to a directory is walked
            // and a link to a file is archived under the link's own name.
            if path.is_dir() {
                pending.push(path);
            } else {
                let name = relative_entry_name(&path, base)?;
                entries.push(SourceEntry { path, name });
            }
        }
    }

    Ok(entries)
}

/// Computes the archive name for a descendant of `base`.
fn relative_entry_name(path: &Path, base: &Path) -> Result<String> {
    let relative = path.strip_prefix(base).map_err(|_| {
        ArchiveError::Io(std::io::Error::other(format!(
            "path {} is not under base directory {}",
            path.display(),
            base.display()
        )))
    })?;
    normalize_entry_name(relative)
}

/// Computes the archive name for a file root: the file's own name.
fn file_entry_name(path: &Path) -> Result<String> {
    let name = path.file_name().ok_or_else(|| {
        ArchiveError::Io(std::io::Error::other(format!(
            "source file has no name: {}",
            path.display()
        )))
    })?;
    normalize_entry_name(Path::new(name))
}

/// Normalizes a relative path into ZIP entry form.
///
/// ZIP names use forward slashes regardless of platform.
fn normalize_entry_name(relative: &Path) -> Result<String> {
    let raw = relative.to_str().ok_or_else(|| {
        ArchiveError::Io(std::io::Error::other(format!(
            "path is not valid UTF-8: {}",
            relative.display()
        )))
    })?;

    #[cfg(windows)]
    let name = raw.replace('\\', "/");

    #[cfg(not(windows))]
    let name = raw.to_string();

    Ok(name)
}
