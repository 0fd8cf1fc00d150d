//! Filesystem queries consumed by the tree builder.
//!
//! The builder never touches `std::fs` directly; everything it needs to know
//! about the hierarchy goes through an [`FsProvider`]. [`StdFs`] is the real
//! implementation, tests can wrap it to inject failures.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Primitive filesystem queries.
///
/// An [`io::ErrorKind::NotFound`] from any method is read by the builder as
/// "the path vanished" and the entry is skipped. Every other error aborts
/// the scan.
pub trait FsProvider: Sync {
    /// Whether `path` exists, following symlinks. A link whose target cannot
    /// be reached counts as missing.
    fn exists(&self, path: &Path) -> io::Result<bool>;
    /// Whether `path` is a directory, following symlinks.
    fn is_directory(&self, path: &Path) -> io::Result<bool>;
    /// Whether `path` itself is a symbolic link.
    fn is_symbolic_link(&self, path: &Path) -> io::Result<bool>;
    /// Entry names of the directory at `path`.
    fn list_directory(&self, path: &Path) -> io::Result<Vec<OsString>>;
    /// Absolute form of `path` with `.`, `..` and symlinks resolved.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
    /// The literal text stored in the link at `path`.
    fn read_symbolic_link_target(&self, path: &Path) -> io::Result<String>;
}

/// [`FsProvider`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFs;

impl FsProvider for StdFs {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        match path.try_exists() {
            Ok(found) => Ok(found),
            // A link that cannot be resolved (e.g. one that loops back on
            // itself) is treated like a dangling one.
            Err(e) => match fs::symlink_metadata(path) {
                Ok(meta) if meta.file_type().is_symlink() => Ok(false),
                _ => Err(e),
            },
        }
    }

    fn is_directory(&self, path: &Path) -> io::Result<bool> {
        match fs::metadata(path) {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn is_symbolic_link(&self, path: &Path) -> io::Result<bool> {
        match fs::symlink_metadata(path) {
            Ok(meta) => Ok(meta.file_type().is_symlink()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn list_directory(&self, path: &Path) -> io::Result<Vec<OsString>> {
        fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect()
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn read_symbolic_link_target(&self, path: &Path) -> io::Result<String> {
        fs::read_link(path).map(|target| target.to_string_lossy().into_owned())
    }
}
