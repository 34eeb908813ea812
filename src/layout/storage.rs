//! Storage seam for the layout side effects.
//!
//! Strategies never call `std::fs` directly. Directory creation and file
//! writes go through [`Storage`], so tests can swap in a recording mock and
//! assert exactly which side effects an operation performed (and that pure
//! operations performed none).

use std::fs;
use std::io;
use std::path::Path;

/// The two filesystem operations a layout run needs.
pub trait Storage: Send + Sync {
    /// Create `path` and any missing ancestors. Succeeds if it already exists.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Write `contents` to `path`, replacing any existing file.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// Writes straight to the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }
}

impl<S: Storage + ?Sized> Storage for &S {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        (**self).write(path, contents)
    }
}
