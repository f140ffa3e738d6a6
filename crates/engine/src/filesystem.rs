use std::ffi::OsString;
use std::io;
use std::path::Path;

/// Filesystem access needed by the walker.
///
/// Both operations may fail; the walker treats any failure as terminal.
pub trait FileSystem {
    /// Names of the direct children of `path`, in the order the platform returns them.
    ///
    /// # Errors
    /// Returns the underlying I/O error when the directory cannot be listed.
    fn read_dir_names(&self, path: &Path) -> io::Result<Vec<OsString>>;

    /// Whether `path` is a directory. Symlinks are followed.
    ///
    /// # Errors
    /// Returns the underlying I/O error when `path` cannot be stat'ed.
    fn is_dir(&self, path: &Path) -> io::Result<bool>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn read_dir_names(&self, path: &Path) -> io::Result<Vec<OsString>> {
        (**self).read_dir_names(path)
    }

    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        (**self).is_dir(path)
    }
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_dir_names(&self, path: &Path) -> io::Result<Vec<OsString>> {
        std::fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect()
    }

    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        // metadata() follows symlinks, so a link to a directory is descended into.
        std::fs::metadata(path).map(|meta| meta.is_dir())
    }
}
