use std::io;
use std::path::Path;

/// Abstract interface for whole-file storage.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`crate::ConfigFile`] handles the "what" (parsing, absent files, permission
/// policy). Errors are plain [`io::Error`]s so callers can branch on
/// [`io::ErrorKind`].
pub trait Storage {
    /// Read the whole file at `path`.
    /// Must fail with [`io::ErrorKind::NotFound`] when the file does not exist.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replace the whole file at `path` with `contents`.
    /// MUST NOT leave a partially written file behind on failure.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Create `path` and any missing ancestors.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

impl<T: Storage + ?Sized> Storage for &T {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        (**self).write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }
}
