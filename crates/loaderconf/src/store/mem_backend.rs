use super::backend::Storage;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since config models are
/// single-owner and single-threaded. Behaves like a tiny filesystem: writing a
/// file whose parent directory was never created fails with `NotFound`.
#[derive(Debug, Default)]
pub struct MemStorage {
    files: RefCell<HashMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    created_dirs: RefCell<Vec<PathBuf>>,
    simulate_read_error: RefCell<Option<io::ErrorKind>>,
    simulate_write_error: RefCell<Option<io::ErrorKind>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a file, registering its ancestors as existing directories.
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.register_dirs(parent);
        }
        self.files.borrow_mut().insert(path, contents.into());
        self
    }

    /// Make every read fail with `kind`.
    pub fn set_simulate_read_error(&self, kind: Option<io::ErrorKind>) {
        *self.simulate_read_error.borrow_mut() = kind;
    }

    /// Make every write and directory creation fail with `kind`.
    pub fn set_simulate_write_error(&self, kind: Option<io::ErrorKind>) {
        *self.simulate_write_error.borrow_mut() = kind;
    }

    /// Current contents of `path`, if any.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Directories created through [`Storage::create_dir_all`], in call order.
    pub fn created_dirs(&self) -> Vec<PathBuf> {
        self.created_dirs.borrow().clone()
    }

    fn register_dirs(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
    }

    fn simulated(slot: &RefCell<Option<io::ErrorKind>>) -> io::Result<()> {
        match *slot.borrow() {
            Some(kind) => Err(io::Error::new(kind, "Simulated storage error")),
            None => Ok(()),
        }
    }
}

impl Storage for MemStorage {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        Self::simulated(&self.simulate_read_error)?;
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        Self::simulated(&self.simulate_write_error)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !self.is_dir(parent) {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} does not exist", parent.display()),
                ));
            }
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        Self::simulated(&self.simulate_write_error)?;
        self.register_dirs(path);
        self.created_dirs.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.parent().is_none() || self.dirs.borrow().contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_file_is_readable_and_parents_exist() {
        let storage = MemStorage::new().with_file("/boot/efi/loader/loader.conf", "timeout 3\n");
        assert_eq!(
            storage
                .read_to_string(Path::new("/boot/efi/loader/loader.conf"))
                .unwrap(),
            "timeout 3\n"
        );
        assert!(storage.is_dir(Path::new("/boot/efi")));
        assert!(storage.is_dir(Path::new("/")));
    }

    #[test]
    fn missing_file_reads_as_not_found() {
        let storage = MemStorage::new();
        let err = storage.read_to_string(Path::new("/nope")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn write_requires_parent_directory() {
        let storage = MemStorage::new();
        let path = Path::new("/boot/efi/loader/loader.conf");
        assert_eq!(
            storage.write(path, "x").unwrap_err().kind(),
            io::ErrorKind::NotFound
        );

        storage.create_dir_all(Path::new("/boot/efi/loader")).unwrap();
        storage.write(path, "x").unwrap();
        assert_eq!(storage.contents(path), Some("x".to_string()));
    }

    #[test]
    fn simulated_write_error_blocks_writes_and_mkdir() {
        let storage = MemStorage::new();
        storage.set_simulate_write_error(Some(io::ErrorKind::PermissionDenied));
        assert_eq!(
            storage.create_dir_all(Path::new("/a")).unwrap_err().kind(),
            io::ErrorKind::PermissionDenied
        );
        assert_eq!(
            storage.write(Path::new("/x"), "x").unwrap_err().kind(),
            io::ErrorKind::PermissionDenied
        );
        assert!(storage.created_dirs().is_empty());
    }
}
