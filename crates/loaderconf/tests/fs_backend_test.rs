use loaderconf::store::{FsStorage, Storage};
use std::fs;
use std::io;
use std::path::Path;
use tempfile::TempDir;

fn setup() -> (TempDir, FsStorage) {
    let root = TempDir::new().unwrap();
    let storage = FsStorage::with_root(root.path());
    (root, storage)
}

#[test]
fn test_fs_storage_basic_io() {
    let (root, storage) = setup();
    let path = Path::new("/etc/sample.conf");

    storage.create_dir_all(Path::new("/etc")).unwrap();
    storage.write(path, "Hello World\n").unwrap();

    assert_eq!(storage.read_to_string(path).unwrap(), "Hello World\n");
    assert_eq!(
        fs::read_to_string(root.path().join("etc/sample.conf")).unwrap(),
        "Hello World\n"
    );
}

#[test]
fn test_fs_storage_missing_file_is_not_found() {
    let (_root, storage) = setup();
    let err = storage
        .read_to_string(Path::new("/boot/efi/loader/loader.conf"))
        .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn test_fs_storage_atomic_write_artifacts() {
    let (root, storage) = setup();
    let path = Path::new("/loader.conf");

    storage.write(path, "timeout 1\n").unwrap();
    storage.write(path, "timeout 2\n").unwrap();

    assert_eq!(
        fs::read_to_string(root.path().join("loader.conf")).unwrap(),
        "timeout 2\n"
    );

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(root.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_storage_write_into_missing_dir_fails_without_artifacts() {
    let (root, storage) = setup();
    let err = storage
        .write(Path::new("/missing/loader.conf"), "x")
        .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
    assert!(!root.path().join("missing").exists());
}

#[test]
fn test_fs_storage_is_dir() {
    let (_root, storage) = setup();
    assert!(storage.is_dir(Path::new("/")));
    assert!(!storage.is_dir(Path::new("/boot")));
    storage.create_dir_all(Path::new("/boot/efi/loader")).unwrap();
    assert!(storage.is_dir(Path::new("/boot")));
    assert!(storage.is_dir(Path::new("/boot/efi/loader")));
}

#[test]
fn test_fs_storage_without_root_uses_paths_verbatim() {
    let dir = TempDir::new().unwrap();
    let storage = FsStorage::new();
    let path = dir.path().join("loader.conf");

    storage.write(&path, "default linux\n").unwrap();
    assert_eq!(storage.read_to_string(&path).unwrap(), "default linux\n");
}

#[cfg(unix)]
#[test]
fn test_fs_storage_write_keeps_existing_mode() {
    use std::os::unix::fs::PermissionsExt;

    let (root, storage) = setup();
    let on_disk = root.path().join("loader.conf");
    fs::write(&on_disk, "timeout 1\n").unwrap();
    fs::set_permissions(&on_disk, fs::Permissions::from_mode(0o640)).unwrap();

    storage.write(Path::new("/loader.conf"), "timeout 2\n").unwrap();

    let mode = fs::metadata(&on_disk).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o640);
    assert_eq!(fs::read_to_string(&on_disk).unwrap(), "timeout 2\n");
}

#[cfg(unix)]
#[test]
fn test_fs_storage_refuses_read_only_file_in_writable_dir() {
    use std::os::unix::fs::PermissionsExt;

    let (root, storage) = setup();
    let on_disk = root.path().join("loader.conf");
    fs::write(&on_disk, "timeout 1\n").unwrap();
    fs::set_permissions(&on_disk, fs::Permissions::from_mode(0o444)).unwrap();

    // Privileged users may write read-only files; nothing to test then.
    if fs::OpenOptions::new().write(true).open(&on_disk).is_ok() {
        return;
    }

    let err = storage
        .write(Path::new("/loader.conf"), "timeout 2\n")
        .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    assert_eq!(fs::read_to_string(&on_disk).unwrap(), "timeout 1\n");
}
