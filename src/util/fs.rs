//! Filesystem primitives: recursive mkdir and exclusive file creation.

use std::fs::{DirBuilder, File, OpenOptions};
use std::io;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};

/// Create `path` and any missing parents with `mode`. Directories that
/// already exist keep their current permissions.
pub fn ensure_dir(path: &Path, mode: u32) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(mode);
    builder.create(path)
}

/// Open `path` for writing with `mode`, failing if it already exists.
/// Returns `Ok(None)` when the file is present, leaving it untouched.
pub fn create_exclusive(path: &Path, mode: u32) -> io::Result<Option<File>> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    options.mode(mode);
    match options.open(path) {
        Ok(file) => Ok(Some(file)),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_recursive_with_mode() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a").join("b");
        ensure_dir(&nested, 0o755).unwrap();
        assert!(nested.is_dir());
        let mode = fs::metadata(&nested).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o755);
    }

    #[test]
    fn test_ensure_dir_existing_is_ok() {
        let tmp = TempDir::new().unwrap();
        ensure_dir(tmp.path(), 0o755).unwrap();
    }

    #[test]
    fn test_create_exclusive_new_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("f");
        let mut file = create_exclusive(&path, 0o600).unwrap().unwrap();
        file.write_all(b"x").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn test_create_exclusive_existing_returns_none() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("f");
        fs::write(&path, b"original").unwrap();
        assert!(create_exclusive(&path, 0o600).unwrap().is_none());
        assert_eq!(fs::read(&path).unwrap(), b"original");
    }
}
