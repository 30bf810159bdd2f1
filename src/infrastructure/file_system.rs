use crate::core::interfaces::FileSystemService;
use crate::utils::{KnitError, Result};
use std::fs;
use std::path::Path;

/// Blocking file system; every call opens and closes its own handle
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystemService;

impl FileSystemService for StdFileSystemService {
    fn read_file(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| KnitError::ModuleRead {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        let to_write_error = |source| KnitError::Write {
            path: path.to_path_buf(),
            source,
        };

        // Ensure parent directory exists
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(to_write_error)?;
        }

        fs::write(path, content).map_err(to_write_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_operations() {
        let fs_service = StdFileSystemService;
        let temp_dir = tempdir().unwrap();
        let test_file = temp_dir.path().join("nested/dir/bundle.js");

        fs_service.write_file(&test_file, "first").unwrap();
        fs_service.write_file(&test_file, "second").unwrap();

        assert_eq!(fs_service.read_file(&test_file).unwrap(), "second");
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing.js");

        let err = StdFileSystemService.read_file(&missing).unwrap_err();

        match err {
            KnitError::ModuleRead { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected ModuleRead, got {other:?}"),
        }
    }
}
