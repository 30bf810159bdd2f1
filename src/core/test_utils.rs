use crate::core::interfaces::FileSystemService;
use crate::utils::{KnitError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory files for exercising the graph without touching disk
#[derive(Default)]
pub struct MemoryFileSystem {
    files: HashMap<PathBuf, String>,
    reads: RefCell<HashMap<PathBuf, usize>>,
    writes: RefCell<HashMap<PathBuf, String>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn read_count(&self, path: &str) -> usize {
        self.reads.borrow().get(Path::new(path)).copied().unwrap_or(0)
    }

    pub fn written(&self, path: &str) -> Option<String> {
        self.writes.borrow().get(Path::new(path)).cloned()
    }
}

impl FileSystemService for MemoryFileSystem {
    fn read_file(&self, path: &Path) -> Result<String> {
        *self.reads.borrow_mut().entry(path.to_path_buf()).or_default() += 1;
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| KnitError::ModuleRead {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "not in memory file system"),
            })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        self.writes
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
