use crate::core::models::*;
use crate::utils::Result;
use std::path::Path;

/// File system operations interface
pub trait FileSystemService {
    fn read_file(&self, path: &Path) -> Result<String>;
    /// Overwrites `path`, creating missing parent directories
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;
}

/// Turns one module's source into bundle-ready code plus the relative
/// specifiers it imported, in source order.
pub trait ModuleProcessor {
    fn process_module(&self, path: &ModulePath, source: &str) -> Result<ProcessedModule>;
}

/// Output of a [`ModuleProcessor`]; specifiers are not yet resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedModule {
    pub code: String,
    pub specifiers: Vec<String>,
}
