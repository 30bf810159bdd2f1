use crate::core::resolver::normalize;
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Inputs of a single bundle invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleOptions {
    pub entry: PathBuf,
    pub output: PathBuf,
    /// Emit string literals with single quotes
    pub single_quote: bool,
}

impl BundleOptions {
    pub fn new(entry: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            entry: entry.into(),
            output: output.into(),
            single_quote: false,
        }
    }
}

/// Lexically normalized path identifying one module.
///
/// Two specifiers that resolve to the same file through different `./` and
/// `../` spellings produce equal `ModulePath`s.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModulePath(PathBuf);

impl ModulePath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self(normalize(path.as_ref()))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Path with `\` separators turned into `/`, used in bundle headers and logs
    pub fn display_portable(&self) -> String {
        self.0.to_string_lossy().replace('\\', "/")
    }
}

impl AsRef<Path> for ModulePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_portable())
    }
}

/// A module after its import/export syntax has been stripped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRecord {
    pub code: String,
    /// Resolved imports in source order
    pub dependencies: Vec<ModulePath>,
}

/// Modules keyed by path, in discovery order. The first insertion of a path wins.
#[derive(Debug, Default)]
pub struct ModuleMap {
    modules: IndexMap<ModulePath, ModuleRecord>,
}

impl ModuleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` and leaves the existing record alone if `path` is already present
    pub fn insert(&mut self, path: ModulePath, record: ModuleRecord) -> bool {
        match self.modules.entry(path) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
        }
    }

    pub fn contains(&self, path: &ModulePath) -> bool {
        self.modules.contains_key(path)
    }

    pub fn get(&self, path: &ModulePath) -> Option<&ModuleRecord> {
        self.modules.get(path)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Entry first, then depth-first in import order
    pub fn discovery_order(&self) -> impl DoubleEndedIterator<Item = (&ModulePath, &ModuleRecord)> {
        self.modules.iter()
    }

    /// Dependencies first, entry last
    pub fn emission_order(&self) -> impl Iterator<Item = (&ModulePath, &ModuleRecord)> {
        self.discovery_order().rev()
    }
}

/// Summary of a finished bundle, used for reporting
#[derive(Debug, Clone)]
pub struct BundleReport {
    /// Modules in the order they appear in the output
    pub modules: Vec<ModulePath>,
    pub output: PathBuf,
    pub bytes_written: usize,
    pub duration: Duration,
}
