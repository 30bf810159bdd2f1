use crate::core::interfaces::{FileSystemService, ModuleProcessor};
use crate::core::models::{ModuleMap, ModulePath, ModuleRecord};
use crate::core::resolver::resolve;
use crate::utils::{Logger, Result};
use std::vec;

/// Walks the import graph from an entry module, rewriting every module it reaches.
pub struct GraphBuilder<'a> {
    fs: &'a dyn FileSystemService,
    processor: &'a dyn ModuleProcessor,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(fs: &'a dyn FileSystemService, processor: &'a dyn ModuleProcessor) -> Self {
        Self { fs, processor }
    }

    /// Fill `modules` with every module reachable from `entry`.
    ///
    /// A module is inserted as soon as it is rewritten, before its own
    /// dependencies are visited, so the map ends up in depth-first pre-order.
    /// Paths already in the map are skipped when reached, which bounds both
    /// diamonds and cycles. Each stack frame holds the not-yet-visited
    /// dependencies of one module.
    pub fn build(&self, entry: &ModulePath, modules: &mut ModuleMap) -> Result<()> {
        if modules.contains(entry) {
            return Ok(());
        }

        let mut pending: Vec<vec::IntoIter<ModulePath>> = vec![self.visit(entry.clone(), modules)?];

        while let Some(frame) = pending.last_mut() {
            match frame.next() {
                Some(dependency) if modules.contains(&dependency) => {
                    Logger::already_visited(&dependency);
                }
                Some(dependency) => {
                    let nested = self.visit(dependency, modules)?;
                    pending.push(nested);
                }
                None => {
                    pending.pop();
                }
            }
        }

        Ok(())
    }

    fn visit(&self, path: ModulePath, modules: &mut ModuleMap) -> Result<vec::IntoIter<ModulePath>> {
        Logger::reading_module(&path);
        let source = self.fs.read_file(path.as_path())?;
        let processed = self.processor.process_module(&path, &source)?;

        let dependencies: Vec<ModulePath> = processed
            .specifiers
            .iter()
            .map(|specifier| resolve(&path, specifier))
            .collect();
        Logger::module_rewritten(&path, dependencies.len());

        let record = ModuleRecord {
            code: processed.code,
            dependencies: dependencies.clone(),
        };
        modules.insert(path, record);

        Ok(dependencies.into_iter())
    }
}
