use crate::core::{emitter::BundleEmitter, graph::GraphBuilder, interfaces::*, models::*};
use crate::infrastructure::{OxcModuleProcessor, StdFileSystemService};
use crate::utils::{Logger, Result, Timer};
use std::path::Path;
use std::time::Instant;

/// Runs one bundle: graph discovery, then emission
pub struct BundleService {
    fs_service: Box<dyn FileSystemService>,
    processor: Box<dyn ModuleProcessor>,
}

impl BundleService {
    pub fn new(fs_service: Box<dyn FileSystemService>, processor: Box<dyn ModuleProcessor>) -> Self {
        Self {
            fs_service,
            processor,
        }
    }

    /// Disk-backed service with the oxc processor configured from `options`
    pub fn for_options(options: &BundleOptions) -> Self {
        Self::new(
            Box::new(StdFileSystemService),
            Box::new(OxcModuleProcessor::new(options.single_quote)),
        )
    }

    /// Discover every module reachable from `options.entry` without writing anything
    pub fn graph(&self, options: &BundleOptions) -> Result<ModuleMap> {
        let entry = Self::entry_path(&options.entry)?;
        self.collect(&entry)
    }

    /// Bundle `options.entry` into `options.output`.
    ///
    /// The output is written only after every module has been read and
    /// rewritten, so a failing bundle never leaves a partial file behind.
    pub fn bundle(&self, options: &BundleOptions) -> Result<BundleReport> {
        let start = Instant::now();
        let entry = Self::entry_path(&options.entry)?;
        let output = options.output.display().to_string();
        Logger::bundle_start(&entry, &output);

        let modules = self.collect(&entry)?;
        let bytes_written = BundleEmitter::emit(&modules, &options.output, self.fs_service.as_ref())?;

        let report = BundleReport {
            modules: modules.emission_order().map(|(path, _)| path.clone()).collect(),
            output: options.output.clone(),
            bytes_written,
            duration: start.elapsed(),
        };
        Logger::bundle_complete(report.modules.len(), bytes_written, report.duration, &output);

        Ok(report)
    }

    fn collect(&self, entry: &ModulePath) -> Result<ModuleMap> {
        let _timer = Timer::start("Module graph");

        let mut modules = ModuleMap::new();
        GraphBuilder::new(self.fs_service.as_ref(), self.processor.as_ref()).build(entry, &mut modules)?;

        Ok(modules)
    }

    /// Relative entries are anchored at the current directory
    fn entry_path(entry: &Path) -> Result<ModulePath> {
        if entry.is_absolute() {
            Ok(ModulePath::new(entry))
        } else {
            Ok(ModulePath::new(std::env::current_dir()?.join(entry)))
        }
    }
}

/// Bundle with the default disk-backed services
pub fn bundle(options: &BundleOptions) -> Result<BundleReport> {
    BundleService::for_options(options).bundle(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_utils::MemoryFileSystem;
    use std::rc::Rc;

    /// Lets a test keep a handle on the file system it hands to the service
    struct Shared(Rc<MemoryFileSystem>);

    impl FileSystemService for Shared {
        fn read_file(&self, path: &Path) -> Result<String> {
            self.0.read_file(path)
        }

        fn write_file(&self, path: &Path, content: &str) -> Result<()> {
            self.0.write_file(path, content)
        }
    }

    fn service(fs: &Rc<MemoryFileSystem>) -> BundleService {
        BundleService::new(
            Box::new(Shared(Rc::clone(fs))),
            Box::new(OxcModuleProcessor::default()),
        )
    }

    #[test]
    fn test_bundle_writes_dependencies_first() {
        let fs = Rc::new(
            MemoryFileSystem::new()
                .with_file("/app/main.js", "import { a } from './a.js';\nconsole.log(a());")
                .with_file("/app/a.js", "export function a() { return 1; }"),
        );

        let report = service(&fs)
            .bundle(&BundleOptions::new("/app/main.js", "/dist/out.js"))
            .unwrap();

        let written = fs.written("/dist/out.js").unwrap();
        let a_at = written.find("// /app/a.js").unwrap();
        let main_at = written.find("// /app/main.js").unwrap();
        assert!(a_at < main_at);
        assert_eq!(report.modules, vec![ModulePath::new("/app/a.js"), ModulePath::new("/app/main.js")]);
        assert_eq!(report.bytes_written, written.len());
    }

    #[test]
    fn test_failed_bundle_writes_nothing() {
        let fs = Rc::new(MemoryFileSystem::new().with_file("/app/main.js", "import './gone.js';"));

        let result = service(&fs).bundle(&BundleOptions::new("/app/main.js", "/dist/out.js"));

        assert!(result.is_err());
        assert!(fs.written("/dist/out.js").is_none());
    }

    #[test]
    fn test_graph_does_not_write() {
        let fs = Rc::new(
            MemoryFileSystem::new()
                .with_file("/app/main.js", "import './a.js';")
                .with_file("/app/a.js", ""),
        );

        let modules = service(&fs)
            .graph(&BundleOptions::new("/app/main.js", "/dist/out.js"))
            .unwrap();

        assert_eq!(modules.len(), 2);
        assert!(fs.written("/dist/out.js").is_none());
    }

    #[test]
    fn test_entry_is_normalized() {
        let fs = Rc::new(MemoryFileSystem::new().with_file("/app/main.js", "run();"));

        let modules = service(&fs)
            .graph(&BundleOptions::new("/app/src/../main.js", "/dist/out.js"))
            .unwrap();

        assert!(modules.contains(&ModulePath::new("/app/main.js")));
    }
}
