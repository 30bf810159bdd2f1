use crate::core::interfaces::FileSystemService;
use crate::core::models::ModuleMap;
use crate::utils::{Result, Timer};
use std::path::Path;

/// Concatenates rewritten modules, dependencies first and the entry last
pub struct BundleEmitter;

impl BundleEmitter {
    /// Each module is preceded by a `// <path>` header and followed by a blank line.
    pub fn render(modules: &ModuleMap) -> String {
        let mut bundle = String::new();

        for (path, record) in modules.emission_order() {
            bundle.push_str("// ");
            bundle.push_str(&path.display_portable());
            bundle.push('\n');
            bundle.push_str(&record.code);
            bundle.push_str("\n\n");
        }

        bundle
    }

    /// Render and write to `output`, replacing any existing file. Returns the bundle size.
    pub fn emit(modules: &ModuleMap, output: &Path, fs: &dyn FileSystemService) -> Result<usize> {
        let _timer = Timer::start("Writing bundle");

        let bundle = Self::render(modules);
        fs.write_file(output, &bundle)?;

        Ok(bundle.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{ModulePath, ModuleRecord};
    use crate::core::test_utils::MemoryFileSystem;

    fn map(entries: &[(&str, &str)]) -> ModuleMap {
        let mut modules = ModuleMap::new();
        for (path, code) in entries {
            modules.insert(
                ModulePath::new(path),
                ModuleRecord {
                    code: code.to_string(),
                    dependencies: Vec::new(),
                },
            );
        }
        modules
    }

    #[test]
    fn test_render_reverses_discovery_order() {
        let modules = map(&[("/main.js", "main();"), ("/a.js", "function a() {}")]);

        assert_eq!(
            BundleEmitter::render(&modules),
            "// /a.js\nfunction a() {}\n\n// /main.js\nmain();\n\n"
        );
    }

    #[test]
    fn test_render_empty_map() {
        assert_eq!(BundleEmitter::render(&ModuleMap::new()), "");
    }

    #[test]
    fn test_emit_writes_rendered_bundle() {
        let modules = map(&[("/main.js", "run();")]);
        let fs = MemoryFileSystem::new();

        let size = BundleEmitter::emit(&modules, Path::new("/out/bundle.js"), &fs).unwrap();

        let written = fs.written("/out/bundle.js").unwrap();
        assert_eq!(written, "// /main.js\nrun();\n\n");
        assert_eq!(size, written.len());
    }
}
