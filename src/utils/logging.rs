use crate::core::models::ModulePath;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    /// Install the global subscriber. `RUST_LOG` wins over `verbose`.
    pub fn init(verbose: bool) {
        let default_level = if verbose { "knit=debug" } else { "knit=info" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        // A second init (tests, embedding) keeps the first subscriber
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    }

    pub fn bundle_start(entry: &ModulePath, output: &str) {
        info!("🧶 knit - bundling");
        info!("📁 Entry: {}", entry.display_portable());
        info!("📦 Output: {}", output);
    }

    pub fn reading_module(path: &ModulePath) {
        debug!("🔍 Reading module: {}", path.display_portable());
    }

    pub fn module_rewritten(path: &ModulePath, dependencies: usize) {
        debug!(
            "⚡ Rewrote {} ({} dependencies)",
            path.display_portable(),
            dependencies
        );
    }

    pub fn already_visited(path: &ModulePath) {
        debug!("↩️  Already visited: {}", path.display_portable());
    }

    pub fn unsupported_syntax(path: &ModulePath, construct: &str) {
        debug!(
            "⚠️  {} left untouched in {} (not supported when bundling)",
            construct,
            path.display_portable()
        );
    }

    pub fn bundle_complete(modules: usize, bytes: usize, elapsed: Duration, output: &str) {
        info!("");
        info!("📊 Bundle Statistics:");
        info!("  • Modules bundled: {}", modules);
        info!("  • Bundle size: {} bytes", bytes);
        info!("  • Bundle time: {:.2?}", elapsed);
        info!("  • Output file: {}", output);
        info!("✅ Bundle written successfully!");
    }

    pub fn info(msg: &str) {
        info!("{}", msg);
    }

    pub fn debug(msg: &str) {
        debug!("{}", msg);
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: &str) -> Self {
        debug!("⏱️  Starting: {}", name);
        Self {
            start: Instant::now(),
            name: name.to_string(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        debug!("⏱️  Completed: {} in {:.2?}", self.name, self.elapsed());
    }
}
