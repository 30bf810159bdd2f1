//! knit - a minimal ES module bundler.
//!
//! Starting from an entry module, knit follows every static `import` with a
//! relative path, strips `import`/`export` syntax from each module it reaches
//! and concatenates the results into one file, dependencies first.
//!
//! ```no_run
//! use knit::BundleOptions;
//!
//! # fn main() -> knit::Result<()> {
//! let report = knit::bundle(&BundleOptions::new("src/main.js", "dist/bundle.js"))?;
//! println!("bundled {} modules", report.modules.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod infrastructure;
pub mod utils;

pub use crate::core::models::{BundleOptions, BundleReport, ModuleMap, ModulePath, ModuleRecord};
pub use crate::core::services::{bundle, BundleService};
pub use crate::utils::errors::{KnitError, Result};
