use crate::core::models::BundleOptions;
use crate::utils::{KnitError, Logger, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "knit.config.json";
pub const DEFAULT_OUTPUT: &str = "bundle.js";

/// Configuration file format (knit.config.json)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct KnitConfig {
    /// Entry module (e.g., "src/main.js")
    pub entry: Option<String>,

    /// Bundle file to write (default: "bundle.js")
    pub output: Option<String>,

    /// Emit single-quoted strings (default: false)
    pub single_quote: Option<bool>,
}

/// Config loader that supports a config file with CLI override
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load knit.config.json from `root` if it exists
    pub fn load_from_file(root: &Path) -> Result<Option<KnitConfig>> {
        let config_path = root.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            Logger::debug(&format!("No {} found, using defaults", CONFIG_FILE_NAME));
            return Ok(None);
        }

        Logger::debug(&format!("Loading config from {}", config_path.display()));

        let content = std::fs::read_to_string(&config_path)?;
        let config: KnitConfig = serde_json::from_str(&content).map_err(|e| {
            KnitError::config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
        })?;

        Ok(Some(config))
    }

    /// Merge file config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(
        file_config: Option<KnitConfig>,
        entry: Option<&Path>,
        output: Option<&Path>,
        single_quote: bool,
    ) -> Result<BundleOptions> {
        let base = file_config.unwrap_or_default();

        let entry = entry
            .map(Path::to_path_buf)
            .or_else(|| base.entry.map(PathBuf::from))
            .ok_or_else(|| {
                KnitError::config(format!(
                    "no entry module given on the command line or in {}",
                    CONFIG_FILE_NAME
                ))
            })?;

        let output = output
            .map(Path::to_path_buf)
            .or_else(|| base.output.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        Ok(BundleOptions {
            entry,
            output,
            single_quote: single_quote || base.single_quote.unwrap_or(false),
        })
    }
}
