use crate::core::{models::*, services::BundleService};
use crate::utils::{ConfigLoader, Logger};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "knit")]
#[command(version, about = "knit - follow relative imports and stitch ES modules into one file")]
pub struct Cli {
    /// Log every module as it is visited
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Bundle an entry module and its local imports into a single file
    Bundle {
        /// Entry module (falls back to `entry` in knit.config.json)
        entry: Option<PathBuf>,
        /// Bundle file to write
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print string literals with single quotes
        #[arg(long)]
        single_quote: bool,
    },
    /// Print the modules reachable from an entry, in bundle order
    Graph {
        /// Entry module (falls back to `entry` in knit.config.json)
        entry: Option<PathBuf>,
    },
}

pub struct CliHandler;

impl CliHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self) -> Result<()> {
        let cli = Cli::parse();
        Logger::init(cli.verbose);

        match cli.command {
            Commands::Bundle {
                entry,
                output,
                single_quote,
            } => self.handle_bundle_command(entry.as_deref(), output.as_deref(), single_quote),
            Commands::Graph { entry } => self.handle_graph_command(entry.as_deref()),
        }
    }

    fn handle_bundle_command(
        &self,
        entry: Option<&Path>,
        output: Option<&Path>,
        single_quote: bool,
    ) -> Result<()> {
        let options = Self::load_options(entry, output, single_quote)?;

        BundleService::for_options(&options)
            .bundle(&options)
            .with_context(|| format!("failed to bundle {}", options.entry.display()))?;

        Ok(())
    }

    fn handle_graph_command(&self, entry: Option<&Path>) -> Result<()> {
        let options = Self::load_options(entry, None, false)?;
        let modules = BundleService::for_options(&options).graph(&options)?;

        Logger::info(&format!("🧶 {} modules, in bundle order:", modules.len()));
        for (path, record) in modules.emission_order() {
            Logger::info(&format!("  • {}", path));
            for dependency in &record.dependencies {
                Logger::info(&format!("      ↳ {}", dependency));
            }
        }

        Ok(())
    }

    fn load_options(entry: Option<&Path>, output: Option<&Path>, single_quote: bool) -> Result<BundleOptions> {
        let cwd = std::env::current_dir().context("cannot read the current directory")?;
        let file_config = ConfigLoader::load_from_file(&cwd)?;

        Ok(ConfigLoader::merge_with_cli(file_config, entry, output, single_quote)?)
    }
}

impl Default for CliHandler {
    fn default() -> Self {
        Self::new()
    }
}
