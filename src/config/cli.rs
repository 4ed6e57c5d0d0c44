use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Flags for the world listing binary.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "traveller-worldgen")]
#[command(about = "Generate Classic Traveller worlds and print their profiles")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number of worlds to generate
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// CSV file of tech level modifiers
    #[arg(long)]
    pub tech_table: Option<String>,

    /// Print worlds as JSON lines instead of text rows
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Reads the config file (when given) and applies command-line overrides.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = load_config(self.config.as_deref())?;
        if let Some(seed) = self.seed {
            config.generator.seed = Some(seed);
        }
        if let Some(path) = &self.tech_table {
            config.generator.tech_table = Some(path.clone());
        }
        Ok(config)
    }
}

/// An explicitly named config file must exist; no file means defaults.
pub fn load_config(path: Option<&str>) -> Result<TomlConfig> {
    match path {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)
        }
        None => Ok(TomlConfig::default()),
    }
}
