pub mod toml_config;

pub use toml_config::{GalleryConfig, StorageConfig, DEFAULT_DATA_FILE};

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "gallery-manager")]
#[command(about = "Manage a gallery of paintings and sculptures from the terminal")]
pub struct CliConfig {
    /// Collection file; overrides `storage.data_file` from the config file
    #[arg(long)]
    pub data_file: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges the config file (if any) with command line overrides.
    /// Precedence: `--data-file` > config file > built-in default.
    pub fn resolve(&self) -> Result<GalleryConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                GalleryConfig::from_file(path)?
            }
            None => GalleryConfig::default(),
        };

        if let Some(data_file) = &self.data_file {
            config.storage.data_file = data_file.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
