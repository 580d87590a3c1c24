pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::serializer::UnknownTypePolicy;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::{LoggingConfig, ZooConfig, DEFAULT_DATA_DIR, DEFAULT_FILE_NAME};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "zoo")]
#[command(about = "Builds a small zoo, saves it as JSON and loads it back")]
pub struct CliConfig {
    /// Directory holding the zoo data file
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Name of the zoo data file
    #[arg(long)]
    pub file: Option<String>,

    /// Optional TOML configuration; flags given here take precedence
    #[arg(short, long)]
    pub config: Option<String>,

    /// What to do with records of an unknown type when loading
    #[arg(long, value_enum)]
    pub on_unknown_type: Option<UnknownTypePolicy>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Reads the TOML file if one was given and applies the flags on top of it.
    pub fn resolve(&self) -> Result<ZooConfig> {
        let mut config = match &self.config {
            Some(path) => ZooConfig::from_file(path)?,
            None => ZooConfig::default(),
        };

        if let Some(data_dir) = &self.data_dir {
            config.storage.data_dir = data_dir.clone();
        }
        if let Some(file) = &self.file {
            config.storage.file_name = Some(file.clone());
        }
        if let Some(policy) = self.on_unknown_type {
            config.load.get_or_insert_with(Default::default).on_unknown_type = Some(policy);
        }
        if self.verbose || self.json_logs {
            let logging = config.logging.get_or_insert_with(LoggingConfig::default);
            if self.verbose {
                logging.verbose = Some(true);
            }
            if self.json_logs {
                logging.json = Some(true);
            }
        }

        Ok(config)
    }
}

/// Flags alone, without any TOML file.
#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn data_dir(&self) -> &str {
        self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR)
    }

    fn file_name(&self) -> &str {
        self.file.as_deref().unwrap_or(DEFAULT_FILE_NAME)
    }

    fn unknown_type_policy(&self) -> UnknownTypePolicy {
        self.on_unknown_type.unwrap_or_default()
    }
}
