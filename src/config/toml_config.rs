use crate::core::serializer::UnknownTypePolicy;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, ZooError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_FILE_NAME: &str = "zoo_data.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZooConfig {
    pub storage: StorageConfig,
    pub load: Option<LoadConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: String,
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadConfig {
    pub on_unknown_type: Option<UnknownTypePolicy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl Default for ZooConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                data_dir: DEFAULT_DATA_DIR.to_string(),
                file_name: None,
            },
            load: None,
            logging: None,
        }
    }
}

impl ZooConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ZooError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ZooError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ZooError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_path("storage.data_dir", &self.storage.data_dir)?;

        if let Some(file_name) = &self.storage.file_name {
            crate::utils::validation::validate_non_empty_string("storage.file_name", file_name)?;
        }
        crate::utils::validation::validate_file_extensions(
            "storage.file_name",
            &[self.file_name().to_string()],
            &["json"],
        )?;

        Ok(())
    }

    pub fn file_name(&self) -> &str {
        self.storage.file_name.as_deref().unwrap_or(DEFAULT_FILE_NAME)
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn unknown_type_policy(&self) -> UnknownTypePolicy {
        self.load
            .as_ref()
            .and_then(|l| l.on_unknown_type)
            .unwrap_or_default()
    }
}

impl ConfigProvider for ZooConfig {
    fn data_dir(&self) -> &str {
        &self.storage.data_dir
    }

    fn file_name(&self) -> &str {
        self.file_name()
    }

    fn unknown_type_policy(&self) -> UnknownTypePolicy {
        self.unknown_type_policy()
    }
}

impl Validate for ZooConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
