use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::backup::BackupConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use crate::repair::{BackupPolicy, RepairConfig};

const LOCAL_CONFIG_PATH: &str = "zonefix.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/zonefix/config.toml";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure for zonefix
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Backup-before-modify behaviour
    #[serde(default)]
    pub backup: BackupConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. zonefix.toml in current directory
    /// 3. /etc/zonefix/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    ///
    /// Naming a backup directory implies that backups are enabled.
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if overrides.backup {
            self.backup.enabled = true;
        }
        if let Some(dir) = overrides.backup_dir {
            self.backup.directory = dir;
            self.backup.enabled = true;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backup.enabled && self.backup.directory.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Backup directory cannot be empty".to_string(),
            ));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}' (expected one of: {})",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Build the immutable value handed to the repair use cases
    pub fn repair_config(&self, inputs: Vec<String>) -> RepairConfig {
        let backup = self.backup.enabled.then(|| BackupPolicy {
            directory: PathBuf::from(&self.backup.directory),
        });
        RepairConfig::new(inputs, backup)
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|candidate| Path::new(candidate).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub backup: bool,
    pub backup_dir: Option<String>,
    pub log_level: Option<String>,
}
