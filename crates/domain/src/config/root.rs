use serde::{Deserialize, Serialize};
use std::path::Path;

use super::classifier::ClassifierConfig;
use super::errors::ConfigError;
use super::logging::{LoggingConfig, LOG_LEVELS};
use super::report::{ReportConfig, ReportFormat};

const LOCAL_CONFIG_PATH: &str = "arp-inspect.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/arp-inspect/config.toml";

/// Main configuration structure for arp-inspect
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// ARP line classification
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Report file location and format
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. arp-inspect.toml in current directory
    /// 3. /etc/arp-inspect/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(marker) = overrides.unresolved_marker {
            self.classifier.unresolved_marker = marker;
        }
        if let Some(output) = overrides.output_path {
            self.report.output_path = output;
        }
        if let Some(format) = overrides.report_format {
            self.report.format = format;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.classifier.unresolved_marker.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Unresolved marker cannot be empty".to_string(),
            ));
        }

        if self.report.output_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Report output path cannot be empty".to_string(),
            ));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub unresolved_marker: Option<String>,
    pub output_path: Option<String>,
    pub report_format: Option<ReportFormat>,
}
