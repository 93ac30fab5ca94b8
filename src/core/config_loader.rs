//! Configuration loader for credential-scrubber
//!
//! Nothing is discovered implicitly: without an explicit config file and
//! without overrides the loader returns the built-in defaults.

use super::config::ScrubConfig;
use super::error::ScrubError;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration load options
#[derive(Debug, Clone, Default)]
pub struct ConfigLoadOptions {
    /// Explicit YAML config file
    pub config_file: Option<PathBuf>,

    /// Target path override from the CLI (highest priority)
    pub target: Option<PathBuf>,
}

/// Configuration file loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with priority
    ///
    /// Priority (high to low):
    /// 1. CLI overrides
    /// 2. Explicit config file
    /// 3. Default values
    pub fn load(options: ConfigLoadOptions) -> Result<ScrubConfig, ScrubError> {
        let mut config = match &options.config_file {
            Some(path) => Self::load_config_file(path)?,
            None => ScrubConfig::default(),
        };

        if let Some(target) = options.target {
            config.target = target;
        }

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a YAML file
    fn load_config_file(file_path: &Path) -> Result<ScrubConfig, ScrubError> {
        let content = fs::read_to_string(file_path).map_err(|e| {
            ScrubError::ConfigError(format!(
                "Failed to read config file {}: {}",
                file_path.display(),
                e
            ))
        })?;

        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(ScrubConfig::default());
        }

        serde_yaml::from_str(&content).map_err(|e| {
            ScrubError::ConfigError(format!("Failed to parse YAML config: {}", e))
        })
    }
}
