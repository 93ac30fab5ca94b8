//! Configuration structures for the credential scrubber
//!
//! The defaults are the fixed target, variable and scheme the scrubber was
//! written for. A YAML file may override any of them.

use super::error::ScrubError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default file rewritten by the scrubber, relative to the working directory
pub const DEFAULT_TARGET: &str = "lib/db.ts";

/// Default environment variable the fallback expression reads
pub const DEFAULT_ENV_VAR: &str = "MONGODB_URI";

/// Default connection-string URI scheme of the hardcoded literal
pub const DEFAULT_SCHEME: &str = "mongodb+srv";

const ENV_VAR_NAME_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

fn default_target() -> PathBuf {
    PathBuf::from(DEFAULT_TARGET)
}

fn default_env_var() -> String {
    DEFAULT_ENV_VAR.to_string()
}

fn default_schemes() -> Vec<String> {
    vec![DEFAULT_SCHEME.to_string()]
}

/// Root configuration object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScrubConfig {
    /// File to rewrite in place
    #[serde(default = "default_target")]
    pub target: PathBuf,

    /// Environment variable accessed as `process.env.<env_var>`
    #[serde(default = "default_env_var")]
    pub env_var: String,

    /// URI schemes a fallback literal must start with to be stripped
    #[serde(default = "default_schemes")]
    pub schemes: Vec<String>,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            env_var: default_env_var(),
            schemes: default_schemes(),
        }
    }
}

impl ScrubConfig {
    /// Check that the configuration can produce a usable rule
    pub fn validate(&self) -> Result<(), ScrubError> {
        if self.target.as_os_str().is_empty() {
            return Err(ScrubError::ConfigError(
                "target must not be empty".to_string(),
            ));
        }

        let name_pattern = Regex::new(ENV_VAR_NAME_PATTERN)?;
        if !name_pattern.is_match(&self.env_var) {
            return Err(ScrubError::ConfigError(format!(
                "env_var '{}' is not a valid environment variable name",
                self.env_var
            )));
        }

        if self.schemes.is_empty() {
            return Err(ScrubError::ConfigError(
                "at least one scheme is required".to_string(),
            ));
        }

        if self.schemes.iter().any(|s| s.trim().is_empty()) {
            return Err(ScrubError::ConfigError(
                "schemes must not contain empty entries".to_string(),
            ));
        }

        Ok(())
    }
}
