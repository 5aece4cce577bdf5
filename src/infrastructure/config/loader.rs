use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;
use crate::infrastructure::logging::parse_log_level;

/// Project config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "credbridge.yaml";
/// Optional local overrides, looked up next to [`CONFIG_FILE`].
pub const LOCAL_CONFIG_FILE: &str = "credbridge.local.yaml";
/// Prefix for environment overrides, nested keys split on `__`.
pub const ENV_PREFIX: &str = "CREDBRIDGE_";

/// Configuration error types
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Platform base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("Invalid {field}: must be a non-empty environment variable name")]
    InvalidVariableName { field: &'static str },

    #[error("Invalid {field}: marker cannot be empty")]
    EmptyMarker { field: &'static str },

    #[error("AWS CLI program cannot be empty")]
    EmptyProgram,

    #[error("Invalid timeout_secs: 0. Omit it to use the client default")]
    ZeroTimeout,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. credbridge.yaml (project config)
    /// 3. credbridge.local.yaml (local overrides, optional)
    /// 4. Environment variables (CREDBRIDGE_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(CONFIG_FILE))
            .merge(Yaml::file(LOCAL_CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honouring env overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context(format!("Failed to load config from {}", path.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.platform.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        let variables = [
            ("platform.token_var", &config.platform.token_var),
            ("target.access_key_var", &config.target.access_key_var),
            ("target.secret_key_var", &config.target.secret_key_var),
        ];
        for (field, name) in variables {
            if !is_valid_variable_name(name) {
                return Err(ConfigError::InvalidVariableName { field });
            }
        }

        if config.platform.provider_marker.is_empty() {
            return Err(ConfigError::EmptyMarker {
                field: "platform.provider_marker",
            });
        }
        if config.heuristic.marker.is_empty() {
            return Err(ConfigError::EmptyMarker {
                field: "heuristic.marker",
            });
        }

        if config.aws_cli.program.trim().is_empty() {
            return Err(ConfigError::EmptyProgram);
        }

        if config.platform.timeout_secs == Some(0) {
            return Err(ConfigError::ZeroTimeout);
        }

        if parse_log_level(&config.logging.level).is_err() {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}

fn is_valid_variable_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('=') && !name.contains('\0')
}
