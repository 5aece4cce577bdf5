use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for credbridge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Analytics platform API settings
    #[serde(default)]
    pub platform: PlatformConfig,

    /// Variables whose presence means the AWS CLI is already configured
    #[serde(default)]
    pub target: TargetConfig,

    /// Environment scan used when no platform token is available
    #[serde(default)]
    pub heuristic: HeuristicConfig,

    /// AWS CLI invocation settings
    #[serde(default)]
    pub aws_cli: AwsCliConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Analytics platform API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PlatformConfig {
    /// Base URL of the platform REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variable holding the API token
    #[serde(default = "default_token_var")]
    pub token_var: String,

    /// Substring a credential's type must contain to be considered
    #[serde(default = "default_provider_marker")]
    pub provider_marker: String,

    /// Request timeout; `None` leaves the HTTP client default in place
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://api.civisanalytics.com".to_string()
}

fn default_token_var() -> String {
    "CIVIS_API_KEY".to_string()
}

fn default_provider_marker() -> String {
    "Amazon Web Services".to_string()
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_var: default_token_var(),
            provider_marker: default_provider_marker(),
            timeout_secs: None,
        }
    }
}

/// Target variable configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TargetConfig {
    #[serde(default = "default_access_key_var")]
    pub access_key_var: String,

    #[serde(default = "default_secret_key_var")]
    pub secret_key_var: String,
}

fn default_access_key_var() -> String {
    "AWS_ACCESS_KEY_ID".to_string()
}

fn default_secret_key_var() -> String {
    "AWS_SECRET_ACCESS_KEY".to_string()
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            access_key_var: default_access_key_var(),
            secret_key_var: default_secret_key_var(),
        }
    }
}

/// Heuristic scan configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HeuristicConfig {
    /// Substring a variable name must contain to be considered
    #[serde(default = "default_heuristic_marker")]
    pub marker: String,
}

fn default_heuristic_marker() -> String {
    "AWS".to_string()
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            marker: default_heuristic_marker(),
        }
    }
}

/// AWS CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AwsCliConfig {
    /// Path to the aws executable (defaults to "aws" in PATH)
    #[serde(default = "default_aws_program")]
    pub program: String,

    /// Named profile passed as `--profile`
    #[serde(default)]
    pub profile: Option<String>,

    /// Fail the run when a `configure set` invocation fails
    #[serde(default)]
    pub strict: bool,
}

fn default_aws_program() -> String {
    "aws".to_string()
}

impl Default for AwsCliConfig {
    fn default() -> Self {
        Self {
            program: default_aws_program(),
            profile: None,
            strict: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format (json, pretty)
    #[serde(default)]
    pub format: LogFormat,

    /// Directory for log files (optional, if None logs only to stderr)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation policy
    #[serde(default)]
    pub rotation: RotationPolicy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    Daily,
    Hourly,
    #[default]
    Never,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            log_dir: None,
            rotation: RotationPolicy::default(),
        }
    }
}
