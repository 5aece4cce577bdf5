//! AWS CLI configuration writer
//!
//! Shells out to `aws configure set <key> <value>` for each setting. The
//! child's stderr is inherited so the CLI reports its own errors directly;
//! its stdout is captured, since ours may be carrying a JSON document.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument};

use crate::domain::errors::ConfigWriteError;
use crate::domain::models::{AwsCliConfig, AwsConfigKey};
use crate::domain::ports::ConfigWriter;

/// Writes settings through the locally installed AWS CLI.
#[derive(Debug, Clone)]
pub struct AwsCliWriter {
    program: String,
    profile: Option<String>,
}

impl AwsCliWriter {
    /// Writer using `aws` from PATH and the default profile.
    pub fn new() -> Self {
        Self::with_config(&AwsCliConfig::default())
    }

    pub fn with_config(config: &AwsCliConfig) -> Self {
        Self {
            program: config.program.clone(),
            profile: config.profile.clone(),
        }
    }

    /// Arguments for a single `configure set` invocation.
    pub fn args(&self, key: AwsConfigKey, value: &str) -> Vec<String> {
        let mut args = vec![
            "configure".to_string(),
            "set".to_string(),
            key.as_str().to_string(),
            value.to_string(),
        ];
        if let Some(profile) = &self.profile {
            args.push("--profile".to_string());
            args.push(profile.clone());
        }
        args
    }

    /// Run one `configure set` and return what the child wrote to stdout.
    pub async fn run(&self, key: AwsConfigKey, value: &str) -> Result<String, ConfigWriteError> {
        let output = Command::new(&self.program)
            .args(self.args(key, value))
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|e| ConfigWriteError::Spawn {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ConfigWriteError::Exited {
                program: self.program.clone(),
                key,
                code: output.status.to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for AwsCliWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigWriter for AwsCliWriter {
    #[instrument(skip(self, value), fields(program = %self.program))]
    async fn set(&self, key: AwsConfigKey, value: &str) -> Result<(), ConfigWriteError> {
        let stdout = self.run(key, value).await?;
        debug!(%key, stdout_bytes = stdout.len(), "AWS CLI setting written");
        Ok(())
    }
}
