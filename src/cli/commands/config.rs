//! Implementation of the `credbridge config` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ConfigOutput {
    pub config: Config,
}

impl CommandOutput for ConfigOutput {
    fn to_human(&self) -> String {
        serde_yaml::to_string(&self.config)
            .unwrap_or_default()
            .trim_end()
            .to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(config: Config, json_mode: bool) -> Result<()> {
    output(&ConfigOutput { config }, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_output_is_yaml() {
        let output = ConfigOutput {
            config: Config::default(),
        };
        let human = output.to_human();

        assert!(human.contains("api.civisanalytics.com"));
        assert!(human.contains("program: aws"));
        let parsed: Config = serde_yaml::from_str(&human).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_json_output_is_transparent() {
        let output = ConfigOutput {
            config: Config::default(),
        };

        assert_eq!(output.to_json()["target"]["access_key_var"], "AWS_ACCESS_KEY_ID");
    }
}
