//! Implementation of the `credbridge propagate` command.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::adapters::{AwsCliWriter, ConsoleReporter, DryRunWriter, PlatformClient};
use crate::cli::output::{output, CommandOutput};
use crate::cli::types::PropagateArgs;
use crate::domain::models::{Config, EnvSnapshot};
use crate::services::{CredentialPropagator, PropagationOutcome, PropagationSettings};

#[derive(Debug, Serialize)]
pub struct PropagateOutput {
    pub dry_run: bool,
    #[serde(flatten)]
    pub outcome: PropagationOutcome,
}

impl CommandOutput for PropagateOutput {
    /// Empty: status lines are reported while propagating.
    fn to_human(&self) -> String {
        String::new()
    }

    fn to_json(&self) -> serde_json::Value {
        let mut value = serde_json::to_value(self).unwrap_or_default();
        if let Some(object) = value.as_object_mut() {
            object.insert("status".to_string(), self.outcome.status_lines().into());
        }
        value
    }
}

/// Apply command-line overrides on top of the loaded configuration.
pub fn apply_overrides(config: &mut Config, args: &PropagateArgs) {
    if let Some(profile) = &args.profile {
        config.aws_cli.profile = Some(profile.clone());
    }
    if args.strict {
        config.aws_cli.strict = true;
    }
}

pub async fn execute(args: PropagateArgs, mut config: Config, json_mode: bool) -> Result<()> {
    apply_overrides(&mut config, &args);

    let env = EnvSnapshot::capture();
    let settings = PropagationSettings::from_config(&config);
    let catalog = PlatformClient::with_config(&config.platform)
        .context("Failed to create platform client")?;

    let reporter = ConsoleReporter::for_cli(json_mode, args.dry_run);

    let outcome = if args.dry_run {
        let writer = DryRunWriter::new();
        CredentialPropagator::new(catalog, &writer, settings)
            .with_reporter(reporter)
            .propagate(&env)
            .await?
    } else {
        let writer = AwsCliWriter::with_config(&config.aws_cli);
        CredentialPropagator::new(catalog, writer, settings)
            .with_reporter(reporter)
            .propagate(&env)
            .await?
    };

    output(
        &PropagateOutput {
            dry_run: args.dry_run,
            outcome,
        },
        json_mode,
    );
    Ok(())
}
