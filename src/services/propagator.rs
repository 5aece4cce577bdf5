//! Credential propagation.
//!
//! Decides whether the AWS CLI needs configuring, resolves an access key
//! pair from either the platform's credential listing or a scan of the
//! environment, and hands each value to a [`ConfigWriter`].
//!
//! Two resolution paths exist, selected by whether the platform token
//! variable is set:
//!
//! - **Authenticated**: list credentials, take the first record whose type
//!   contains the provider marker and whose `{PREFIX}_USERNAME` /
//!   `{PREFIX}_PASSWORD` variables are both non-empty, apply it and stop.
//! - **Heuristic**: every variable containing the heuristic marker and
//!   ending in `_USERNAME` or `_PASSWORD` is written as the access key id or
//!   secret respectively. No early exit, so the last match per suffix wins.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::domain::errors::PropagationResult;
use crate::domain::models::{AwsConfigKey, Config, CredentialPair, CredentialRecord, EnvSnapshot};
use crate::domain::ports::{ConfigWriter, CredentialCatalog, StatusReporter};

const USERNAME_SUFFIX: &str = "_USERNAME";
const PASSWORD_SUFFIX: &str = "_PASSWORD";

/// Log target for the user-facing status lines.
pub const STATUS_TARGET: &str = "credbridge::status";

/// Names and markers the propagator matches against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropagationSettings {
    pub token_var: String,
    pub provider_marker: String,
    pub heuristic_marker: String,
    pub access_key_var: String,
    pub secret_key_var: String,
    /// Surface failed writes instead of logging them
    pub strict: bool,
}

impl PropagationSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            token_var: config.platform.token_var.clone(),
            provider_marker: config.platform.provider_marker.clone(),
            heuristic_marker: config.heuristic.marker.clone(),
            access_key_var: config.target.access_key_var.clone(),
            secret_key_var: config.target.secret_key_var.clone(),
            strict: config.aws_cli.strict,
        }
    }
}

impl Default for PropagationSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Which source the credentials were resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPath {
    Authenticated,
    Heuristic,
}

/// One `set` issued against the configuration store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedSetting {
    /// Credential prefix (authenticated) or variable name (heuristic)
    pub source: String,
    pub key: AwsConfigKey,
    /// False when the writer reported a failure that was ignored
    pub written: bool,
}

/// Result of a propagation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PropagationOutcome {
    /// A target variable was already set; nothing was done.
    AlreadyConfigured,
    /// At least one value was handed to the writer.
    Applied {
        path: ResolutionPath,
        settings: Vec<AppliedSetting>,
    },
    /// Authenticated path found no usable credential.
    NotFound,
    /// Heuristic path found no matching variable.
    NothingMatched,
}

impl PropagationOutcome {
    /// Human-readable status lines for this outcome.
    ///
    /// Silent outcomes produce no lines.
    pub fn status_lines(&self) -> Vec<String> {
        match self {
            Self::AlreadyConfigured | Self::NothingMatched => Vec::new(),
            Self::NotFound => vec![not_found_message()],
            Self::Applied { path, settings } => match path {
                ResolutionPath::Authenticated => {
                    let mut sources: Vec<&str> = settings.iter().map(|s| s.source.as_str()).collect();
                    sources.dedup();
                    sources.into_iter().map(using_credential_message).collect()
                }
                ResolutionPath::Heuristic => settings
                    .iter()
                    .map(|s| using_variable_message(&s.source, s.key))
                    .collect(),
            },
        }
    }
}

fn not_found_message() -> String {
    "No AWS credential found on the platform".to_string()
}

fn using_credential_message(prefix: &str) -> String {
    format!("Using AWS credential {prefix}")
}

fn using_variable_message(name: &str, key: AwsConfigKey) -> String {
    format!("Using {name} for {key}")
}

/// Returns the first provider-typed record whose prefixed username and
/// password are both non-empty in `env`, with its prefix.
///
/// Records are examined in the given order; incomplete candidates are
/// skipped.
pub fn find_platform_credential(
    records: &[CredentialRecord],
    env: &EnvSnapshot,
    provider_marker: &str,
) -> Option<(String, CredentialPair)> {
    records
        .iter()
        .filter(|record| record.is_provider(provider_marker))
        .find_map(|record| {
            let prefix = record.env_prefix();
            let username = env.get_or_empty(&format!("{prefix}{USERNAME_SUFFIX}"));
            let password = env.get_or_empty(&format!("{prefix}{PASSWORD_SUFFIX}"));
            match CredentialPair::new(username, password) {
                Some(pair) => Some((prefix, pair)),
                None => {
                    debug!(credential = %prefix, "credential has no username/password in environment, skipping");
                    None
                }
            }
        })
}

/// Classify a variable name for the heuristic scan.
pub fn heuristic_key(name: &str, marker: &str) -> Option<AwsConfigKey> {
    if !name.contains(marker) {
        return None;
    }
    if name.ends_with(USERNAME_SUFFIX) {
        Some(AwsConfigKey::AccessKeyId)
    } else if name.ends_with(PASSWORD_SUFFIX) {
        Some(AwsConfigKey::SecretAccessKey)
    } else {
        None
    }
}

/// Every heuristic match in `env`, in snapshot order.
pub fn heuristic_matches<'a>(
    env: &'a EnvSnapshot,
    marker: &str,
) -> Vec<(&'a str, AwsConfigKey, &'a str)> {
    env.iter()
        .filter_map(|(name, value)| heuristic_key(name, marker).map(|key| (name, key, value)))
        .collect()
}

/// Resolves AWS credentials and applies them through a [`ConfigWriter`].
///
/// Status lines are logged under [`STATUS_TARGET`] and, when a
/// [`StatusReporter`] is attached, reported before the writes they announce.
pub struct CredentialPropagator<C, W> {
    catalog: C,
    writer: W,
    settings: PropagationSettings,
    reporter: Option<Box<dyn StatusReporter>>,
}

impl<C, W> CredentialPropagator<C, W>
where
    C: CredentialCatalog,
    W: ConfigWriter,
{
    pub fn new(catalog: C, writer: W, settings: PropagationSettings) -> Self {
        Self {
            catalog,
            writer,
            settings,
            reporter: None,
        }
    }

    #[must_use]
    pub fn with_reporter(mut self, reporter: impl StatusReporter + 'static) -> Self {
        self.reporter = Some(Box::new(reporter));
        self
    }

    pub fn settings(&self) -> &PropagationSettings {
        &self.settings
    }

    /// Whether either target variable already carries a value.
    pub fn is_configured(&self, env: &EnvSnapshot) -> bool {
        env.is_set(&self.settings.access_key_var) || env.is_set(&self.settings.secret_key_var)
    }

    /// Path that a run against `env` would take.
    pub fn resolution_path(&self, env: &EnvSnapshot) -> ResolutionPath {
        if env.is_set(&self.settings.token_var) {
            ResolutionPath::Authenticated
        } else {
            ResolutionPath::Heuristic
        }
    }

    /// Run propagation once against `env`.
    ///
    /// Only a failed credential listing (or, in strict mode, a failed
    /// write) is returned as an error. Every other condition is reported
    /// through the outcome.
    #[instrument(skip_all)]
    pub async fn propagate(&self, env: &EnvSnapshot) -> PropagationResult<PropagationOutcome> {
        if self.is_configured(env) {
            debug!(
                access_key_var = %self.settings.access_key_var,
                secret_key_var = %self.settings.secret_key_var,
                "AWS credentials already present in environment, skipping"
            );
            return Ok(PropagationOutcome::AlreadyConfigured);
        }

        match env.get_non_empty(&self.settings.token_var) {
            Some(token) => self.propagate_from_platform(env, token).await,
            None => self.propagate_from_environment(env).await,
        }
    }

    async fn propagate_from_platform(
        &self,
        env: &EnvSnapshot,
        token: &str,
    ) -> PropagationResult<PropagationOutcome> {
        let records = self.catalog.list_credentials(token).await?;
        debug!(count = records.len(), "listed platform credentials");

        let Some((prefix, pair)) =
            find_platform_credential(&records, env, &self.settings.provider_marker)
        else {
            self.status(&not_found_message());
            return Ok(PropagationOutcome::NotFound);
        };

        self.status(&using_credential_message(&prefix));
        let settings = vec![
            self.write(&prefix, AwsConfigKey::AccessKeyId, pair.access_key_id())
                .await?,
            self.write(&prefix, AwsConfigKey::SecretAccessKey, pair.secret_access_key())
                .await?,
        ];

        Ok(PropagationOutcome::Applied {
            path: ResolutionPath::Authenticated,
            settings,
        })
    }

    async fn propagate_from_environment(
        &self,
        env: &EnvSnapshot,
    ) -> PropagationResult<PropagationOutcome> {
        let mut settings = Vec::new();
        for (name, key, value) in heuristic_matches(env, &self.settings.heuristic_marker) {
            self.status(&using_variable_message(name, key));
            settings.push(self.write(name, key, value).await?);
        }

        if settings.is_empty() {
            debug!("no AWS-looking variables in environment");
            return Ok(PropagationOutcome::NothingMatched);
        }

        Ok(PropagationOutcome::Applied {
            path: ResolutionPath::Heuristic,
            settings,
        })
    }

    fn status(&self, line: &str) {
        info!(target: STATUS_TARGET, "{line}");
        if let Some(reporter) = &self.reporter {
            reporter.report(line);
        }
    }

    async fn write(
        &self,
        source: &str,
        key: AwsConfigKey,
        value: &str,
    ) -> PropagationResult<AppliedSetting> {
        let written = match self.writer.set(key, value).await {
            Ok(()) => true,
            Err(err) if self.settings.strict => return Err(err.into()),
            Err(err) => {
                warn!(%key, error = %err, "ignoring failed AWS CLI configuration write");
                false
            }
        };

        Ok(AppliedSetting {
            source: source.to_string(),
            key,
            written,
        })
    }
}
