//! Analytics platform HTTP client.
//!
//! Wraps the platform REST API's credential listing. The token is supplied
//! per call since it comes from the environment snapshot rather than
//! configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::{debug, instrument};

use crate::domain::errors::PlatformError;
use crate::domain::models::{CredentialRecord, PlatformConfig};
use crate::domain::ports::CredentialCatalog;

/// HTTP client for the platform REST API.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    http: Client,
    base_url: String,
}

impl PlatformClient {
    /// Create a client for `base_url` with the HTTP client's default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client from configuration.
    ///
    /// A request timeout is applied only when `timeout_secs` is set.
    pub fn with_config(config: &PlatformConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn credentials_url(&self) -> String {
        format!("{}/credentials", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CredentialCatalog for PlatformClient {
    #[instrument(skip_all, fields(base_url = %self.base_url))]
    async fn list_credentials(&self, token: &str) -> Result<Vec<CredentialRecord>, PlatformError> {
        let resp = self
            .http
            .get(self.credentials_url())
            .bearer_auth(token)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PlatformError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let records: Vec<CredentialRecord> = resp
            .json()
            .await
            .map_err(|e| PlatformError::Decode(e.to_string()))?;
        debug!(count = records.len(), "received credential listing");
        Ok(records)
    }
}
