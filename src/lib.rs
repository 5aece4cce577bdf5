//! credbridge - AWS credential propagation for platform jobs
//!
//! Jobs running on the analytics platform receive their credentials as
//! `{NAME}_USERNAME` / `{NAME}_PASSWORD` environment variables. credbridge
//! finds the AWS ones and writes them into the local AWS CLI configuration
//! with `aws configure set`, unless AWS credentials are already present.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): Environment and credential models, errors, ports
//! - **Service Layer** (`services`): The propagator
//! - **Adapters** (`adapters`): Platform HTTP client, AWS CLI and dry-run writers
//! - **Infrastructure Layer** (`infrastructure`): Configuration and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use credbridge::adapters::{AwsCliWriter, PlatformClient};
//! use credbridge::domain::models::EnvSnapshot;
//! use credbridge::services::{CredentialPropagator, PropagationSettings};
//!
//! let propagator = CredentialPropagator::new(
//!     PlatformClient::new("https://api.civisanalytics.com"),
//!     AwsCliWriter::new(),
//!     PropagationSettings::default(),
//! );
//! let outcome = propagator.propagate(&EnvSnapshot::capture()).await?;
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{AwsConfigKey, Config, CredentialPair, CredentialRecord, EnvSnapshot};
pub use domain::ports::{ConfigWriter, CredentialCatalog, StatusReporter};
pub use domain::{ConfigWriteError, PlatformError, PropagationError};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{CredentialPropagator, PropagationOutcome, PropagationSettings};
