//! Port trait definitions (Hexagonal Architecture)
//!
//! - CredentialCatalog: platform "list credentials" operation
//! - ConfigWriter: AWS CLI configuration store
//! - StatusReporter: user-facing status lines
//!
//! Adapters in `crate::adapters` implement these; tests substitute in-memory fakes.

pub mod config_writer;
pub mod credential_catalog;
pub mod status_reporter;

pub use config_writer::ConfigWriter;
pub use credential_catalog::CredentialCatalog;
pub use status_reporter::StatusReporter;
