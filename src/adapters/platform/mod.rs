//! Analytics platform adapter.
//!
//! Implements [`CredentialCatalog`](crate::domain::ports::CredentialCatalog)
//! over the platform's REST API.

pub mod client;

pub use client::PlatformClient;
