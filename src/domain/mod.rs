//! Domain layer for credbridge
//!
//! This module contains the environment and credential models, errors and
//! the ports implemented by adapters.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{ConfigWriteError, PlatformError, PropagationError, PropagationResult};
