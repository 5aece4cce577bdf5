//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON console output on stderr
//! - Optional rotated JSON log files
//! - Secret scrubbing for user-facing error text

pub mod logger;
pub mod secret_scrubbing;

pub use logger::{parse_log_level, verbosity_level, LoggerImpl};
pub use secret_scrubbing::SecretScrubber;

pub use crate::domain::models::mask_secret;
