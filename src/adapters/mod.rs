//! Infrastructure adapters for external systems.

pub mod aws_cli;
pub mod console;
pub mod dry_run;
pub mod platform;

pub use aws_cli::AwsCliWriter;
pub use console::{ConsoleReporter, ConsoleStream};
pub use dry_run::DryRunWriter;
pub use platform::PlatformClient;
