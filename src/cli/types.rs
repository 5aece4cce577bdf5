//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "credbridge")]
#[command(about = "Configure the AWS CLI from platform-managed credentials", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to run (defaults to `propagate`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to ./credbridge.yaml plus ./credbridge.local.yaml)
    #[arg(short, long, global = true, env = "CREDBRIDGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The selected command, falling back to a plain `propagate`.
    pub fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Propagate(PropagateArgs::default()))
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve AWS credentials and write them to the AWS CLI configuration
    Propagate(PropagateArgs),

    /// Print the effective configuration
    Config,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PropagateArgs {
    /// Resolve credentials but do not run the AWS CLI
    #[arg(long)]
    pub dry_run: bool,

    /// Write into this named AWS CLI profile
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Fail when an AWS CLI invocation fails
    #[arg(long)]
    pub strict: bool,
}
