//! credbridge CLI entry point.

use clap::Parser;

use credbridge::cli::{self, Cli, Commands};
use credbridge::infrastructure::logging::{verbosity_level, LoggerImpl};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let mut config = match cli::load_config(&cli) {
        Ok(config) => config,
        Err(err) => cli::handle_error(err, cli.json),
    };
    if let Some(level) = verbosity_level(cli.verbose) {
        config.logging.level = level.to_string();
    }

    let _logger = match LoggerImpl::init(&config.logging) {
        Ok(logger) => logger,
        Err(err) => cli::handle_error(err, cli.json),
    };

    let result = match cli.command() {
        Commands::Propagate(args) => cli::commands::propagate::execute(args, config, cli.json).await,
        Commands::Config => cli::commands::config::execute(config, cli.json),
    };

    if let Err(err) = result {
        cli::handle_error(err, cli.json);
    }
}
