//! RoleBridge CLI entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::Cli;

fn main() {
    let cli = Cli::parse();

    let config = rolebridge_core::config::BridgeConfig::load(&cli.env).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    if let Err(e) = cli.execute(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
