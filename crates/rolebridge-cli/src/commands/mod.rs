//! CLI command definitions and dispatch.

pub mod map;
pub mod nav;
pub mod roles;
pub mod validate;

use clap::{Parser, Subcommand};

use rolebridge_core::config::BridgeConfig;
use rolebridge_core::error::AppError;

use crate::output::OutputFormat;

/// RoleBridge — role mapping and access inspection
#[derive(Debug, Parser)]
#[command(name = "rolebridge", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment to load (config/<env>.toml)
    #[arg(short, long, default_value = "default")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the canonical role table
    Roles(roles::RolesArgs),
    /// Resolve a source role (plus optional template) into a mapping
    Map(map::MapArgs),
    /// List the navigation items a role string can access
    Nav(nav::NavArgs),
    /// Check a proposed role assignment against a tier cap
    Validate(validate::ValidateArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, config: &BridgeConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Roles(args) => roles::execute(args, self.format),
            Commands::Map(args) => map::execute(args, config, self.format),
            Commands::Nav(args) => nav::execute(args, self.format),
            Commands::Validate(args) => validate::execute(args, self.format),
        }
    }
}
