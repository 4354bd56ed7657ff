//! `map` — resolve a source role into an effective mapping.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use rolebridge_auth::RoleMapper;
use rolebridge_core::config::BridgeConfig;
use rolebridge_core::error::AppError;
use rolebridge_entity::{OrganizationTier, RoleTemplate, SourceRole};

use crate::output::{OutputFormat, print_item};

/// Arguments for the map command
#[derive(Debug, Args)]
pub struct MapArgs {
    /// Source-system role, e.g. ADMIN or MEMBER
    #[arg(short, long)]
    pub source_role: String,

    /// Organization tier (defaults to the configured tier)
    #[arg(short, long)]
    pub tier: Option<String>,

    /// Path to a role template JSON file
    #[arg(long)]
    pub template: Option<PathBuf>,
}

/// Execute the map command
pub fn execute(args: &MapArgs, config: &BridgeConfig, format: OutputFormat) -> Result<(), AppError> {
    let tier: OrganizationTier = args
        .tier
        .as_deref()
        .unwrap_or(&config.engine.default_tier)
        .parse()?;

    let template = match &args.template {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            Some(serde_json::from_str::<RoleTemplate>(&raw)?)
        }
        None => None,
    };

    let mapper = RoleMapper::with_config(config.cache.clone());
    let source = SourceRole::from(args.source_role.as_str());
    let mapping = mapper.map(&source, template.as_ref(), tier);

    print_item(&mapping, format);
    Ok(())
}
