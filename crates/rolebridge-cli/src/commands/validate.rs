//! `validate` — check a proposed role assignment against a tier cap.

use clap::Args;

use rolebridge_auth::validate_role_assignment;
use rolebridge_core::error::AppError;
use rolebridge_entity::{CanonicalRole, OrganizationTier};

use crate::output::{OutputFormat, print_item};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Canonical role to assign
    #[arg(short, long)]
    pub role: String,

    /// Requested hierarchy (0-100)
    #[arg(long)]
    pub hierarchy: u8,

    /// Organization tier
    #[arg(short, long)]
    pub tier: String,
}

/// Execute the validate command
pub fn execute(args: &ValidateArgs, format: OutputFormat) -> Result<(), AppError> {
    let role: CanonicalRole = args.role.parse()?;
    let tier: OrganizationTier = args.tier.parse()?;
    let check = validate_role_assignment(role, args.hierarchy, tier);
    print_item(&check, format);
    Ok(())
}
