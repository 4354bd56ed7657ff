//! `roles` — print the canonical role table.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use rolebridge_auth::access::dashboard_level;
use rolebridge_core::error::AppError;
use rolebridge_entity::role::BASE_HIERARCHY;

use crate::output::{OutputFormat, print_list};

/// Arguments for the roles command
#[derive(Debug, Args)]
pub struct RolesArgs {
    /// Only show roles with a dashboard policy entry
    #[arg(long)]
    pub dashboard_only: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct RoleRow {
    role: &'static str,
    base_hierarchy: u8,
    dashboard_level: u8,
}

/// Execute the roles command
pub fn execute(args: &RolesArgs, format: OutputFormat) -> Result<(), AppError> {
    let rows: Vec<RoleRow> = BASE_HIERARCHY
        .iter()
        .map(|(role, base)| RoleRow {
            role: role.as_str(),
            base_hierarchy: *base,
            dashboard_level: dashboard_level(*role),
        })
        .filter(|row| !args.dashboard_only || row.dashboard_level > 0)
        .collect();
    print_list(&rows, format);
    Ok(())
}
