//! `nav` — list accessible navigation items for a role string.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use rolebridge_auth::AccessControlEvaluator;
use rolebridge_core::error::AppError;
use rolebridge_entity::UserAccount;

use crate::output::{OutputFormat, print_list};

/// Arguments for the nav command
#[derive(Debug, Args)]
pub struct NavArgs {
    /// Raw dashboard role string, as stored on the user document
    #[arg(short, long)]
    pub role: String,
}

#[derive(Debug, Serialize, Tabled)]
struct NavRow {
    id: &'static str,
    text: &'static str,
    path: &'static str,
}

/// Execute the nav command
pub fn execute(args: &NavArgs, format: OutputFormat) -> Result<(), AppError> {
    let evaluator = AccessControlEvaluator::new();
    let user = UserAccount::with_role(&args.role);
    let resolved = evaluator.user_role(Some(&user));
    tracing::debug!(input = %args.role, role = %resolved, "resolved navigation role");

    let rows: Vec<NavRow> = evaluator
        .accessible_navigation_items(Some(&user))
        .iter()
        .map(|item| NavRow {
            id: item.id,
            text: item.text,
            path: item.path,
        })
        .collect();
    print_list(&rows, format);
    Ok(())
}
