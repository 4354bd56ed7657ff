//! Permission records: the mapper's derived permission set and the
//! dashboard navigation permission enum.

use serde::{Deserialize, Serialize};

/// Fixed-shape permission record derived from an effective hierarchy and
/// an organization tier.
///
/// Never stored independently — always recomputed from its inputs. The
/// booleans are monotonic non-decreasing in hierarchy for a fixed tier,
/// except where the Basic tier strips a permission outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    /// Manage team membership and roles.
    pub can_manage_team: bool,
    /// Create and administer projects.
    pub can_manage_projects: bool,
    /// See budgets, rates, and invoices.
    pub can_view_financials: bool,
    /// Edit content.
    pub can_edit_content: bool,
    /// Approve content for release.
    pub can_approve_content: bool,
    /// Access reporting surfaces.
    pub can_access_reports: bool,
    /// Manage organization settings.
    pub can_manage_settings: bool,
    /// The (tier-capped) hierarchy these booleans were derived from.
    pub hierarchy_level: u8,
}

impl PermissionSet {
    /// The empty permission set at a given hierarchy level.
    pub fn none(hierarchy_level: u8) -> Self {
        Self {
            can_manage_team: false,
            can_manage_projects: false,
            can_view_financials: false,
            can_edit_content: false,
            can_approve_content: false,
            can_access_reports: false,
            can_manage_settings: false,
            hierarchy_level,
        }
    }

    /// The granted booleans in declaration order, for monotonicity checks
    /// and tabular output.
    pub fn flags(&self) -> [bool; 7] {
        [
            self.can_manage_team,
            self.can_manage_projects,
            self.can_view_financials,
            self.can_edit_content,
            self.can_approve_content,
            self.can_access_reports,
            self.can_manage_settings,
        ]
    }
}

/// A dashboard navigation permission.
///
/// These gate navigation surfaces in the Access Control Evaluator's
/// static policy table; they are independent of [`PermissionSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// See the dashboard landing page.
    ViewDashboard,
    /// Browse projects.
    ViewProjects,
    /// Administer projects.
    ManageProjects,
    /// See the team roster.
    ViewTeam,
    /// Administer team membership.
    ManageTeam,
    /// See licensing state.
    ViewLicensing,
    /// Access reports.
    ViewReports,
    /// See financial data.
    ViewFinancials,
    /// Manage billing and payment methods.
    ManageBilling,
    /// Manage organization settings.
    ManageSettings,
    /// Administer the organization itself.
    ManageOrganization,
}

impl Permission {
    /// Return the permission as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewDashboard => "view_dashboard",
            Self::ViewProjects => "view_projects",
            Self::ManageProjects => "manage_projects",
            Self::ViewTeam => "view_team",
            Self::ManageTeam => "manage_team",
            Self::ViewLicensing => "view_licensing",
            Self::ViewReports => "view_reports",
            Self::ViewFinancials => "view_financials",
            Self::ManageBilling => "manage_billing",
            Self::ManageSettings => "manage_settings",
            Self::ManageOrganization => "manage_organization",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
