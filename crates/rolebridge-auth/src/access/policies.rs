//! Static dashboard role policy table.

use rolebridge_entity::{CanonicalRole, Permission};

/// A dashboard role's static level and permission grants.
#[derive(Debug, Clone, Copy)]
pub struct RolePolicy {
    /// The role this policy applies to.
    pub role: CanonicalRole,
    /// Static dashboard hierarchy level. Independent of the mapper's
    /// effective hierarchy.
    pub dashboard_level: u8,
    /// Granted navigation permissions.
    pub permissions: &'static [Permission],
}

const ALL_PERMISSIONS: &[Permission] = &[
    Permission::ViewDashboard,
    Permission::ViewProjects,
    Permission::ManageProjects,
    Permission::ViewTeam,
    Permission::ManageTeam,
    Permission::ViewLicensing,
    Permission::ViewReports,
    Permission::ViewFinancials,
    Permission::ManageBilling,
    Permission::ManageSettings,
    Permission::ManageOrganization,
];

/// The policy table. Roles not listed here resolve to the empty
/// permission set and level 0 — access control fails closed.
pub const ROLE_POLICIES: &[RolePolicy] = &[
    RolePolicy {
        role: CanonicalRole::OrganizationOwner,
        dashboard_level: 100,
        permissions: ALL_PERMISSIONS,
    },
    RolePolicy {
        role: CanonicalRole::Admin,
        dashboard_level: 90,
        permissions: ALL_PERMISSIONS,
    },
    RolePolicy {
        role: CanonicalRole::OrgAdmin,
        dashboard_level: 80,
        permissions: &[
            Permission::ViewDashboard,
            Permission::ViewProjects,
            Permission::ManageProjects,
            Permission::ViewTeam,
            Permission::ManageTeam,
            Permission::ViewLicensing,
            Permission::ViewReports,
            Permission::ManageSettings,
        ],
    },
    RolePolicy {
        role: CanonicalRole::Accounting,
        dashboard_level: 60,
        permissions: &[
            Permission::ViewDashboard,
            Permission::ViewLicensing,
            Permission::ViewReports,
            Permission::ViewFinancials,
        ],
    },
    RolePolicy {
        role: CanonicalRole::Producer,
        dashboard_level: 50,
        permissions: &[
            Permission::ViewDashboard,
            Permission::ViewProjects,
            Permission::ManageProjects,
            Permission::ViewTeam,
            Permission::ViewReports,
        ],
    },
    RolePolicy {
        role: CanonicalRole::Editor,
        dashboard_level: 40,
        permissions: &[Permission::ViewDashboard, Permission::ViewProjects],
    },
    RolePolicy {
        role: CanonicalRole::Member,
        dashboard_level: 30,
        permissions: &[
            Permission::ViewDashboard,
            Permission::ViewProjects,
            Permission::ViewTeam,
            Permission::ViewLicensing,
        ],
    },
    RolePolicy {
        role: CanonicalRole::Guest,
        dashboard_level: 10,
        permissions: &[Permission::ViewDashboard],
    },
];

/// Look up the policy for a role, if it has one.
pub fn policy_for(role: CanonicalRole) -> Option<&'static RolePolicy> {
    ROLE_POLICIES.iter().find(|policy| policy.role == role)
}

/// The permissions granted to a role; empty for unlisted roles.
pub fn permissions_for(role: CanonicalRole) -> &'static [Permission] {
    policy_for(role).map(|policy| policy.permissions).unwrap_or(&[])
}

/// The static dashboard level of a role; 0 for unlisted roles.
pub fn dashboard_level(role: CanonicalRole) -> u8 {
    policy_for(role).map(|policy| policy.dashboard_level).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlisted_roles_fail_closed() {
        assert!(permissions_for(CanonicalRole::Gaffer).is_empty());
        assert_eq!(dashboard_level(CanonicalRole::Gaffer), 0);
    }

    #[test]
    fn test_owner_outranks_admin() {
        assert!(
            dashboard_level(CanonicalRole::OrganizationOwner)
                > dashboard_level(CanonicalRole::Admin)
        );
    }

    #[test]
    fn test_member_lacks_billing_permissions() {
        let member = permissions_for(CanonicalRole::Member);
        assert!(!member.contains(&Permission::ManageBilling));
        assert!(!member.contains(&Permission::ManageOrganization));
    }
}
