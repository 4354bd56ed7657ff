//! Static navigation catalog.
//!
//! Declaration order here is the order items are presented in; the
//! evaluator filters but never reorders.

use rolebridge_entity::{CanonicalRole, NavigationItem, Permission};

/// Every navigation surface the dashboard can show.
pub const NAVIGATION_CATALOG: &[NavigationItem] = &[
    NavigationItem {
        id: "dashboard",
        text: "Dashboard",
        path: "/dashboard",
        required_permission: Permission::ViewDashboard,
        required_role: None,
    },
    NavigationItem {
        id: "projects",
        text: "Projects",
        path: "/projects",
        required_permission: Permission::ViewProjects,
        required_role: None,
    },
    NavigationItem {
        id: "team",
        text: "Team",
        path: "/team",
        required_permission: Permission::ViewTeam,
        required_role: None,
    },
    NavigationItem {
        id: "licensing",
        text: "Licensing",
        path: "/licensing",
        required_permission: Permission::ViewLicensing,
        required_role: None,
    },
    NavigationItem {
        id: "reports",
        text: "Reports",
        path: "/reports",
        required_permission: Permission::ViewReports,
        required_role: None,
    },
    NavigationItem {
        id: "financials",
        text: "Financials",
        path: "/financials",
        required_permission: Permission::ViewFinancials,
        required_role: None,
    },
    NavigationItem {
        id: "settings",
        text: "Settings",
        path: "/settings",
        required_permission: Permission::ManageSettings,
        required_role: None,
    },
    NavigationItem {
        id: "billing",
        text: "Billing",
        path: "/billing",
        required_permission: Permission::ManageBilling,
        required_role: Some(CanonicalRole::OrganizationOwner),
    },
    NavigationItem {
        id: "admin",
        text: "Admin",
        path: "/admin",
        required_permission: Permission::ManageOrganization,
        required_role: Some(CanonicalRole::OrganizationOwner),
    },
];
