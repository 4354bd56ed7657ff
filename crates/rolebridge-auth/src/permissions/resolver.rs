//! Threshold-based permission derivation.

use tracing::trace;

use rolebridge_entity::{CanonicalRole, OrganizationTier, PermissionSet};

/// Hierarchy required to manage team membership.
pub const TEAM_THRESHOLD: u8 = 80;
/// Hierarchy required to manage projects.
pub const PROJECTS_THRESHOLD: u8 = 60;
/// Hierarchy required for financial visibility (Pro and Enterprise only).
pub const FINANCIALS_THRESHOLD: u8 = 70;
/// Hierarchy required to edit content.
pub const EDIT_THRESHOLD: u8 = 25;
/// Hierarchy required to approve content.
pub const APPROVE_THRESHOLD: u8 = 40;
/// Hierarchy required for report access.
pub const REPORTS_THRESHOLD: u8 = 30;
/// Hierarchy required to manage settings.
pub const SETTINGS_THRESHOLD: u8 = 90;

/// Derive the permission set for a role at a hierarchy under a tier.
///
/// The hierarchy is clamped to the tier cap before any threshold is
/// evaluated, then the Basic tier strips financial visibility and
/// settings management outright. Booleans are monotonic non-decreasing
/// in hierarchy for a fixed tier.
pub fn resolve_permissions(
    role: CanonicalRole,
    hierarchy: u8,
    tier: OrganizationTier,
) -> PermissionSet {
    let h = tier.cap(hierarchy);
    let paid = matches!(tier, OrganizationTier::Pro | OrganizationTier::Enterprise);

    let mut permissions = PermissionSet {
        can_manage_team: h >= TEAM_THRESHOLD,
        can_manage_projects: h >= PROJECTS_THRESHOLD,
        can_view_financials: h >= FINANCIALS_THRESHOLD && paid,
        can_edit_content: h >= EDIT_THRESHOLD,
        can_approve_content: h >= APPROVE_THRESHOLD,
        can_access_reports: h >= REPORTS_THRESHOLD,
        can_manage_settings: h >= SETTINGS_THRESHOLD,
        hierarchy_level: h,
    };

    // Basic never grants these, at any hierarchy.
    if tier == OrganizationTier::Basic {
        permissions.can_view_financials = false;
        permissions.can_manage_settings = false;
    }

    trace!(role = %role, hierarchy = h, %tier, "derived permission set");
    permissions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enterprise_thresholds() {
        let p = resolve_permissions(CanonicalRole::Admin, 100, OrganizationTier::Enterprise);
        assert!(p.flags().iter().all(|flag| *flag));
        assert_eq!(p.hierarchy_level, 100);

        let p = resolve_permissions(CanonicalRole::Producer, 60, OrganizationTier::Enterprise);
        assert!(!p.can_manage_team);
        assert!(p.can_manage_projects);
        assert!(!p.can_view_financials);
        assert!(p.can_approve_content);
    }

    #[test]
    fn test_basic_strips_financials_and_settings() {
        for hierarchy in [0u8, 40, 70, 100] {
            let p = resolve_permissions(CanonicalRole::Exec, hierarchy, OrganizationTier::Basic);
            assert!(!p.can_view_financials);
            assert!(!p.can_manage_settings);
            assert!(p.hierarchy_level <= 40);
        }
    }

    #[test]
    fn test_pro_cap_limits_team_management() {
        let p = resolve_permissions(CanonicalRole::Admin, 100, OrganizationTier::Pro);
        assert_eq!(p.hierarchy_level, 80);
        assert!(p.can_manage_team);
        assert!(p.can_view_financials);
        // Settings needs 90, unreachable under the Pro cap.
        assert!(!p.can_manage_settings);
    }

    #[test]
    fn test_monotonic_in_hierarchy() {
        for tier in [
            OrganizationTier::Basic,
            OrganizationTier::Pro,
            OrganizationTier::Enterprise,
        ] {
            let mut previous = resolve_permissions(CanonicalRole::Guest, 0, tier);
            for hierarchy in 1..=100u8 {
                let current = resolve_permissions(CanonicalRole::Guest, hierarchy, tier);
                for (lower, higher) in previous.flags().into_iter().zip(current.flags()) {
                    assert!(!lower || higher, "permission lost at hierarchy {hierarchy}");
                }
                previous = current;
            }
        }
    }
}
