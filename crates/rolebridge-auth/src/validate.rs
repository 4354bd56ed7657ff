//! Tier-cap validation for proposed role assignments.
//!
//! A rejected assignment is a business-rule outcome the caller shows to
//! the user, not a fault, so it is a typed result instead of an error.

use serde::{Deserialize, Serialize};

use rolebridge_entity::{CanonicalRole, OrganizationTier};

/// Outcome of checking a proposed role assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignmentCheck {
    /// Whether the assignment is allowed.
    pub is_valid: bool,
    /// Human-readable rejection reason when invalid.
    pub reason: Option<String>,
}

impl RoleAssignmentCheck {
    fn valid() -> Self {
        Self {
            is_valid: true,
            reason: None,
        }
    }

    fn invalid(reason: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// Check whether a role may be assigned at a hierarchy under a tier.
///
/// Invalid when the requested hierarchy is above 100 or above the
/// tier's cap.
pub fn validate_role_assignment(
    role: CanonicalRole,
    requested_hierarchy: u8,
    tier: OrganizationTier,
) -> RoleAssignmentCheck {
    if requested_hierarchy > 100 {
        return RoleAssignmentCheck::invalid(format!(
            "Hierarchy {requested_hierarchy} is out of range; expected 0-100"
        ));
    }
    let cap = tier.hierarchy_cap();
    if requested_hierarchy > cap {
        return RoleAssignmentCheck::invalid(format!(
            "Role '{role}' at hierarchy {requested_hierarchy} exceeds the {tier} tier cap of {cap}"
        ));
    }
    RoleAssignmentCheck::valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_cap_is_valid() {
        let check =
            validate_role_assignment(CanonicalRole::Producer, 60, OrganizationTier::Pro);
        assert!(check.is_valid);
        assert!(check.reason.is_none());
    }

    #[test]
    fn test_exceeding_cap_is_rejected_with_reason() {
        let check =
            validate_role_assignment(CanonicalRole::Exec, 95, OrganizationTier::Basic);
        assert!(!check.is_valid);
        let reason = check.reason.unwrap();
        assert!(reason.contains("BASIC"));
        assert!(reason.contains("40"));
    }

    #[test]
    fn test_out_of_range_hierarchy() {
        let check =
            validate_role_assignment(CanonicalRole::Admin, 120, OrganizationTier::Enterprise);
        assert!(!check.is_valid);
        assert!(check.reason.unwrap().contains("out of range"));
    }
}
