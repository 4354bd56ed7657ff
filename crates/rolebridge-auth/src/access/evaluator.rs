//! The evaluator answering "can this user see this surface".

use tracing::debug;

use rolebridge_entity::{CanonicalRole, NavigationItem, Permission, UserAccount};

use super::navigation::NAVIGATION_CATALOG;
use super::policies;

/// Evaluates dashboard access against the static policy table.
///
/// No method here errors; unrecognized roles resolve to MEMBER and
/// unlisted roles carry the empty permission set.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessControlEvaluator;

impl AccessControlEvaluator {
    /// Create an evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Resolve a user to a dashboard role.
    ///
    /// Reads `role`, falling back to `member_role`; uppercases; returns
    /// the canonical role if the string already names one, otherwise
    /// applies the legacy alias table. Absent or unrecognized input
    /// resolves to MEMBER.
    pub fn user_role(&self, user: Option<&UserAccount>) -> CanonicalRole {
        let Some(raw) = user.and_then(UserAccount::raw_role) else {
            return CanonicalRole::Member;
        };
        let upper = raw.trim().to_uppercase();

        if let Ok(role) = upper.parse::<CanonicalRole>() {
            return role;
        }

        // Legacy aliases from the pre-bridge dashboard.
        match upper.as_str() {
            "OWNER" => CanonicalRole::OrganizationOwner,
            "ENTERPRISE_ADMIN" => CanonicalRole::Admin,
            other => {
                debug!(role = other, "unrecognized role string, defaulting to MEMBER");
                CanonicalRole::Member
            }
        }
    }

    /// Whether the user's resolved role grants a permission.
    pub fn has_permission(&self, user: Option<&UserAccount>, permission: Permission) -> bool {
        let role = self.user_role(user);
        policies::permissions_for(role).contains(&permission)
    }

    /// Whether the user resolves to exactly this role.
    pub fn has_role(&self, user: Option<&UserAccount>, role: CanonicalRole) -> bool {
        self.user_role(user) == role
    }

    /// Whether the user's static dashboard level meets a threshold.
    ///
    /// Compares the policy table's `dashboard_level`, not the mapper's
    /// effective hierarchy.
    pub fn has_minimum_role_level(&self, user: Option<&UserAccount>, level: u8) -> bool {
        policies::dashboard_level(self.user_role(user)) >= level
    }

    /// The navigation items visible to this user, in catalog order.
    pub fn accessible_navigation_items(&self, user: Option<&UserAccount>) -> Vec<NavigationItem> {
        NAVIGATION_CATALOG
            .iter()
            .filter(|item| {
                self.has_permission(user, item.required_permission)
                    && item
                        .required_role
                        .is_none_or(|required| self.has_role(user, required))
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_defaults_and_aliases() {
        let eval = AccessControlEvaluator::new();
        assert_eq!(eval.user_role(None), CanonicalRole::Member);

        let owner = UserAccount::with_role("OWNER");
        assert_eq!(eval.user_role(Some(&owner)), CanonicalRole::OrganizationOwner);

        let enterprise = UserAccount::with_role("enterprise_admin");
        assert_eq!(eval.user_role(Some(&enterprise)), CanonicalRole::Admin);

        let bogus = UserAccount::with_role("bogus");
        assert_eq!(eval.user_role(Some(&bogus)), CanonicalRole::Member);
    }

    #[test]
    fn test_member_role_fallback_field() {
        let eval = AccessControlEvaluator::new();
        let user = UserAccount {
            member_role: Some("ACCOUNTING".to_string()),
            ..UserAccount::default()
        };
        assert_eq!(eval.user_role(Some(&user)), CanonicalRole::Accounting);
    }

    #[test]
    fn test_exact_canonical_role_passes_through() {
        let eval = AccessControlEvaluator::new();
        let producer = UserAccount::with_role("producer");
        assert_eq!(eval.user_role(Some(&producer)), CanonicalRole::Producer);
    }

    #[test]
    fn test_minimum_role_level_uses_static_level() {
        let eval = AccessControlEvaluator::new();
        let admin = UserAccount::with_role("ADMIN");
        assert!(eval.has_minimum_role_level(Some(&admin), 90));
        assert!(!eval.has_minimum_role_level(Some(&admin), 91));

        // Gaffer is canonical but has no dashboard policy entry.
        let gaffer = UserAccount::with_role("GAFFER");
        assert!(!eval.has_minimum_role_level(Some(&gaffer), 1));
    }

    #[test]
    fn test_navigation_filtering_preserves_order() {
        let eval = AccessControlEvaluator::new();
        let member = UserAccount::with_role("MEMBER");
        let items = eval.accessible_navigation_items(Some(&member));
        let ids: Vec<&str> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, ["dashboard", "projects", "team", "licensing"]);
    }

    #[test]
    fn test_owner_sees_billing_and_admin() {
        let eval = AccessControlEvaluator::new();
        let owner = UserAccount::with_role("ORGANIZATION_OWNER");
        let ids: Vec<&str> = eval
            .accessible_navigation_items(Some(&owner))
            .iter()
            .map(|item| item.id)
            .collect();
        assert!(ids.contains(&"billing"));
        assert!(ids.contains(&"admin"));

        // Admin holds the permissions but not the exact role.
        let admin = UserAccount::with_role("ADMIN");
        let ids: Vec<&str> = eval
            .accessible_navigation_items(Some(&admin))
            .iter()
            .map(|item| item.id)
            .collect();
        assert!(!ids.contains(&"billing"));
        assert!(!ids.contains(&"admin"));
    }
}
