//! Navigation catalog entry.

use serde::Serialize;

use crate::permission::Permission;
use crate::role::CanonicalRole;

/// A capability-gated navigation surface.
///
/// Catalog entries are static declarations, so the string fields borrow
/// for the process lifetime. A user sees an item when they hold
/// `required_permission` and, if `required_role` is set, resolve to
/// exactly that role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationItem {
    /// Stable item identifier, e.g. `"billing"`.
    pub id: &'static str,
    /// Display label.
    pub text: &'static str,
    /// Route path.
    pub path: &'static str,
    /// Permission the user must hold.
    pub required_permission: Permission,
    /// Exact role requirement, if any.
    pub required_role: Option<CanonicalRole>,
}
