//! Dashboard user account value object.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dashboard user as seen by the access control evaluator.
///
/// Only the role fields matter for access decisions; both are raw
/// strings because they come from documents written by two different
/// role taxonomies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Stable user identifier, when known.
    pub id: Option<Uuid>,
    /// Contact email, when known.
    pub email: Option<String>,
    /// Dashboard role string.
    pub role: Option<String>,
    /// Legacy member-role string, consulted when `role` is absent.
    pub member_role: Option<String>,
}

impl UserAccount {
    /// Convenience constructor for a user with only a role string.
    pub fn with_role(role: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            ..Self::default()
        }
    }

    /// The raw role string to resolve: `role`, falling back to `member_role`.
    pub fn raw_role(&self) -> Option<&str> {
        self.role.as_deref().or(self.member_role.as_deref())
    }
}
