//! The result record produced by the role mapper.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rolebridge_core::types::ResolutionStrategy;

use crate::descriptor::SourceRole;
use crate::permission::PermissionSet;
use crate::role::CanonicalRole;
use crate::template::RoleTemplate;
use crate::tier::OrganizationTier;

/// A fully resolved role mapping.
///
/// Computed fresh per request and memoized by
/// `(source role, template identity, tier)` until an explicit cache
/// clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectiveMapping {
    /// The licensing-side role that was mapped.
    pub source_role: SourceRole,
    /// The template used for resolution, if any.
    pub template: Option<RoleTemplate>,
    /// The tier the mapping was computed under.
    pub tier: OrganizationTier,
    /// The resolved canonical role.
    pub canonical_role: CanonicalRole,
    /// Tier-capped effective hierarchy.
    pub effective_hierarchy: u8,
    /// Permissions derived from the effective hierarchy and tier.
    pub permissions: PermissionSet,
    /// True when a template required semantic or band resolution.
    pub is_custom_mapping: bool,
    /// Which resolution path produced this mapping.
    pub strategy: ResolutionStrategy,
    /// When the mapping was resolved (cache hits keep the original time).
    pub resolved_at: DateTime<Utc>,
}
