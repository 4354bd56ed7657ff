//! # rolebridge-auth
//!
//! The RoleBridge engine: role mapping, permission resolution, access
//! control evaluation, and assignment validation.
//!
//! ## Modules
//!
//! - `mapper` — resolves source roles + templates into canonical roles
//! - `permissions` — derives permission sets from hierarchy and tier
//! - `access` — dashboard navigation access evaluation
//! - `cache` — memoization cache for resolved mappings
//! - `validate` — tier-cap business-rule checks for role assignments
//!
//! Everything here is synchronous, in-memory, and infallible: invalid or
//! unrecognized input degrades to a safe default rather than erroring.

pub mod access;
pub mod cache;
pub mod mapper;
pub mod permissions;
pub mod validate;

pub use access::AccessControlEvaluator;
pub use cache::MappingCache;
pub use mapper::RoleMapper;
pub use permissions::resolve_permissions;
pub use validate::{RoleAssignmentCheck, validate_role_assignment};
