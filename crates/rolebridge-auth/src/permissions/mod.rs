//! Permission Resolver — derives a permission set from hierarchy and tier.

pub mod resolver;

pub use resolver::resolve_permissions;
