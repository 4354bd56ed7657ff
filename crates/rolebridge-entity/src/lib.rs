//! # rolebridge-entity
//!
//! Domain value objects for RoleBridge. Every struct in this crate is a
//! plain value: role enums, templates, permission records, and mapping
//! results. All entities derive `Debug`, `Clone`, `Serialize`, and
//! `Deserialize`.

pub mod descriptor;
pub mod mapping;
pub mod navigation;
pub mod permission;
pub mod role;
pub mod template;
pub mod tier;
pub mod user;

pub use descriptor::SourceRole;
pub use mapping::EffectiveMapping;
pub use navigation::NavigationItem;
pub use permission::{Permission, PermissionSet};
pub use role::CanonicalRole;
pub use template::RoleTemplate;
pub use tier::OrganizationTier;
pub use user::UserAccount;
