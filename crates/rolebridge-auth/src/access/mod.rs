//! Access Control Evaluator — dashboard navigation visibility.
//!
//! Works on the dashboard role taxonomy with a static policy table,
//! deliberately independent of the mapper's dynamically computed
//! effective hierarchy. The static `dashboard_level` and the mapper's
//! `effective_hierarchy` are two separate notions and are never merged.

pub mod evaluator;
pub mod navigation;
pub mod policies;

pub use evaluator::AccessControlEvaluator;
pub use navigation::NAVIGATION_CATALOG;
pub use policies::{RolePolicy, dashboard_level, permissions_for, policy_for};
