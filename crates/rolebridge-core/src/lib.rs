//! # rolebridge-core
//!
//! Core crate for RoleBridge. Contains the unified error system,
//! configuration schemas, shared value types, and the observability
//! trait used by the mapping engine.
//!
//! This crate has **no** internal dependencies on other RoleBridge crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
