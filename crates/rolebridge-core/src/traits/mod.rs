//! Trait seams shared across RoleBridge crates.

pub mod observer;

pub use observer::{CountingObserver, MappingObserver, NoopObserver};
