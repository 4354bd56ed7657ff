//! Memoization cache configuration.

use serde::{Deserialize, Serialize};

/// Settings for the mapping memoization cache.
///
/// Entries never expire on their own; `max_entries` only bounds memory by
/// refusing new inserts once reached. Freshness after template-catalog
/// changes requires an explicit cache clear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether memoization is enabled at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Maximum number of cached mappings.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            max_entries: default_max_entries(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_entries() -> usize {
    10_000
}
