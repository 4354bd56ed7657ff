//! Mapping engine configuration.

use serde::{Deserialize, Serialize};

/// Settings applied when a caller does not specify them explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Tier assumed when no tier is given: `"BASIC"`, `"PRO"`, or `"ENTERPRISE"`.
    #[serde(default = "default_tier")]
    pub default_tier: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_tier: default_tier(),
        }
    }
}

fn default_tier() -> String {
    "ENTERPRISE".to_string()
}
