//! Memoization cache for resolved mappings.
//!
//! Keyed by `(source role, template identity or "basic", tier)`. Entries
//! never expire on their own; staleness after template-catalog changes is
//! accepted and resolved only by an explicit [`MappingCache::clear`].

use dashmap::DashMap;

use rolebridge_core::config::cache::CacheConfig;
use rolebridge_entity::{EffectiveMapping, OrganizationTier, RoleTemplate, SourceRole};

/// Concurrent in-memory store of resolved mappings.
#[derive(Debug, Default)]
pub struct MappingCache {
    entries: DashMap<String, EffectiveMapping>,
    config: CacheConfig,
}

impl MappingCache {
    /// Create a cache with the given configuration.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: DashMap::new(),
            config,
        }
    }

    /// Build the composite cache key for a mapping request.
    pub fn key(
        source: &SourceRole,
        template: Option<&RoleTemplate>,
        tier: OrganizationTier,
    ) -> String {
        let template_id = template.map(|t| t.name.as_str()).unwrap_or("basic");
        format!("{}:{}:{}", source.key(), template_id, tier)
    }

    /// Look up a cached mapping.
    pub fn get(&self, key: &str) -> Option<EffectiveMapping> {
        if !self.config.enabled {
            return None;
        }
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Store a resolved mapping. Silently skipped when the cache is
    /// disabled or full.
    pub fn insert(&self, key: String, mapping: EffectiveMapping) {
        if !self.config.enabled || self.entries.len() >= self.config.max_entries {
            return;
        }
        self.entries.insert(key, mapping);
    }

    /// Drop every cached mapping.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of cached mappings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no mappings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_uses_template_identity_or_basic() {
        let template = RoleTemplate {
            name: "CREATIVE DIRECTOR".to_string(),
            display_name: "Creative Director".to_string(),
            hierarchy: 92,
            key_responsibilities: vec![],
        };
        assert_eq!(
            MappingCache::key(
                &SourceRole::Member,
                Some(&template),
                OrganizationTier::Enterprise
            ),
            "MEMBER:CREATIVE DIRECTOR:ENTERPRISE"
        );
        assert_eq!(
            MappingCache::key(&SourceRole::Admin, None, OrganizationTier::Basic),
            "ADMIN:basic:BASIC"
        );
    }

    #[test]
    fn test_disabled_cache_stores_nothing() {
        let cache = MappingCache::new(CacheConfig {
            enabled: false,
            max_entries: 10,
        });
        let mapping = crate::mapper::RoleMapper::new().map(
            &SourceRole::Member,
            None,
            OrganizationTier::Pro,
        );
        cache.insert("k".to_string(), mapping);
        assert!(cache.is_empty());
        assert!(cache.get("k").is_none());
    }
}
