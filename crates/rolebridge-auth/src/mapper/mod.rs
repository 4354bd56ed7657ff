//! Role Mapper — resolves a source role descriptor into a canonical role.
//!
//! Resolution order, first match wins:
//! 1. Basic lookup when no template is supplied.
//! 2. Direct name match against the canonical role table.
//! 3. Semantic keyword classification of the template text.
//! 4. Hierarchy-band fallback.
//!
//! After selection the hierarchy is clamped to the tier cap and a
//! permission set is derived. Results are memoized until an explicit
//! cache clear.

pub mod bands;
pub mod direct;
pub mod semantic;

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use rolebridge_core::config::cache::CacheConfig;
use rolebridge_core::traits::{MappingObserver, NoopObserver};
use rolebridge_core::types::ResolutionStrategy;
use rolebridge_entity::{
    CanonicalRole, EffectiveMapping, OrganizationTier, RoleTemplate, SourceRole,
};

use crate::cache::MappingCache;
use crate::permissions::resolve_permissions;

/// The mapping engine.
///
/// Explicitly constructed and injectable — there is no process-wide
/// singleton. Each instance owns its cache, so tests can run isolated
/// mappers side by side.
pub struct RoleMapper {
    cache: MappingCache,
    observer: Arc<dyn MappingObserver>,
}

impl std::fmt::Debug for RoleMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleMapper")
            .field("cached", &self.cache.len())
            .finish()
    }
}

impl RoleMapper {
    /// Create a mapper with default cache settings and no observer.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Create a mapper with explicit cache settings.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            cache: MappingCache::new(config),
            observer: Arc::new(NoopObserver),
        }
    }

    /// Attach an observer for cache and resolution events.
    pub fn with_observer(mut self, observer: Arc<dyn MappingObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Resolve a source role (plus optional template) under a tier.
    ///
    /// Never fails: unrecognized input maps to GUEST with the tier's
    /// floor permissions.
    pub fn map(
        &self,
        source: &SourceRole,
        template: Option<&RoleTemplate>,
        tier: OrganizationTier,
    ) -> EffectiveMapping {
        let key = MappingCache::key(source, template, tier);
        if let Some(cached) = self.cache.get(&key) {
            self.observer.cache_hit(&key);
            debug!(%key, "mapping served from cache");
            return cached;
        }
        self.observer.cache_miss(&key);

        let (canonical_role, raw_hierarchy, is_custom_mapping, strategy) =
            resolve_role(source, template);
        let effective_hierarchy = tier.cap(raw_hierarchy);
        let permissions = resolve_permissions(canonical_role, raw_hierarchy, tier);

        self.observer.resolution(strategy, canonical_role.as_str());
        debug!(
            source = source.key(),
            role = %canonical_role,
            hierarchy = effective_hierarchy,
            strategy = %strategy,
            %tier,
            "resolved role mapping"
        );

        let mapping = EffectiveMapping {
            source_role: source.clone(),
            template: template.cloned(),
            tier,
            canonical_role,
            effective_hierarchy,
            permissions,
            is_custom_mapping,
            strategy,
            resolved_at: Utc::now(),
        };
        self.cache.insert(key, mapping.clone());
        mapping
    }

    /// Drop every memoized mapping.
    ///
    /// The only invalidation mechanism; callers needing freshness after a
    /// template-catalog change must call this explicitly.
    pub fn clear_cache(&self) {
        self.cache.clear();
        debug!("mapping cache cleared");
    }

    /// Number of memoized mappings.
    pub fn cached_mappings(&self) -> usize {
        self.cache.len()
    }
}

impl Default for RoleMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the canonical role, pre-cap hierarchy, custom flag, and strategy.
fn resolve_role(
    source: &SourceRole,
    template: Option<&RoleTemplate>,
) -> (CanonicalRole, u8, bool, ResolutionStrategy) {
    let Some(template) = template else {
        let (role, hierarchy) = basic_lookup(source);
        return (role, hierarchy, false, ResolutionStrategy::Basic);
    };

    if let Some((role, hierarchy)) = direct::match_name(template) {
        return (role, hierarchy, false, ResolutionStrategy::DirectMatch);
    }

    if let Some(role) = semantic::classify(template) {
        return (
            role,
            template.hierarchy,
            true,
            ResolutionStrategy::Semantic,
        );
    }

    (
        bands::band_role(template.hierarchy),
        template.hierarchy,
        true,
        ResolutionStrategy::HierarchyBand,
    )
}

/// Template-less lookup for the two known source roles.
fn basic_lookup(source: &SourceRole) -> (CanonicalRole, u8) {
    match source {
        SourceRole::Admin => (CanonicalRole::Admin, 100),
        SourceRole::Member => (CanonicalRole::Producer, 60),
        SourceRole::Other(_) => (CanonicalRole::Guest, 10),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolebridge_core::traits::CountingObserver;

    fn template(name: &str, display: &str, hierarchy: u8, resp: &[&str]) -> RoleTemplate {
        RoleTemplate {
            name: name.to_string(),
            display_name: display.to_string(),
            hierarchy,
            key_responsibilities: resp.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_basic_lookup() {
        let mapper = RoleMapper::new();
        let admin = mapper.map(&SourceRole::Admin, None, OrganizationTier::Enterprise);
        assert_eq!(admin.canonical_role, CanonicalRole::Admin);
        assert_eq!(admin.effective_hierarchy, 100);
        assert!(!admin.is_custom_mapping);

        let other = mapper.map(
            &SourceRole::Other("service-account".to_string()),
            None,
            OrganizationTier::Enterprise,
        );
        assert_eq!(other.canonical_role, CanonicalRole::Guest);
        assert_eq!(other.effective_hierarchy, 10);
    }

    #[test]
    fn test_direct_match_raises_hierarchy_to_base() {
        let mapper = RoleMapper::new();
        let t = template("EDITOR", "Editor", 20, &[]);
        let mapping = mapper.map(&SourceRole::Member, Some(&t), OrganizationTier::Enterprise);
        assert_eq!(mapping.canonical_role, CanonicalRole::Editor);
        // max(template 20, base 50)
        assert_eq!(mapping.effective_hierarchy, 50);
        assert!(!mapping.is_custom_mapping);
        assert_eq!(mapping.strategy, ResolutionStrategy::DirectMatch);
    }

    #[test]
    fn test_semantic_match_keeps_template_hierarchy() {
        let mapper = RoleMapper::new();
        let t = template(
            "FINISHING ARTIST",
            "Senior Colorist",
            45,
            &["final color grading"],
        );
        let mapping = mapper.map(&SourceRole::Member, Some(&t), OrganizationTier::Enterprise);
        assert_eq!(mapping.canonical_role, CanonicalRole::Colorist);
        assert_eq!(mapping.effective_hierarchy, 45);
        assert!(mapping.is_custom_mapping);
        assert_eq!(mapping.strategy, ResolutionStrategy::Semantic);
    }

    #[test]
    fn test_band_fallback() {
        let mapper = RoleMapper::new();
        let t = template("UNKNOWN", "Something Novel", 65, &["misc duties"]);
        let mapping = mapper.map(&SourceRole::Member, Some(&t), OrganizationTier::Enterprise);
        assert_eq!(mapping.canonical_role, CanonicalRole::Producer);
        assert_eq!(mapping.strategy, ResolutionStrategy::HierarchyBand);
        assert!(mapping.is_custom_mapping);
    }

    #[test]
    fn test_cache_hit_and_clear() {
        let observer = Arc::new(CountingObserver::new());
        let mapper = RoleMapper::new().with_observer(observer.clone());

        let first = mapper.map(&SourceRole::Member, None, OrganizationTier::Pro);
        let second = mapper.map(&SourceRole::Member, None, OrganizationTier::Pro);
        assert_eq!(first, second);
        assert_eq!(mapper.cached_mappings(), 1);

        let (hits, misses, resolutions) = observer.counts();
        assert_eq!((hits, misses, resolutions), (1, 1, 1));

        mapper.clear_cache();
        assert_eq!(mapper.cached_mappings(), 0);
        mapper.map(&SourceRole::Member, None, OrganizationTier::Pro);
        assert_eq!(observer.counts(), (1, 2, 2));
    }

    #[test]
    fn test_tier_caps_effective_hierarchy() {
        let mapper = RoleMapper::new();
        let mapping = mapper.map(&SourceRole::Admin, None, OrganizationTier::Basic);
        assert_eq!(mapping.canonical_role, CanonicalRole::Admin);
        assert_eq!(mapping.effective_hierarchy, 40);
    }
}
