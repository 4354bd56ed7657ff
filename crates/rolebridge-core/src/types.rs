//! Shared value types used across RoleBridge crates.

use serde::{Deserialize, Serialize};

/// Which resolution path produced an effective mapping.
///
/// Recorded on every mapping for observability; has no effect on the
/// mapping semantics themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStrategy {
    /// Basic lookup — no template was supplied.
    Basic,
    /// The template name matched a canonical role name directly.
    DirectMatch,
    /// A semantic keyword rule classified the template.
    Semantic,
    /// No rule matched; the hierarchy band fallback applied.
    HierarchyBand,
}

impl ResolutionStrategy {
    /// Return the strategy as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::DirectMatch => "direct_match",
            Self::Semantic => "semantic",
            Self::HierarchyBand => "hierarchy_band",
        }
    }
}

impl std::fmt::Display for ResolutionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
