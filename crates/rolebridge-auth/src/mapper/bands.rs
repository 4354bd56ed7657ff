//! Hierarchy-band fallback mapping.
//!
//! Applied when neither direct nor semantic matching produced a role.
//! Band edges mirror the production catalog tuning.

use rolebridge_entity::CanonicalRole;

/// Bucket a template hierarchy into a fallback role.
///
/// Values above 100 are not rejected here (callers pre-validate) and
/// land in the top band.
pub fn band_role(hierarchy: u8) -> CanonicalRole {
    match hierarchy {
        90.. => CanonicalRole::Exec,
        80..90 => CanonicalRole::Manager,
        60..80 => CanonicalRole::Producer,
        40..60 => CanonicalRole::Editor,
        20..40 => CanonicalRole::ProductionAssistant,
        _ => CanonicalRole::Guest,
    }
}
