//! Direct name matching against the canonical role table.

use rolebridge_entity::role::BASE_HIERARCHY;
use rolebridge_entity::{CanonicalRole, RoleTemplate};

/// Match the template's uppercased name against canonical role names.
///
/// An exact-equality pass over the whole table runs first, so a template
/// named exactly `PRODUCER` always selects PRODUCER rather than a longer
/// producer role. The containment pass then accepts the first role (in
/// table order) whose wire name contains the template name as a
/// substring. Multi-word catalog names use spaces and therefore never
/// collide with the underscore-joined wire names here; they fall through
/// to the semantic classifier.
///
/// The matched hierarchy is the larger of the template's weight and the
/// role's base hierarchy.
pub fn match_name(template: &RoleTemplate) -> Option<(CanonicalRole, u8)> {
    let name = template.name.trim().to_uppercase();
    if name.is_empty() {
        return None;
    }

    for (role, base) in BASE_HIERARCHY {
        if role.as_str() == name {
            return Some((*role, template.hierarchy.max(*base)));
        }
    }

    for (role, base) in BASE_HIERARCHY {
        if role.as_str().contains(&name) {
            return Some((*role, template.hierarchy.max(*base)));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(name: &str, hierarchy: u8) -> RoleTemplate {
        RoleTemplate {
            name: name.to_string(),
            display_name: name.to_string(),
            hierarchy,
            key_responsibilities: vec![],
        }
    }

    #[test]
    fn test_exact_name_beats_containment() {
        // PRODUCER is a substring of several longer role names; equality
        // must still win.
        let (role, hierarchy) = match_name(&template("PRODUCER", 10)).unwrap();
        assert_eq!(role, CanonicalRole::Producer);
        assert_eq!(hierarchy, 60);
    }

    #[test]
    fn test_partial_name_selects_first_containing_role() {
        let (role, _) = match_name(&template("OWNER", 50)).unwrap();
        assert_eq!(role, CanonicalRole::OrganizationOwner);
    }

    #[test]
    fn test_template_hierarchy_wins_when_higher() {
        let (role, hierarchy) = match_name(&template("editor", 75)).unwrap();
        assert_eq!(role, CanonicalRole::Editor);
        assert_eq!(hierarchy, 75);
    }

    #[test]
    fn test_spaced_multiword_name_does_not_match() {
        assert!(match_name(&template("CREATIVE DIRECTOR", 92)).is_none());
        assert!(match_name(&template("", 50)).is_none());
    }
}
