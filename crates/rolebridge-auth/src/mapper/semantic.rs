//! Semantic keyword classification of role templates.
//!
//! An explicit, ordered list of rules evaluated in sequence; the first
//! rule that produces a role wins. The keyword tables were tuned against
//! the production template catalog; rule order is load-bearing.

use rolebridge_entity::{CanonicalRole, RoleTemplate};

/// Everything a rule is allowed to look at.
struct RuleInput<'a> {
    /// Lowercased display name + joined responsibilities.
    text: &'a str,
    /// The template's raw hierarchy weight.
    hierarchy: u8,
}

/// A single ordered classification rule.
struct Rule {
    /// Rule identifier, for logs and audits.
    name: &'static str,
    apply: fn(&RuleInput<'_>) -> Option<CanonicalRole>,
}

/// Terms that route a template into the management branch.
const MANAGEMENT_TERMS: &[&str] = &["manager", "management", "head of", "chief"];

/// Sub-keyword dispatch inside the management branch, in order.
const MANAGEMENT_SUBROLES: &[(&str, CanonicalRole)] = &[
    ("exec", CanonicalRole::Exec),
    ("post", CanonicalRole::PostSupervisor),
    ("production", CanonicalRole::ProductionManager),
    ("supervis", CanonicalRole::SupervisingProducer),
];

/// Producer-family keywords, most specific first.
const PRODUCER_KEYWORDS: &[(&str, CanonicalRole)] = &[
    ("line producer", CanonicalRole::LineProducer),
    ("associate producer", CanonicalRole::AssociateProducer),
    ("producer", CanonicalRole::Producer),
];

/// Technical department keywords, in order.
const TECHNICAL_KEYWORDS: &[(&str, CanonicalRole)] = &[
    ("camera", CanonicalRole::CameraOperator),
    ("cinematograph", CanonicalRole::Cinematographer),
    ("sound", CanonicalRole::SoundDesigner),
    ("audio", CanonicalRole::AudioEngineer),
    ("light", CanonicalRole::LightingTechnician),
    ("gaffer", CanonicalRole::Gaffer),
    ("color", CanonicalRole::Colorist),
    ("colour", CanonicalRole::Colorist),
    ("graphic", CanonicalRole::GraphicsArtist),
    ("vfx", CanonicalRole::VfxArtist),
    ("visual effects", CanonicalRole::VfxArtist),
];

/// The ordered rule list. First match wins; declaration order breaks ties.
const RULES: &[Rule] = &[
    Rule {
        name: "management",
        apply: |input| {
            let managerial = input.hierarchy >= 80
                || MANAGEMENT_TERMS.iter().any(|term| input.text.contains(term));
            if !managerial {
                return None;
            }
            for (keyword, role) in MANAGEMENT_SUBROLES {
                if input.text.contains(keyword) {
                    return Some(*role);
                }
            }
            Some(CanonicalRole::Manager)
        },
    },
    Rule {
        name: "director",
        apply: |input| input.text.contains("director").then_some(CanonicalRole::Director),
    },
    Rule {
        name: "assistant_editor",
        apply: |input| {
            input
                .text
                .contains("assistant editor")
                .then_some(CanonicalRole::AssistantEditor)
        },
    },
    Rule {
        name: "editor",
        apply: |input| input.text.contains("editor").then_some(CanonicalRole::Editor),
    },
    Rule {
        name: "producer_family",
        apply: |input| {
            PRODUCER_KEYWORDS
                .iter()
                .find(|(keyword, _)| input.text.contains(keyword))
                .map(|(_, role)| *role)
        },
    },
    Rule {
        name: "technical",
        apply: |input| {
            TECHNICAL_KEYWORDS
                .iter()
                .find(|(keyword, _)| input.text.contains(keyword))
                .map(|(_, role)| *role)
        },
    },
    Rule {
        name: "quality_control",
        apply: |input| {
            (input.text.contains("qc") || input.text.contains("quality"))
                .then_some(CanonicalRole::QcSpecialist)
        },
    },
    Rule {
        name: "assistant",
        apply: |input| {
            (input.text.contains("assistant")
                || input.text.contains("support")
                || input.hierarchy <= 20)
                .then_some(CanonicalRole::ProductionAssistant)
        },
    },
];

/// Classify a template by its descriptive text.
///
/// Returns `None` when no rule matches, in which case the caller falls
/// back to hierarchy-band mapping. Empty responsibility lists simply
/// leave less text to match against.
pub fn classify(template: &RoleTemplate) -> Option<CanonicalRole> {
    let text = template.semantic_text();
    let input = RuleInput {
        text: &text,
        hierarchy: template.hierarchy,
    };
    for rule in RULES {
        if let Some(role) = (rule.apply)(&input) {
            tracing::debug!(rule = rule.name, role = %role, "semantic rule matched");
            return Some(role);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(display: &str, hierarchy: u8, resp: &[&str]) -> RoleTemplate {
        RoleTemplate {
            name: display.to_uppercase(),
            display_name: display.to_string(),
            hierarchy,
            key_responsibilities: resp.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_high_hierarchy_enters_management_branch() {
        // "director" is present, but the hierarchy >= 80 trigger routes
        // through the management branch first; with no sub-keyword it
        // lands on the generic Manager.
        let t = template("Creative Director", 92, &["oversee visual direction"]);
        assert_eq!(classify(&t), Some(CanonicalRole::Manager));
    }

    #[test]
    fn test_management_sub_keywords() {
        let post = template("Head of Post", 70, &[]);
        assert_eq!(classify(&post), Some(CanonicalRole::PostSupervisor));

        let production = template("Production Manager", 70, &[]);
        assert_eq!(classify(&production), Some(CanonicalRole::ProductionManager));

        let exec = template("Executive Management", 70, &[]);
        assert_eq!(classify(&exec), Some(CanonicalRole::Exec));
    }

    #[test]
    fn test_director_below_management_trigger() {
        let t = template("Casting Director", 55, &[]);
        assert_eq!(classify(&t), Some(CanonicalRole::Director));
    }

    #[test]
    fn test_assistant_editor_beats_editor() {
        let t = template("Assistant Editor", 35, &["sync dailies"]);
        assert_eq!(classify(&t), Some(CanonicalRole::AssistantEditor));
        let plain = template("Online Editor", 50, &[]);
        assert_eq!(classify(&plain), Some(CanonicalRole::Editor));
    }

    #[test]
    fn test_producer_family_specificity() {
        assert_eq!(
            classify(&template("Line Producer", 65, &[])),
            Some(CanonicalRole::LineProducer)
        );
        assert_eq!(
            classify(&template("Field Producer", 55, &[])),
            Some(CanonicalRole::Producer)
        );
    }

    #[test]
    fn test_quality_and_assistant_rules() {
        assert_eq!(
            classify(&template("Review Tech", 30, &["quality passes"])),
            Some(CanonicalRole::QcSpecialist)
        );
        // Low hierarchy alone routes to production assistant.
        assert_eq!(
            classify(&template("Runner", 12, &[])),
            Some(CanonicalRole::ProductionAssistant)
        );
    }

    #[test]
    fn test_no_match_returns_none() {
        assert_eq!(classify(&template("Archivist", 45, &[])), None);
    }
}
