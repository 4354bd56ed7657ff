//! Role template supplied by the external template catalog.

use serde::{Deserialize, Serialize};

/// A free-text job role descriptor with a numeric hierarchy weight.
///
/// Templates arrive as JSON from an external catalog and are read-only
/// to this engine. The `name` participates in direct matching, while
/// `display_name` and `key_responsibilities` feed the semantic
/// classifier. Hierarchy is expected in [0,100]; callers pre-validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTemplate {
    /// Catalog identifier, e.g. `"CREATIVE DIRECTOR"`.
    pub name: String,
    /// Human-readable display name.
    pub display_name: String,
    /// Seniority/authority weight in [0,100].
    pub hierarchy: u8,
    /// Ordered descriptive responsibility lines.
    #[serde(default)]
    pub key_responsibilities: Vec<String>,
}

impl RoleTemplate {
    /// Lowercased display name plus joined responsibilities, the text the
    /// semantic classifier matches keywords against.
    pub fn semantic_text(&self) -> String {
        let mut text = self.display_name.to_lowercase();
        for line in &self.key_responsibilities {
            text.push(' ');
            text.push_str(&line.to_lowercase());
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_text_joins_responsibilities() {
        let template = RoleTemplate {
            name: "DAILIES OP".to_string(),
            display_name: "Dailies Operator".to_string(),
            hierarchy: 30,
            key_responsibilities: vec!["Ingest Camera cards".to_string(), "QC checks".to_string()],
        };
        assert_eq!(
            template.semantic_text(),
            "dailies operator ingest camera cards qc checks"
        );
    }

    #[test]
    fn test_empty_responsibilities() {
        let template = RoleTemplate {
            name: "X".to_string(),
            display_name: "Unlisted".to_string(),
            hierarchy: 50,
            key_responsibilities: vec![],
        };
        assert_eq!(template.semantic_text(), "unlisted");
    }
}
