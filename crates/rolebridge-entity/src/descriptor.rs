//! Source-system role descriptor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The licensing-side base role of a user.
///
/// Only `ADMIN` and `MEMBER` are meaningful to the basic lookup; any
/// other value is carried through verbatim and maps to GUEST.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceRole {
    /// Licensing administrator.
    Admin,
    /// Regular licensing member.
    Member,
    /// Anything else the source system sends.
    #[serde(untagged)]
    Other(String),
}

impl SourceRole {
    /// Stable key used in cache keys and logs.
    pub fn key(&self) -> &str {
        match self {
            Self::Admin => "ADMIN",
            Self::Member => "MEMBER",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

impl From<&str> for SourceRole {
    fn from(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "ADMIN" => Self::Admin,
            "MEMBER" => Self::Member,
            _ => Self::Other(s.trim().to_string()),
        }
    }
}

impl fmt::Display for SourceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(SourceRole::from("admin"), SourceRole::Admin);
        assert_eq!(SourceRole::from(" Member "), SourceRole::Member);
        assert_eq!(
            SourceRole::from("billing-bot"),
            SourceRole::Other("billing-bot".to_string())
        );
    }
}
