//! Organization subscription tier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An organization's subscription level.
///
/// The tier caps the effective hierarchy any mapping can reach and gates
/// financial visibility and settings management outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrganizationTier {
    /// Entry tier; hierarchy capped at 40.
    Basic,
    /// Mid tier; hierarchy capped at 80.
    Pro,
    /// Top tier; uncapped.
    Enterprise,
}

impl OrganizationTier {
    /// The maximum effective hierarchy reachable on this tier.
    pub fn hierarchy_cap(&self) -> u8 {
        match self {
            Self::Basic => 40,
            Self::Pro => 80,
            Self::Enterprise => 100,
        }
    }

    /// Clamp a hierarchy value to this tier's cap.
    pub fn cap(&self, hierarchy: u8) -> u8 {
        hierarchy.min(self.hierarchy_cap())
    }

    /// Return the tier as its wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "BASIC",
            Self::Pro => "PRO",
            Self::Enterprise => "ENTERPRISE",
        }
    }
}

impl fmt::Display for OrganizationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrganizationTier {
    type Err = rolebridge_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BASIC" => Ok(Self::Basic),
            "PRO" => Ok(Self::Pro),
            "ENTERPRISE" => Ok(Self::Enterprise),
            _ => Err(rolebridge_core::AppError::validation(format!(
                "Invalid organization tier: '{s}'. Expected one of: BASIC, PRO, ENTERPRISE"
            ))),
        }
    }
}
