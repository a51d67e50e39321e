//! Staff identity

use serde::{Deserialize, Serialize};

const FALLBACK_NAME: &str = "Staff Member";

/// Signed-in staff record as written by the login page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffProfile {
    #[serde(default)]
    pub name: Option<String>,
}

/// Header greeting derived from [`StaffProfile`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffGreeting {
    pub display_name: String,
    pub avatar_initial: String,
}

impl StaffGreeting {
    pub fn from_profile(profile: Option<&StaffProfile>) -> Self {
        let name = profile
            .and_then(|p| p.name.as_deref())
            .filter(|n| !n.is_empty());

        let display_name = name.unwrap_or(FALLBACK_NAME).to_string();
        let avatar_initial = name
            .and_then(|n| n.chars().next())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "S".to_string());

        Self {
            display_name,
            avatar_initial,
        }
    }
}

impl Default for StaffGreeting {
    fn default() -> Self {
        Self::from_profile(None)
    }
}
