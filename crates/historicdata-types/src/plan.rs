//! Purchased service tier.

use serde::{Deserialize, Serialize};

/// The purchased service tier controlling which collections are accessible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Plan {
    /// Basic plan.
    #[serde(rename = "Basic Plan")]
    Basic,
    /// Advanced plan.
    #[serde(rename = "Advanced Plan")]
    Advanced,
    /// Pro plan.
    #[serde(rename = "Pro Plan")]
    Pro,
}

impl Plan {
    /// Returns the plan as the wire string the service expects.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "Basic Plan",
            Self::Advanced => "Advanced Plan",
            Self::Pro => "Pro Plan",
        }
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
