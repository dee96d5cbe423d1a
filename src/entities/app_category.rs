use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed set of categories an app can be listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppCategory {
    Recommended,
    Reference,
    Productivity,
}

impl fmt::Display for AppCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AppCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 3] = [Self::Recommended, Self::Reference, Self::Productivity];

    /// Convert from database string representation
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "recommended" => Some(Self::Recommended),
            "reference" => Some(Self::Reference),
            "productivity" => Some(Self::Productivity),
            _ => None,
        }
    }

    /// Convert to database string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Reference => "reference",
            Self::Productivity => "productivity",
        }
    }
}
