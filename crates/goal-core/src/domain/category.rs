//! Goal Category
//!
//! Fixed set of life domains a goal can belong to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Life domain of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Personal,
    Career,
    Health,
    Learning,
    Finance,
    Other,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl Category {
    /// All categories in form order
    pub const ALL: [Category; 6] = [
        Category::Personal,
        Category::Career,
        Category::Health,
        Category::Learning,
        Category::Finance,
        Category::Other,
    ];

    /// Wire value, as stored and as used in `<option value=..>`
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Personal => "personal",
            Category::Career => "career",
            Category::Health => "health",
            Category::Learning => "learning",
            Category::Finance => "finance",
            Category::Other => "other",
        }
    }

    /// Human-readable label for selectors
    pub fn label(&self) -> &'static str {
        match self {
            Category::Personal => "Personal",
            Category::Career => "Career",
            Category::Health => "Health",
            Category::Learning => "Learning",
            Category::Finance => "Finance",
            Category::Other => "Other",
        }
    }

    /// Lenient parse for form input; unknown values become the default
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Stored values are matched case-insensitively; anything unrecognised
/// becomes `Other` so one odd record does not invalidate the whole slot.
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.to_ascii_lowercase().parse().unwrap_or_else(|_| {
            tracing::warn!(category = %raw, "unknown stored category, using other");
            Category::Other
        }))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
