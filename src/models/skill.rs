//! Skill entries for the skills grid.

use serde::{Deserialize, Serialize};

/// Self-assessed proficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// Grouping heading, e.g. "Frontend".
    pub category: String,
    pub level: SkillLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}
