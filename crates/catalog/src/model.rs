//! Reference data model: careers, skills, courses, and scholarships.
//!
//! Everything here is static for the lifetime of the process and
//! read-only to all components.

use serde::{Deserialize, Serialize};
use skillsphere_core::{MarketData, Scholarship};
use std::collections::BTreeMap;

/// One candidate career with its skill requirements and market figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Career {
    /// Stable identifier, e.g. `"frontend-developer"`
    pub id: String,

    pub title: String,

    /// Interest categories this career belongs to (e.g. "technology")
    #[serde(default)]
    pub categories: Vec<String>,

    /// Required skills, normalized tags
    pub required_skills: Vec<String>,

    /// Importance weight per skill. Skills not listed count as 1.0.
    #[serde(default)]
    pub weights: BTreeMap<String, f64>,

    pub market: MarketData,

    /// Prerequisite relationships among the required skills:
    /// skill -> skills that must come earlier in the curriculum
    #[serde(default)]
    pub prerequisites: BTreeMap<String, Vec<String>>,
}

impl Career {
    /// Importance weight for a skill (1.0 when unlisted).
    pub fn weight(&self, skill: &str) -> f64 {
        self.weights.get(skill).copied().unwrap_or(1.0)
    }

    /// Sum of weights across all required skills.
    pub fn total_weight(&self) -> f64 {
        self.required_skills.iter().map(|s| self.weight(s)).sum()
    }
}

/// Per-skill reference info: effort estimate and extraction aliases.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillInfo {
    /// Typical hours to reach working proficiency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,

    /// Alternate spellings matched during keyword extraction
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// One catalog course, tagged with the skill it teaches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// The skill tag this course teaches
    pub skill: String,

    pub title: String,
    pub url: String,
    pub provider: String,

    /// USD; 0.0 for free courses
    pub price: f64,

    /// Out of 5.0
    pub rating: f64,
}

/// A scholarship listing, optionally restricted to specific careers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScholarshipEntry {
    #[serde(flatten)]
    pub scholarship: Scholarship,

    /// Career ids this applies to; empty = applies to every career
    #[serde(default)]
    pub careers: Vec<String>,
}
