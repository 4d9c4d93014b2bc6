//! Learning plan — the phased curriculum produced for a chosen career.
//!
//! Invariants: phases are ordered so a skill's prerequisites appear in an
//! earlier or the same phase; no milestone appears twice; a milestone with
//! no available courses stays in the plan with `courses_missing` set
//! rather than being dropped.

use serde::{Deserialize, Serialize};

/// Ordered, phased curriculum of milestones mapped to courses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPlan {
    /// The career this plan prepares for
    pub career_id: String,

    /// Phases in prerequisite order
    pub phases: Vec<Phase>,

    /// True when at least one milestone has no catalog courses
    #[serde(default)]
    pub has_missing_courses: bool,
}

impl LearningPlan {
    /// Iterate all milestones across phases in plan order.
    pub fn milestones(&self) -> impl Iterator<Item = &Milestone> {
        self.phases.iter().flat_map(|p| p.milestones.iter())
    }

    /// Total number of milestones in the plan.
    pub fn milestone_count(&self) -> usize {
        self.phases.iter().map(|p| p.milestones.len()).sum()
    }

    /// Whether a milestone id belongs to this plan.
    pub fn contains_milestone(&self, id: &str) -> bool {
        self.milestones().any(|m| m.id == id)
    }

    /// Summed estimated hours across all milestones.
    pub fn total_hours(&self) -> f64 {
        self.milestones().map(|m| m.estimated_hours).sum()
    }
}

/// One phase of the curriculum. Milestones within a phase are ordered by
/// descending importance weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    pub milestones: Vec<Milestone>,
}

/// A single skill to acquire, with the courses selected for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Milestone id — the normalized skill tag, unique within a plan
    pub id: String,

    /// The skill this milestone teaches
    pub skill: String,

    /// Up to three catalog courses, best first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub courses: Vec<CourseRef>,

    /// Estimated effort to complete
    pub estimated_hours: f64,

    /// Set when the catalog had zero courses for this skill
    #[serde(default)]
    pub courses_missing: bool,
}

/// A course attached to a milestone, copied out of the read-only catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRef {
    pub title: String,
    pub url: String,
    pub provider: String,
    pub price: f64,
    pub rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestone(id: &str, hours: f64) -> Milestone {
        Milestone {
            id: id.into(),
            skill: id.into(),
            courses: vec![],
            estimated_hours: hours,
            courses_missing: false,
        }
    }

    #[test]
    fn plan_accessors() {
        let plan = LearningPlan {
            career_id: "frontend-developer".into(),
            phases: vec![
                Phase {
                    name: "Phase 1".into(),
                    milestones: vec![milestone("javascript", 60.0)],
                },
                Phase {
                    name: "Phase 2".into(),
                    milestones: vec![milestone("react", 40.0)],
                },
            ],
            has_missing_courses: false,
        };

        assert_eq!(plan.milestone_count(), 2);
        assert!(plan.contains_milestone("react"));
        assert!(!plan.contains_milestone("vue"));
        assert!((plan.total_hours() - 100.0).abs() < f64::EPSILON);
    }
}
