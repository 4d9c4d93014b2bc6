//! Curriculum generator — expands a career match's skill gaps into a
//! phased learning plan.
//!
//! Phases come from Kahn layering over the career's prerequisite graph:
//! phase N holds every missing skill whose missing prerequisites all sit
//! in earlier phases. Prerequisites the user already holds count as
//! satisfied. Within a phase, milestones are ordered by descending
//! importance weight.

use skillsphere_catalog::Catalog;
use skillsphere_core::error::ToolError;
use skillsphere_core::matching::CareerMatch;
use skillsphere_core::plan::{CourseRef, LearningPlan, Milestone, Phase};
use std::collections::BTreeSet;
use tracing::warn;

/// Builds learning plans from career matches and the course catalog.
pub struct CurriculumGenerator {
    /// Courses attached per milestone
    courses_per_milestone: usize,

    /// Hours assumed when the catalog has no estimate for a skill
    default_estimated_hours: f64,
}

impl CurriculumGenerator {
    pub fn new(courses_per_milestone: usize, default_estimated_hours: f64) -> Self {
        Self {
            courses_per_milestone,
            default_estimated_hours,
        }
    }

    /// Generate a phased plan covering the match's missing skills.
    ///
    /// A skill with no catalog courses stays in the plan with an empty
    /// course list and `courses_missing` set — a partial result, never a
    /// dropped milestone.
    pub fn generate(
        &self,
        career_match: &CareerMatch,
        catalog: &Catalog,
    ) -> Result<LearningPlan, ToolError> {
        let career = catalog.career(&career_match.career_id).unwrap_or_else(|| {
            // Matches are produced from the active catalog; a miss here is
            // corrupted state, not bad input.
            panic!(
                "career '{}' missing from catalog during curriculum generation",
                career_match.career_id
            )
        });

        let mut remaining: BTreeSet<&str> = career_match
            .missing_skills
            .iter()
            .map(|s| s.as_str())
            .collect();

        let mut phases = Vec::new();
        let mut has_missing_courses = false;

        while !remaining.is_empty() {
            // Skills whose missing prerequisites are all scheduled already.
            let ready: Vec<&str> = remaining
                .iter()
                .copied()
                .filter(|skill| {
                    career
                        .prerequisites
                        .get(*skill)
                        .is_none_or(|prereqs| prereqs.iter().all(|p| !remaining.contains(p.as_str())))
                })
                .collect();

            // The catalog rejects cyclic prerequisite graphs at load time.
            assert!(
                !ready.is_empty(),
                "prerequisite layering stalled for career '{}'",
                career.id
            );

            let mut ordered = ready;
            ordered.sort_by(|a, b| {
                career
                    .weight(b)
                    .total_cmp(&career.weight(a))
                    .then_with(|| a.cmp(b))
            });

            let milestones: Vec<Milestone> = ordered
                .iter()
                .map(|skill| {
                    let milestone = self.build_milestone(skill, catalog);
                    has_missing_courses |= milestone.courses_missing;
                    milestone
                })
                .collect();

            for skill in &ordered {
                remaining.remove(skill);
            }
            phases.push(Phase {
                name: format!("Phase {}", phases.len() + 1),
                milestones,
            });
        }

        Ok(LearningPlan {
            career_id: career.id.clone(),
            phases,
            has_missing_courses,
        })
    }

    fn build_milestone(&self, skill: &str, catalog: &Catalog) -> Milestone {
        let courses: Vec<CourseRef> = catalog
            .courses_for(skill)
            .into_iter()
            .take(self.courses_per_milestone)
            .map(|c| CourseRef {
                title: c.title.clone(),
                url: c.url.clone(),
                provider: c.provider.clone(),
                price: c.price,
                rating: c.rating,
            })
            .collect();

        let courses_missing = courses.is_empty();
        if courses_missing {
            warn!(
                skill,
                "{}",
                ToolError::NoCoursesFound { skill: skill.to_string() }
            );
        }

        Milestone {
            id: skill.to_string(),
            skill: skill.to_string(),
            estimated_hours: catalog
                .estimated_hours(skill)
                .unwrap_or(self.default_estimated_hours),
            courses,
            courses_missing,
        }
    }
}

impl Default for CurriculumGenerator {
    fn default() -> Self {
        Self::new(3, 40.0)
    }
}
