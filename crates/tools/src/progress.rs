//! Progress tracker — records completed milestones and emits badges.

use skillsphere_core::error::ToolError;
use skillsphere_core::plan::LearningPlan;
use skillsphere_core::progress::{Badge, ProgressState};
use tracing::info;

/// One badge threshold, configured at construction.
#[derive(Debug, Clone)]
pub struct BadgeSpec {
    /// Completion percentage (0–100) that unlocks the badge
    pub percent: f64,
    pub name: String,
}

/// Result of marking a milestone complete.
#[derive(Debug, Clone, Default)]
pub struct MarkOutcome {
    /// False when the milestone was already complete (idempotent no-op)
    pub newly_completed: bool,

    /// Badges earned by this completion, in threshold order
    pub new_badges: Vec<Badge>,
}

/// Tracks per-session completion against the current plan.
pub struct ProgressTracker {
    /// Thresholds ascending by percent
    thresholds: Vec<BadgeSpec>,
}

impl ProgressTracker {
    pub fn new(thresholds: Vec<BadgeSpec>) -> Self {
        Self { thresholds }
    }

    /// Mark a milestone complete.
    ///
    /// Idempotent: re-marking a completed milestone is a no-op, not an
    /// error. Fails with `UnknownMilestone` when the id is not part of
    /// the plan. Each badge threshold fires at most once per session.
    pub fn mark_complete(
        &self,
        plan: &LearningPlan,
        progress: &mut ProgressState,
        milestone_id: &str,
    ) -> Result<MarkOutcome, ToolError> {
        if !plan.contains_milestone(milestone_id) {
            return Err(ToolError::UnknownMilestone {
                id: milestone_id.to_string(),
            });
        }

        if !progress.completed_milestones.insert(milestone_id.to_string()) {
            return Ok(MarkOutcome::default());
        }

        let total = plan.milestone_count();
        progress.percent_complete = progress.completed_milestones.len() as f64 / total as f64;

        let percent = progress.percent_complete * 100.0;
        let mut new_badges = Vec::new();
        for spec in &self.thresholds {
            if percent + 1e-9 >= spec.percent && !progress.has_badge_for(spec.percent) {
                let badge = Badge {
                    name: spec.name.clone(),
                    threshold: spec.percent,
                };
                info!(badge = %badge.name, percent, "Badge earned");
                progress.badges_earned.push(badge.clone());
                new_badges.push(badge);
            }
        }

        Ok(MarkOutcome {
            newly_completed: true,
            new_badges,
        })
    }

    /// The default thresholds used when no configuration is supplied.
    pub fn default_thresholds() -> Vec<BadgeSpec> {
        vec![
            BadgeSpec { percent: 25.0, name: "Quick Starter".into() },
            BadgeSpec { percent: 50.0, name: "Knowledge Builder".into() },
            BadgeSpec { percent: 75.0, name: "Skill Master".into() },
            BadgeSpec { percent: 100.0, name: "Career Ready".into() },
        ]
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new(Self::default_thresholds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillsphere_core::plan::{Milestone, Phase};

    fn plan_with(skills: &[&str]) -> LearningPlan {
        LearningPlan {
            career_id: "test-career".into(),
            phases: vec![Phase {
                name: "Phase 1".into(),
                milestones: skills
                    .iter()
                    .map(|s| Milestone {
                        id: s.to_string(),
                        skill: s.to_string(),
                        courses: vec![],
                        estimated_hours: 10.0,
                        courses_missing: true,
                    })
                    .collect(),
            }],
            has_missing_courses: true,
        }
    }

    #[test]
    fn marking_updates_percent() {
        let plan = plan_with(&["a", "b", "c", "d"]);
        let mut progress = ProgressState::default();
        let tracker = ProgressTracker::default();

        tracker.mark_complete(&plan, &mut progress, "a").unwrap();
        assert!((progress.percent_complete - 0.25).abs() < 1e-9);

        tracker.mark_complete(&plan, &mut progress, "b").unwrap();
        assert!((progress.percent_complete - 0.5).abs() < 1e-9);
    }

    #[test]
    fn marking_twice_is_idempotent() {
        let plan = plan_with(&["a", "b"]);
        let mut progress = ProgressState::default();
        let tracker = ProgressTracker::default();

        let first = tracker.mark_complete(&plan, &mut progress, "a").unwrap();
        assert!(first.newly_completed);
        let snapshot = progress.clone();

        let second = tracker.mark_complete(&plan, &mut progress, "a").unwrap();
        assert!(!second.newly_completed);
        assert!(second.new_badges.is_empty());
        assert_eq!(progress, snapshot);
    }

    #[test]
    fn unknown_milestone_rejected() {
        let plan = plan_with(&["a"]);
        let mut progress = ProgressState::default();
        let err = ProgressTracker::default()
            .mark_complete(&plan, &mut progress, "zzz")
            .unwrap_err();
        assert!(matches!(err, ToolError::UnknownMilestone { .. }));
        assert!(progress.completed_milestones.is_empty());
    }

    #[test]
    fn badges_fire_once_per_threshold() {
        let plan = plan_with(&["a", "b", "c", "d"]);
        let mut progress = ProgressState::default();
        let tracker = ProgressTracker::default();

        let first = tracker.mark_complete(&plan, &mut progress, "a").unwrap();
        assert_eq!(first.new_badges.len(), 1);
        assert_eq!(first.new_badges[0].name, "Quick Starter");

        // 50% crossing earns exactly the next badge, not the first again.
        let second = tracker.mark_complete(&plan, &mut progress, "b").unwrap();
        assert_eq!(second.new_badges.len(), 1);
        assert_eq!(second.new_badges[0].name, "Knowledge Builder");
    }

    #[test]
    fn single_completion_can_cross_several_thresholds() {
        let plan = plan_with(&["only"]);
        let mut progress = ProgressState::default();
        let tracker = ProgressTracker::default();

        let outcome = tracker.mark_complete(&plan, &mut progress, "only").unwrap();
        let names: Vec<&str> = outcome.new_badges.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Quick Starter", "Knowledge Builder", "Skill Master", "Career Ready"]
        );
    }

    #[test]
    fn completion_count_never_decreases() {
        let plan = plan_with(&["a", "b"]);
        let mut progress = ProgressState::default();
        let tracker = ProgressTracker::default();

        tracker.mark_complete(&plan, &mut progress, "a").unwrap();
        let count_after_first = progress.completed_milestones.len();
        tracker.mark_complete(&plan, &mut progress, "a").unwrap();
        let _ = tracker.mark_complete(&plan, &mut progress, "nope");
        assert!(progress.completed_milestones.len() >= count_after_first);
    }
}
