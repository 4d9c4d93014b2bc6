//! Progress tracking state — completed milestones and earned badges.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Per-session learning progress. Mutated only by the progress tracker;
/// the completion count never decreases within a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressState {
    /// Milestone ids marked complete
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub completed_milestones: BTreeSet<String>,

    /// Badges in the order they were earned
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub badges_earned: Vec<Badge>,

    /// Fraction of plan milestones completed, in `[0, 1]`
    #[serde(default)]
    pub percent_complete: f64,
}

impl ProgressState {
    /// Whether a badge for the given threshold was already emitted.
    pub fn has_badge_for(&self, threshold: f64) -> bool {
        self.badges_earned
            .iter()
            .any(|b| (b.threshold - threshold).abs() < f64::EPSILON)
    }
}

/// A motivational badge, emitted at most once per threshold per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,

    /// Completion percentage (0–100) that unlocked this badge
    pub threshold: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_lookup_by_threshold() {
        let state = ProgressState {
            badges_earned: vec![Badge { name: "Quick Starter".into(), threshold: 25.0 }],
            ..Default::default()
        };
        assert!(state.has_badge_for(25.0));
        assert!(!state.has_badge_for(50.0));
    }
}
