//! User profile — the accumulated picture of who we are advising.
//!
//! A [`Profile`] is built incrementally across turns: later updates merge
//! into it (set union for skills and interests, last-write-wins for
//! scalars) rather than overwriting it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::ExtractorError;

/// Normalize a skill or interest term: lower-cased, whitespace-trimmed,
/// internal runs of whitespace collapsed to a single space.
pub fn normalize_term(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Structured record of a user's skills, interests, goals, and constraints.
///
/// Invariant: `skills`, `interests`, and `resume_extracted_skills` hold
/// normalized, deduplicated terms. `BTreeSet` keeps iteration order
/// deterministic, which the matcher's tie-breaking relies on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Skills the user reported directly
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub skills: BTreeSet<String>,

    /// Areas of interest (map onto career categories)
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub interests: BTreeSet<String>,

    /// Free-text career goals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,

    /// Hours per week available for learning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_time_budget: Option<f64>,

    /// Skills extracted from resume text (kept separate from reported skills)
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub resume_extracted_skills: BTreeSet<String>,
}

impl Profile {
    /// All skills the user is credited with: reported plus resume-extracted.
    pub fn all_skills(&self) -> BTreeSet<String> {
        self.skills
            .union(&self.resume_extracted_skills)
            .cloned()
            .collect()
    }

    /// Whether the profile carries anything the matcher can score on.
    pub fn is_scorable(&self) -> bool {
        !self.skills.is_empty()
            || !self.resume_extracted_skills.is_empty()
            || !self.interests.is_empty()
    }

    /// Merge a partial field set into this profile.
    ///
    /// Set union for skills/interests (normalized first), last-write-wins
    /// for goals and the weekly time budget. Applying the same fields twice
    /// yields the same profile as applying them once.
    pub fn merge(&mut self, fields: ProfileFields) {
        let normalized = |terms: &[String]| {
            terms
                .iter()
                .map(|s| normalize_term(s))
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
        };
        self.skills.extend(normalized(&fields.skills));
        self.interests.extend(normalized(&fields.interests));
        self.resume_extracted_skills
            .extend(normalized(&fields.resume_skills));
        if let Some(goals) = fields.goals {
            self.goals = Some(goals);
        }
        if let Some(budget) = fields.weekly_time_budget {
            self.weekly_time_budget = Some(budget);
        }
    }
}

/// A partial profile update, as parsed from one turn or supplied by the
/// caller. Empty collections and `None` scalars mean "no change".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileFields {
    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub interests: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_time_budget: Option<f64>,

    /// Skills supplied by an external extraction (resume analysis)
    #[serde(default)]
    pub resume_skills: Vec<String>,
}

impl ProfileFields {
    /// True when this update carries nothing at all.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
            && self.interests.is_empty()
            && self.goals.is_none()
            && self.weekly_time_budget.is_none()
            && self.resume_skills.is_empty()
    }
}

/// Seam for the resume/NLU collaborator.
///
/// The default implementation is a deterministic keyword-dictionary match;
/// an external NLP/LLM collaborator can supply a richer extraction. A
/// failing extractor must be degraded by the caller to an empty set —
/// never abort the turn.
#[async_trait]
pub trait SkillExtractor: Send + Sync {
    /// Extract normalized skill terms from free text.
    async fn extract(&self, text: &str) -> std::result::Result<BTreeSet<String>, ExtractorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_collapses_whitespace() {
        assert_eq!(normalize_term("  Machine   Learning "), "machine learning");
        assert_eq!(normalize_term("SQL"), "sql");
    }

    #[test]
    fn merge_unions_skills_and_normalizes() {
        let mut profile = Profile::default();
        profile.merge(ProfileFields {
            skills: vec!["HTML".into(), "css".into()],
            ..Default::default()
        });
        profile.merge(ProfileFields {
            skills: vec!["html".into(), "JavaScript".into()],
            ..Default::default()
        });

        let skills: Vec<&str> = profile.skills.iter().map(|s| s.as_str()).collect();
        assert_eq!(skills, vec!["css", "html", "javascript"]);
    }

    #[test]
    fn merge_is_idempotent() {
        let fields = ProfileFields {
            skills: vec!["python".into()],
            interests: vec!["technology".into()],
            goals: Some("become a data scientist".into()),
            weekly_time_budget: Some(10.0),
            resume_skills: vec![],
        };

        let mut once = Profile::default();
        once.merge(fields.clone());

        let mut twice = Profile::default();
        twice.merge(fields.clone());
        twice.merge(fields);

        assert_eq!(once, twice);
    }

    #[test]
    fn scalars_are_last_write_wins() {
        let mut profile = Profile::default();
        profile.merge(ProfileFields {
            weekly_time_budget: Some(5.0),
            ..Default::default()
        });
        profile.merge(ProfileFields {
            weekly_time_budget: Some(12.0),
            ..Default::default()
        });
        assert_eq!(profile.weekly_time_budget, Some(12.0));
    }

    #[test]
    fn all_skills_unions_reported_and_extracted() {
        let mut profile = Profile::default();
        profile.merge(ProfileFields {
            skills: vec!["html".into()],
            resume_skills: vec!["sql".into(), "html".into()],
            ..Default::default()
        });
        let all = profile.all_skills();
        assert_eq!(all.len(), 2);
        assert!(all.contains("sql"));
    }

    #[test]
    fn blank_terms_are_dropped() {
        let mut profile = Profile::default();
        profile.merge(ProfileFields {
            skills: vec!["  ".into(), "python".into()],
            ..Default::default()
        });
        assert_eq!(profile.skills.len(), 1);
    }

    #[test]
    fn empty_fields_report_empty() {
        assert!(ProfileFields::default().is_empty());
        let fields = ProfileFields {
            goals: Some("anything".into()),
            ..Default::default()
        };
        assert!(!fields.is_empty());
    }
}
