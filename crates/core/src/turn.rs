//! Turn-level contract between the pipeline and its caller.
//!
//! The caller supplies a session id and raw utterance; the pipeline
//! returns a [`StructuredResult`] — status, an intent-discriminated data
//! payload, and suggested follow-up actions. The caller (presentation
//! layer) is solely responsible for rendering it as natural language.

use serde::{Deserialize, Serialize};

use crate::finance::FinancialSummary;
use crate::matching::CareerMatch;
use crate::plan::LearningPlan;
use crate::profile::Profile;
use crate::progress::{Badge, ProgressState};
use crate::scholarship::Scholarship;

/// The classified purpose of a single utterance.
///
/// Classification checks intents in the order they are declared here;
/// the first match wins. `GenericFollowup` is the always-matching
/// fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    StartJourney,
    ProvideProfileInfo,
    RequestResumeAnalysis,
    RequestCareerRecommendation,
    RequestCurriculum,
    RequestCostAnalysis,
    RequestScholarships,
    ReportProgress,
    GenericFollowup,
}

/// Outcome category of a handled turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    NeedsInfo,
    Error,
}

/// The structured payload, discriminated by the intent that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResultData {
    /// Welcome payload for the start-journey intent
    Welcome {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        user_name: Option<String>,
        next_steps: Vec<String>,
    },

    /// Profile after a merge
    ProfileUpdated { profile: Profile },

    /// Skills extracted from resume text
    ResumeAnalyzed {
        skills: Vec<String>,
        skill_count: usize,
    },

    /// Ranked career matches, best first
    CareerMatches { matches: Vec<CareerMatch> },

    /// Generated learning plan
    Curriculum { plan: LearningPlan },

    /// Cost/ROI analysis for the current plan
    CostAnalysis { summary: FinancialSummary },

    /// Scholarship listings with application tips
    Scholarships {
        scholarships: Vec<Scholarship>,
        tips: Vec<String>,
    },

    /// Progress after marking milestones complete
    Progress {
        state: ProgressState,
        newly_completed: Vec<String>,
        new_badges: Vec<Badge>,
    },

    /// Capability overview for the generic fallback
    Overview { capabilities: Vec<String> },
}

/// What the pipeline hands back for every turn.
///
/// Recoverable failures never escape as errors: they arrive here as
/// `needs_info`/`error` statuses with a machine-readable `reason` code and
/// a short `detail` naming what is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredResult {
    pub status: Status,
    pub intent: Intent,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ResultData>,

    /// Machine-readable reason code when status is not `Success`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Short hint naming the missing step or input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Suggested follow-up actions, static per intent
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl StructuredResult {
    /// A successful result carrying a data payload.
    pub fn success(intent: Intent, data: ResultData) -> Self {
        Self {
            status: Status::Success,
            intent,
            data: Some(data),
            reason: None,
            detail: None,
            suggestions: Vec::new(),
        }
    }

    /// A "need more information" result with a reason code and hint.
    pub fn needs_info(intent: Intent, reason: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status: Status::NeedsInfo,
            intent,
            data: None,
            reason: Some(reason.into()),
            detail: Some(detail.into()),
            suggestions: Vec::new(),
        }
    }

    /// An error result with a reason code and hint.
    pub fn error(intent: Intent, reason: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            intent,
            data: None,
            reason: Some(reason.into()),
            detail: Some(detail.into()),
            suggestions: Vec::new(),
        }
    }

    /// Attach suggestions, replacing any existing list.
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }
}

/// Pluggable follow-up suggestion strategy.
///
/// Consulted by the dispatcher after a tool result is produced — tools
/// stay pure and independently testable. The default implementation
/// returns a static list per intent.
pub trait SuggestionStrategy: Send + Sync {
    fn suggest(&self, intent: Intent, result: &StructuredResult) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_info_carries_reason_and_detail() {
        let result = StructuredResult::needs_info(
            Intent::RequestCurriculum,
            "missing_prerequisite",
            "career recommendation",
        );
        assert_eq!(result.status, Status::NeedsInfo);
        assert_eq!(result.reason.as_deref(), Some("missing_prerequisite"));
        assert_eq!(result.detail.as_deref(), Some("career recommendation"));
        assert!(result.data.is_none());
    }

    #[test]
    fn result_data_serializes_with_type_tag() {
        let data = ResultData::ResumeAnalyzed {
            skills: vec!["python".into()],
            skill_count: 1,
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["type"], "resume_analyzed");
        assert_eq!(json["skill_count"], 1);
    }

    #[test]
    fn intent_serializes_snake_case() {
        let json = serde_json::to_value(Intent::RequestCostAnalysis).unwrap();
        assert_eq!(json, "request_cost_analysis");
    }
}
