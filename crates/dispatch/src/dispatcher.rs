//! The tool dispatcher — one turn in, one structured result out.
//!
//! `handle_turn` classifies the utterance, acquires the session for the
//! full duration of the turn, invokes exactly one primary tool with the
//! session fields that tool needs, merges the output back into the
//! session, and attaches follow-up suggestions. Recoverable failures are
//! converted into `needs_info`/`error` results at this boundary — the
//! caller never sees an internal fault.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Duration;
use skillsphere_catalog::Catalog;
use skillsphere_config::GuidanceConfig;
use skillsphere_core::error::{DispatchError, ToolError};
use skillsphere_core::profile::{ProfileFields, SkillExtractor};
use skillsphere_core::progress::ProgressState;
use skillsphere_core::session::Session;
use skillsphere_core::turn::{Intent, ResultData, StructuredResult, SuggestionStrategy};
use skillsphere_session::SessionStore;
use skillsphere_tools::extract::contains_term;
use skillsphere_tools::progress::BadgeSpec;
use skillsphere_tools::{
    CostCalculator, CurriculumGenerator, KeywordSkillExtractor, ProfileBuilder, ProgressTracker,
    ScholarshipFinder, SkillGapMatcher,
};
use tracing::{debug, info, warn};

use crate::intent::classify;
use crate::parse;
use crate::suggestions::StaticSuggestions;

/// Static next steps returned by the welcome journey.
const WELCOME_NEXT_STEPS: &[&str] = &[
    "Share your background and current situation",
    "Tell me about your interests and passions",
    "Let me know your learning preferences",
    "Describe your career goals and timeline",
];

/// Capability overview returned by the generic fallback.
const CAPABILITIES: &[&str] = &[
    "Career recommendations based on your skills and interests",
    "Personalized learning plans with course links",
    "Cost analysis and break-even estimates",
    "Progress tracking with badges",
    "Scholarship and financial aid listings",
];

/// Routes turns to tools and owns the turn lifecycle.
pub struct ToolDispatcher {
    store: Arc<SessionStore>,
    catalog: Arc<Catalog>,

    matcher: SkillGapMatcher,
    generator: CurriculumGenerator,
    calculator: CostCalculator,
    tracker: ProgressTracker,

    /// Keyword layer for scanning utterances into profile fields
    scanner: KeywordSkillExtractor,

    /// Resume extraction seam; defaults to the keyword dictionary
    extractor: Arc<dyn SkillExtractor>,

    suggestions: Arc<dyn SuggestionStrategy>,

    /// When false, unmatched utterances fail classification instead of
    /// falling back to the capability overview
    fallback_enabled: bool,

    /// Idle time before a session is eligible for eviction
    session_ttl: Duration,
}

impl ToolDispatcher {
    pub fn new(store: Arc<SessionStore>, catalog: Arc<Catalog>, config: &GuidanceConfig) -> Self {
        let thresholds = config
            .badges
            .iter()
            .map(|b| BadgeSpec {
                percent: b.percent,
                name: b.name.clone(),
            })
            .collect();

        Self {
            matcher: SkillGapMatcher::new(config.matcher.max_matches),
            generator: CurriculumGenerator::new(
                config.curriculum.courses_per_milestone,
                config.curriculum.default_estimated_hours,
            ),
            calculator: CostCalculator::new(config.costs.baseline_salary),
            tracker: ProgressTracker::new(thresholds),
            scanner: KeywordSkillExtractor::from_catalog(&catalog),
            extractor: Arc::new(KeywordSkillExtractor::from_catalog(&catalog)),
            suggestions: Arc::new(StaticSuggestions),
            fallback_enabled: true,
            session_ttl: Duration::minutes(config.session.ttl_minutes as i64),
            store,
            catalog,
        }
    }

    /// Destroy sessions idle past the configured TTL. The embedding
    /// process decides the sweep cadence. Returns the eviction count.
    pub async fn evict_expired_sessions(&self) -> usize {
        self.store.evict_expired(self.session_ttl).await
    }

    /// Replace the resume extraction collaborator.
    pub fn with_extractor(mut self, extractor: Arc<dyn SkillExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Replace the suggestion strategy.
    pub fn with_suggestions(mut self, suggestions: Arc<dyn SuggestionStrategy>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Enable or disable the generic fallback intent.
    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.fallback_enabled = enabled;
        self
    }

    /// Handle one turn for one user.
    ///
    /// The session is locked for the whole turn, so concurrent turns for
    /// the same user serialize; different users proceed independently.
    /// Every handled turn — including `needs_info` and `error` outcomes —
    /// is appended to the session history.
    pub async fn handle_turn(&self, session_id: &str, utterance: &str) -> StructuredResult {
        let entry = self.store.get_or_create(session_id).await;
        let mut session = entry.lock().await;

        let trimmed = utterance.trim();
        if trimmed.is_empty() {
            let result = StructuredResult::needs_info(
                Intent::GenericFollowup,
                "empty_input",
                "an utterance to respond to",
            );
            return self.finish(&mut session, trimmed, result);
        }

        let intent = match classify(trimmed, self.fallback_enabled) {
            Ok(intent) => intent,
            Err(err @ DispatchError::UnresolvedIntent) => {
                let result = StructuredResult::needs_info(
                    Intent::GenericFollowup,
                    err.reason_code(),
                    "more detail about what you need",
                );
                return self.finish(&mut session, trimmed, result);
            }
            Err(err) => {
                let result = StructuredResult::error(
                    Intent::GenericFollowup,
                    err.reason_code(),
                    err.to_string(),
                );
                return self.finish(&mut session, trimmed, result);
            }
        };

        info!(session_id, ?intent, "Handling turn");

        let result = match intent {
            Intent::StartJourney => self.start_journey(&mut session, trimmed),
            Intent::ProvideProfileInfo => self.provide_profile(&mut session, trimmed),
            Intent::RequestResumeAnalysis => self.analyze_resume(&mut session, trimmed).await,
            Intent::RequestCareerRecommendation => self.recommend_careers(&mut session),
            Intent::RequestCurriculum => self.build_curriculum(&mut session, trimmed),
            Intent::RequestCostAnalysis => self.analyze_costs(&session),
            Intent::RequestScholarships => self.find_scholarships(&session),
            Intent::ReportProgress => self.report_progress(&mut session, trimmed),
            Intent::GenericFollowup => StructuredResult::success(
                Intent::GenericFollowup,
                ResultData::Overview {
                    capabilities: CAPABILITIES.iter().map(|s| s.to_string()).collect(),
                },
            ),
        };

        self.finish(&mut session, trimmed, result)
    }

    /// Attach suggestions, record the turn, and hand the result back.
    fn finish(
        &self,
        session: &mut Session,
        utterance: &str,
        mut result: StructuredResult,
    ) -> StructuredResult {
        result.suggestions = self.suggestions.suggest(result.intent, &result);
        session.record_turn(utterance, &result);
        result
    }

    // ── Intent handlers ────────────────────────────────────────────────────

    fn start_journey(&self, session: &mut Session, utterance: &str) -> StructuredResult {
        if let Some(name) = parse::parse_display_name(utterance) {
            debug!(%name, "Captured display name");
            session.user_name = Some(name);
        }

        StructuredResult::success(
            Intent::StartJourney,
            ResultData::Welcome {
                user_name: session.user_name.clone(),
                next_steps: WELCOME_NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
            },
        )
    }

    fn provide_profile(&self, session: &mut Session, utterance: &str) -> StructuredResult {
        let fields = self.fields_from_utterance(utterance);

        match ProfileBuilder::update_profile(session.profile.as_ref(), fields) {
            Ok(profile) => {
                session.profile = Some(profile.clone());
                StructuredResult::success(
                    Intent::ProvideProfileInfo,
                    ResultData::ProfileUpdated { profile },
                )
            }
            Err(err) => tool_result(Intent::ProvideProfileInfo, &err),
        }
    }

    /// Scan an utterance into profile fields with the keyword layer:
    /// known skills, career categories as interests, a weekly hour
    /// figure, and goal text.
    fn fields_from_utterance(&self, utterance: &str) -> ProfileFields {
        let lowered = utterance.to_lowercase();

        let skills: Vec<String> = self.scanner.scan(utterance).into_iter().collect();
        let interests: Vec<String> = self
            .catalog
            .categories()
            .into_iter()
            .filter(|cat| contains_term(&lowered, cat))
            .collect();
        let goals = (contains_term(&lowered, "goal") || contains_term(&lowered, "goals"))
            .then(|| utterance.to_string());

        ProfileFields {
            skills,
            interests,
            goals,
            weekly_time_budget: parse::parse_weekly_hours(utterance),
            resume_skills: Vec::new(),
        }
    }

    async fn analyze_resume(&self, session: &mut Session, text: &str) -> StructuredResult {
        // A failing collaborator degrades to the empty set; it never
        // aborts the turn.
        let extracted: BTreeSet<String> = match self.extractor.extract(text).await {
            Ok(skills) => skills,
            Err(err) => {
                warn!("Resume extractor failed, degrading to empty set: {err}");
                BTreeSet::new()
            }
        };

        if !extracted.is_empty() {
            let fields = ProfileFields {
                resume_skills: extracted.iter().cloned().collect(),
                ..Default::default()
            };
            match ProfileBuilder::update_profile(session.profile.as_ref(), fields) {
                Ok(profile) => session.profile = Some(profile),
                Err(err) => return tool_result(Intent::RequestResumeAnalysis, &err),
            }
        }

        let skills: Vec<String> = extracted.into_iter().collect();
        StructuredResult::success(
            Intent::RequestResumeAnalysis,
            ResultData::ResumeAnalyzed {
                skill_count: skills.len(),
                skills,
            },
        )
    }

    fn recommend_careers(&self, session: &mut Session) -> StructuredResult {
        let Some(profile) = session.profile.as_ref() else {
            return missing_prerequisite(Intent::RequestCareerRecommendation, "profile information");
        };

        match self.matcher.match_careers(profile, &self.catalog) {
            Ok(matches) => {
                // The top match is chosen by default; a later curriculum
                // request can name a different one.
                session.chosen_match = matches.first().cloned();
                session.matches = matches.clone();
                StructuredResult::success(
                    Intent::RequestCareerRecommendation,
                    ResultData::CareerMatches { matches },
                )
            }
            Err(err) => tool_result(Intent::RequestCareerRecommendation, &err),
        }
    }

    fn build_curriculum(&self, session: &mut Session, utterance: &str) -> StructuredResult {
        if session.matches.is_empty() {
            return missing_prerequisite(Intent::RequestCurriculum, "career recommendation");
        }

        let chosen = parse::resolve_career(utterance, &session.matches)
            .cloned()
            .or_else(|| session.chosen_match.clone())
            .or_else(|| session.matches.first().cloned());
        let Some(chosen) = chosen else {
            return missing_prerequisite(Intent::RequestCurriculum, "career recommendation");
        };

        match self.generator.generate(&chosen, &self.catalog) {
            Ok(plan) => {
                // A new plan restarts progress: completed milestones are
                // only meaningful against the plan they belong to.
                session.chosen_match = Some(chosen);
                session.plan = Some(plan.clone());
                session.progress = ProgressState::default();
                StructuredResult::success(Intent::RequestCurriculum, ResultData::Curriculum { plan })
            }
            Err(err) => tool_result(Intent::RequestCurriculum, &err),
        }
    }

    fn analyze_costs(&self, session: &Session) -> StructuredResult {
        let Some(plan) = session.plan.as_ref() else {
            return missing_prerequisite(Intent::RequestCostAnalysis, "curriculum");
        };
        let Some(profile) = session.profile.as_ref() else {
            return missing_prerequisite(Intent::RequestCostAnalysis, "profile information");
        };

        let market = session.chosen_match.as_ref().map(|m| &m.market);
        match self.calculator.calculate(plan, profile, market) {
            Ok(summary) => StructuredResult::success(
                Intent::RequestCostAnalysis,
                ResultData::CostAnalysis { summary },
            ),
            Err(err) => tool_result(Intent::RequestCostAnalysis, &err),
        }
    }

    fn find_scholarships(&self, session: &Session) -> StructuredResult {
        let career_id = session.chosen_match.as_ref().map(|m| m.career_id.as_str());
        let scholarships = ScholarshipFinder::find(career_id, &self.catalog);

        StructuredResult::success(
            Intent::RequestScholarships,
            ResultData::Scholarships {
                scholarships,
                tips: ScholarshipFinder::application_tips(),
            },
        )
    }

    fn report_progress(&self, session: &mut Session, utterance: &str) -> StructuredResult {
        let Some(plan) = session.plan.clone() else {
            return missing_prerequisite(Intent::ReportProgress, "curriculum");
        };

        // Milestones the utterance names, in plan order.
        let mentioned = self.scanner.scan(utterance);
        let hits: Vec<String> = plan
            .milestones()
            .filter(|m| mentioned.contains(&m.id))
            .map(|m| m.id.clone())
            .collect();

        if hits.is_empty() {
            let remaining: Vec<String> = plan
                .milestones()
                .filter(|m| !session.progress.completed_milestones.contains(&m.id))
                .map(|m| m.id.clone())
                .collect();
            return StructuredResult::needs_info(
                Intent::ReportProgress,
                "unknown_milestone",
                format!("a milestone from your plan: {}", remaining.join(", ")),
            );
        }

        let mut newly_completed = Vec::new();
        let mut new_badges = Vec::new();
        for id in &hits {
            match self.tracker.mark_complete(&plan, &mut session.progress, id) {
                Ok(outcome) => {
                    if outcome.newly_completed {
                        newly_completed.push(id.clone());
                    }
                    new_badges.extend(outcome.new_badges);
                }
                Err(err) => return tool_result(Intent::ReportProgress, &err),
            }
        }

        StructuredResult::success(
            Intent::ReportProgress,
            ResultData::Progress {
                state: session.progress.clone(),
                newly_completed,
                new_badges,
            },
        )
    }
}

/// Convert a missing-prerequisite condition into a `needs_info` result
/// naming the missing step.
fn missing_prerequisite(intent: Intent, step: &str) -> StructuredResult {
    let err = DispatchError::MissingPrerequisite { step: step.to_string() };
    debug!(?intent, step, "Prerequisite missing");
    StructuredResult::needs_info(intent, err.reason_code(), step)
}

/// Convert a recoverable tool error into a structured result.
fn tool_result(intent: Intent, err: &ToolError) -> StructuredResult {
    debug!(?intent, %err, "Tool reported a recoverable failure");
    match err {
        ToolError::EmptyInput
        | ToolError::NoCandidates { .. }
        | ToolError::InsufficientData { .. }
        | ToolError::NoCoursesFound { .. } => {
            StructuredResult::needs_info(intent, err.reason_code(), err.to_string())
        }
        ToolError::UnknownMilestone { .. } => {
            StructuredResult::error(intent, err.reason_code(), err.to_string())
        }
    }
}
