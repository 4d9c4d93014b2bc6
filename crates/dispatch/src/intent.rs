//! Intent classification — a priority-ordered keyword rule list.
//!
//! Classification is a total function from normalized utterance text to
//! the intent set: rules are checked top to bottom and the first match
//! wins, so ordering conflicts are resolved by position in [`INTENT_RULES`]
//! rather than hidden control flow. When several keywords co-occur (an
//! utterance mentioning both a course and its cost), the earlier rule
//! takes the turn — keep that in mind when editing the table.
//!
//! Matching is case-insensitive with word-boundary semantics: `hi` does
//! not fire inside `this`, and plural forms are listed explicitly.

use skillsphere_core::error::DispatchError;
use skillsphere_core::turn::Intent;
use skillsphere_tools::extract::contains_term;

/// The rule table, in priority order. This ordering is part of the
/// dispatcher's documented contract — tests pin it.
pub const INTENT_RULES: &[(&[&str], Intent)] = &[
    (
        &["hello", "hi", "hey", "start", "begin", "get started"],
        Intent::StartJourney,
    ),
    (
        &[
            "profile", "about me", "background", "my skills", "i know", "i can",
            "interested in", "goal", "goals", "hours per week",
        ],
        Intent::ProvideProfileInfo,
    ),
    (
        &["resume", "cv", "curriculum vitae"],
        Intent::RequestResumeAnalysis,
    ),
    (
        &["career", "careers", "recommend", "recommendation", "job", "jobs", "suggest"],
        Intent::RequestCareerRecommendation,
    ),
    (
        &["curriculum", "learning plan", "course", "courses", "learn", "study", "roadmap"],
        Intent::RequestCurriculum,
    ),
    (
        &["cost", "costs", "price", "prices", "money", "budget", "afford", "break even", "roi"],
        Intent::RequestCostAnalysis,
    ),
    (
        &["scholarship", "scholarships", "grant", "grants", "financial aid"],
        Intent::RequestScholarships,
    ),
    (
        &["progress", "completed", "complete", "finished", "finish", "done", "mastered", "badge", "badges"],
        Intent::ReportProgress,
    ),
];

/// Classify an utterance.
///
/// With the fallback enabled (the default), unmatched text resolves to
/// [`Intent::GenericFollowup`]; with it disabled, classification fails
/// with `UnresolvedIntent` and the dispatcher converts that into a
/// "need more information" result.
pub fn classify(utterance: &str, fallback_enabled: bool) -> Result<Intent, DispatchError> {
    let normalized = utterance.trim().to_lowercase();

    for (keywords, intent) in INTENT_RULES {
        if keywords.iter().any(|kw| contains_term(&normalized, kw)) {
            return Ok(*intent);
        }
    }

    if fallback_enabled {
        Ok(Intent::GenericFollowup)
    } else {
        Err(DispatchError::UnresolvedIntent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_ok(text: &str) -> Intent {
        classify(text, true).unwrap()
    }

    #[test]
    fn rule_order_is_pinned() {
        let order: Vec<Intent> = INTENT_RULES.iter().map(|(_, i)| *i).collect();
        assert_eq!(
            order,
            vec![
                Intent::StartJourney,
                Intent::ProvideProfileInfo,
                Intent::RequestResumeAnalysis,
                Intent::RequestCareerRecommendation,
                Intent::RequestCurriculum,
                Intent::RequestCostAnalysis,
                Intent::RequestScholarships,
                Intent::ReportProgress,
            ]
        );
    }

    #[test]
    fn each_intent_classifies() {
        assert_eq!(classify_ok("Hello, my name is Dana"), Intent::StartJourney);
        assert_eq!(
            classify_ok("I know html and css, about 10 hours per week"),
            Intent::ProvideProfileInfo
        );
        assert_eq!(classify_ok("here is my resume text"), Intent::RequestResumeAnalysis);
        assert_eq!(
            classify_ok("what careers would fit me?"),
            Intent::RequestCareerRecommendation
        );
        assert_eq!(
            classify_ok("show me a learning plan for data scientist"),
            Intent::RequestCurriculum
        );
        assert_eq!(classify_ok("how much will this all cost?"), Intent::RequestCostAnalysis);
        assert_eq!(classify_ok("are there scholarships available?"), Intent::RequestScholarships);
        assert_eq!(classify_ok("I just mastered javascript!"), Intent::ReportProgress);
        assert_eq!(classify_ok("tell me something"), Intent::GenericFollowup);
    }

    #[test]
    fn first_match_wins_on_keyword_conflict() {
        // "course" (curriculum, rule 5) fires before "cost" (rule 6).
        assert_eq!(
            classify_ok("what does the course cost?"),
            Intent::RequestCurriculum
        );
        // "curriculum vitae" resolves to resume analysis (rule 3) before
        // "curriculum" (rule 5) gets a look.
        assert_eq!(
            classify_ok("attached is my curriculum vitae"),
            Intent::RequestResumeAnalysis
        );
    }

    #[test]
    fn word_boundaries_prevent_substring_hits() {
        // "hi" inside "this", "done" inside "abandoned".
        assert_eq!(classify_ok("this is abandoned territory"), Intent::GenericFollowup);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify_ok("CALCULATE MY COSTS"), Intent::RequestCostAnalysis);
    }

    #[test]
    fn disabled_fallback_yields_unresolved() {
        let err = classify("zzz qqq", false).unwrap_err();
        assert!(matches!(err, DispatchError::UnresolvedIntent));
    }
}
