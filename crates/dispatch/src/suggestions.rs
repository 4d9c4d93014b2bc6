//! Static follow-up suggestions, one list per intent.
//!
//! The default [`SuggestionStrategy`]: suggestions depend only on the
//! intent that was handled, nudging the user toward the natural next
//! step of the journey (costs after a curriculum, scholarships after a
//! cost analysis, and so on).

use skillsphere_core::turn::{Intent, Status, StructuredResult, SuggestionStrategy};

/// Intent-keyed static suggestion lists.
pub struct StaticSuggestions;

impl SuggestionStrategy for StaticSuggestions {
    fn suggest(&self, intent: Intent, result: &StructuredResult) -> Vec<String> {
        // A turn that needs more information always points back at the
        // missing step first.
        if result.status == Status::NeedsInfo
            && let Some(detail) = &result.detail
        {
            let mut suggestions = vec![format!("Provide: {detail}")];
            suggestions.extend(defaults_for(Intent::GenericFollowup));
            return suggestions;
        }

        defaults_for(intent)
    }
}

fn defaults_for(intent: Intent) -> Vec<String> {
    let list: &[&str] = match intent {
        Intent::StartJourney => &[
            "Share your background and current situation",
            "Tell me about your interests and passions",
            "Let me know your weekly time budget",
            "Describe your career goals",
        ],
        Intent::ProvideProfileInfo => &[
            "Get career recommendations",
            "Analyze my resume",
            "Add more skills or interests",
        ],
        Intent::RequestResumeAnalysis => &[
            "Recommend careers that match my skills",
            "Add more profile details",
        ],
        Intent::RequestCareerRecommendation => &[
            "Create a learning plan",
            "Calculate learning costs",
            "Find scholarships",
        ],
        Intent::RequestCurriculum => &[
            "Calculate learning costs",
            "Find scholarships",
            "Track my progress",
        ],
        Intent::RequestCostAnalysis => &[
            "Find scholarships",
            "Review my learning plan",
            "Track my progress",
        ],
        Intent::RequestScholarships => &[
            "Calculate learning costs",
            "Track my progress",
        ],
        Intent::ReportProgress => &[
            "Mark another milestone complete",
            "Review my learning plan",
        ],
        Intent::GenericFollowup => &[
            "Help me choose a career",
            "Show me learning resources",
            "Calculate learning costs",
            "Find scholarships",
        ],
    };
    list.iter().map(|s| s.to_string()).collect()
}
