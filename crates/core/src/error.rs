//! Error types for the SkillSphere domain.
//!
//! Uses `thiserror` for ergonomic error definitions. Each bounded context
//! has its own error enum; every recoverable variant carries a stable
//! machine-readable reason code that the dispatcher embeds in its
//! [`StructuredResult`](crate::turn::StructuredResult).

use thiserror::Error;

/// The top-level error type for all SkillSphere operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Tool errors ---
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    // --- Dispatch errors ---
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    // --- Extractor collaborator errors ---
    #[error("Extractor error: {0}")]
    Extractor(#[from] ExtractorError),

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Recoverable failures raised by the domain tools.
#[derive(Debug, Clone, Error)]
pub enum ToolError {
    #[error("No input provided: neither profile fields nor resume text")]
    EmptyInput,

    #[error("Cannot score careers: {reason}")]
    NoCandidates { reason: String },

    #[error("No courses found for skill '{skill}'")]
    NoCoursesFound { skill: String },

    #[error("Insufficient data for cost analysis: missing {what}")]
    InsufficientData { what: String },

    #[error("Milestone '{id}' does not belong to the current learning plan")]
    UnknownMilestone { id: String },
}

impl ToolError {
    /// Stable machine-readable reason code for this error.
    pub fn reason_code(&self) -> &'static str {
        match self {
            ToolError::EmptyInput => "empty_input",
            ToolError::NoCandidates { .. } => "no_candidates",
            ToolError::NoCoursesFound { .. } => "no_courses_found",
            ToolError::InsufficientData { .. } => "insufficient_data",
            ToolError::UnknownMilestone { .. } => "unknown_milestone",
        }
    }
}

/// Failures raised while routing a turn to a tool.
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    #[error("No intent matched the utterance and no fallback is configured")]
    UnresolvedIntent,

    #[error("Missing prerequisite step: {step}")]
    MissingPrerequisite { step: String },
}

impl DispatchError {
    /// Stable machine-readable reason code for this error.
    pub fn reason_code(&self) -> &'static str {
        match self {
            DispatchError::UnresolvedIntent => "unresolved_intent",
            DispatchError::MissingPrerequisite { .. } => "missing_prerequisite",
        }
    }
}

/// Failure of the external skill-extraction collaborator.
///
/// The dispatcher degrades these to an empty extraction; they never abort
/// a turn.
#[derive(Debug, Clone, Error)]
pub enum ExtractorError {
    #[error("Extractor unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_error_displays_correctly() {
        let err = Error::Tool(ToolError::UnknownMilestone { id: "react".into() });
        assert!(err.to_string().contains("react"));
        assert!(err.to_string().contains("learning plan"));
    }

    #[test]
    fn dispatch_error_names_missing_step() {
        let err = DispatchError::MissingPrerequisite {
            step: "career recommendation".into(),
        };
        assert!(err.to_string().contains("career recommendation"));
        assert_eq!(err.reason_code(), "missing_prerequisite");
    }

    #[test]
    fn reason_codes_are_stable() {
        assert_eq!(ToolError::EmptyInput.reason_code(), "empty_input");
        assert_eq!(
            ToolError::InsufficientData { what: "weekly time budget".into() }.reason_code(),
            "insufficient_data"
        );
        assert_eq!(DispatchError::UnresolvedIntent.reason_code(), "unresolved_intent");
    }
}
