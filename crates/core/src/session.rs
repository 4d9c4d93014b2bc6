//! Session — the per-user state that survives across turns.
//!
//! A session is owned exclusively by the session store and mutated only
//! through dispatcher calls. It is destroyed on explicit reset or TTL
//! expiry; after destruction, holders must re-fetch from the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::CareerMatch;
use crate::plan::LearningPlan;
use crate::profile::Profile;
use crate::progress::ProgressState;
use crate::turn::StructuredResult;

/// Unique identifier for a user session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The full conversational state for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,

    /// Display name captured during the welcome journey
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    /// Built incrementally; `None` until the first profile update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,

    /// Ranked results of the most recent matching call
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<CareerMatch>,

    /// The career the curriculum and cost analysis apply to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chosen_match: Option<CareerMatch>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<LearningPlan>,

    #[serde(default)]
    pub progress: ProgressState,

    /// Ordered utterance/result history
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<TurnRecord>,

    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl Session {
    pub fn new(id: SessionId) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_name: None,
            profile: None,
            matches: Vec::new(),
            chosen_match: None,
            plan: None,
            progress: ProgressState::default(),
            history: Vec::new(),
            created_at: now,
            last_active: now,
        }
    }

    /// Bump the last-active timestamp.
    pub fn touch(&mut self) {
        self.last_active = Utc::now();
    }

    /// Append an utterance/response pair and touch the session.
    pub fn record_turn(&mut self, utterance: &str, result: &StructuredResult) {
        self.history.push(TurnRecord {
            id: Uuid::new_v4().to_string(),
            utterance: utterance.to_string(),
            result: result.clone(),
            timestamp: Utc::now(),
        });
        self.touch();
    }

    /// The profile, creating an empty one on first access.
    pub fn profile_mut(&mut self) -> &mut Profile {
        self.profile.get_or_insert_with(Profile::default)
    }
}

/// One handled turn: what the user said and the structured response it
/// produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRecord {
    pub id: String,
    pub utterance: String,
    pub result: StructuredResult,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_turn_appends_and_touches() {
        use crate::turn::{Intent, ResultData, Status};

        let mut session = Session::new(SessionId::from("u1"));
        let before = session.last_active;
        let result = StructuredResult::success(
            Intent::StartJourney,
            ResultData::Welcome { user_name: None, next_steps: vec![] },
        );
        session.record_turn("hello", &result);

        assert_eq!(session.history.len(), 1);
        assert_eq!(session.history[0].result.intent, Intent::StartJourney);
        assert_eq!(session.history[0].result.status, Status::Success);
        assert!(session.last_active >= before);
    }

    #[test]
    fn profile_mut_creates_on_first_access() {
        let mut session = Session::new(SessionId::new());
        assert!(session.profile.is_none());
        session.profile_mut().skills.insert("html".into());
        assert!(session.profile.is_some());
    }
}
