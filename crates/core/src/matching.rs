//! Career matching results.

use serde::{Deserialize, Serialize};

use crate::market::MarketData;

/// A scored candidate career path with identified skill gaps.
///
/// Produced fresh by each matching call and never mutated afterwards —
/// a new matching call replaces the whole set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerMatch {
    /// Stable catalog identifier, e.g. `"frontend-developer"`
    pub career_id: String,

    /// Human-readable career title
    pub title: String,

    /// Weighted skill overlap, clamped to `[0, 1]`
    pub fit_score: f64,

    /// Required skills the profile lacks, most impactful first
    pub missing_skills: Vec<String>,

    /// Market reference data for this career
    pub market: MarketData,
}
