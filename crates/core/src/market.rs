//! Market demand reference data attached to careers.

use serde::{Deserialize, Serialize};

/// Labor-market figures for one career, sourced from the reference data
/// provider. Read-only for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    /// Median annual salary in the target market
    pub median_salary: f64,

    /// Relative demand score (higher = more demand)
    pub demand_score: f64,

    /// Job postings per month, rough order of magnitude
    pub job_posting_frequency: f64,
}
