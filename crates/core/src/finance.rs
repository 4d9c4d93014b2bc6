//! Derived cost and ROI figures for a learning plan.

use serde::{Deserialize, Serialize};

/// Financial summary for a learning plan. Derived on demand from the plan,
/// the profile's time budget, and market data — never cached across a
/// profile or plan change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Sum of the cheapest course per milestone
    pub total_cost: f64,

    /// Months to complete at the profile's weekly time budget
    pub duration_months: f64,

    pub monthly_cost: f64,
    pub weekly_cost: f64,

    /// Expected annual salary gain over the configured baseline
    pub projected_salary_delta: f64,

    /// Months of post-transition income to recoup the investment
    pub break_even_months: f64,
}
