//! Cost calculator — derives cost and ROI figures for a learning plan.
//!
//! Costing policy: when several courses are attached to a milestone the
//! cheapest one is counted, while all remain attached for display. The
//! summary is derived on demand and never cached — a profile or plan
//! change invalidates nothing because nothing is stored.

use skillsphere_core::error::ToolError;
use skillsphere_core::finance::FinancialSummary;
use skillsphere_core::market::MarketData;
use skillsphere_core::plan::LearningPlan;
use skillsphere_core::profile::Profile;

/// Average weeks per month used for time-based breakdowns.
const WEEKS_PER_MONTH: f64 = 4.33;

/// Floor for the monthly salary delta in the break-even division.
const EPSILON_MONTHLY_DELTA: f64 = 1e-6;

/// Computes financial summaries from a plan, the profile's time budget,
/// and the chosen career's market data.
pub struct CostCalculator {
    /// Assumed current annual salary when the user supplies none
    baseline_salary: f64,
}

impl CostCalculator {
    pub fn new(baseline_salary: f64) -> Self {
        Self { baseline_salary }
    }

    /// Derive the financial summary.
    ///
    /// Fails with `InsufficientData` when the profile has no positive
    /// weekly time budget or no market data is supplied — the calculator
    /// never divides by zero or assumes a budget.
    pub fn calculate(
        &self,
        plan: &LearningPlan,
        profile: &Profile,
        market: Option<&MarketData>,
    ) -> Result<FinancialSummary, ToolError> {
        let weekly_budget = profile
            .weekly_time_budget
            .filter(|h| *h > 0.0)
            .ok_or_else(|| ToolError::InsufficientData {
                what: "weekly time budget".into(),
            })?;

        let market = market.ok_or_else(|| ToolError::InsufficientData {
            what: "market data".into(),
        })?;

        // Cheapest attached course per milestone; course-less milestones
        // cost nothing.
        let total_cost: f64 = plan
            .milestones()
            .map(|m| {
                m.courses
                    .iter()
                    .map(|c| c.price)
                    .fold(f64::INFINITY, f64::min)
            })
            .filter(|price| price.is_finite())
            .sum();

        let duration_weeks = plan.total_hours() / weekly_budget;
        let duration_months = duration_weeks / WEEKS_PER_MONTH;

        let monthly_cost = total_cost / duration_months.max(1.0);
        let weekly_cost = monthly_cost / WEEKS_PER_MONTH;

        let projected_salary_delta = market.median_salary - self.baseline_salary;
        let break_even_months =
            total_cost / (projected_salary_delta / 12.0).max(EPSILON_MONTHLY_DELTA);

        Ok(FinancialSummary {
            total_cost,
            duration_months,
            monthly_cost,
            weekly_cost,
            projected_salary_delta,
            break_even_months,
        })
    }
}

impl Default for CostCalculator {
    fn default() -> Self {
        Self::new(45_000.0)
    }
}
