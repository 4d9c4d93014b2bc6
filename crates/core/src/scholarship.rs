//! Scholarship and financial-aid listings.

use serde::{Deserialize, Serialize};

/// One scholarship opportunity from the reference data provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scholarship {
    pub name: String,

    /// Award description, e.g. `"$1,000 - $5,000"` or `"Up to 100% course cost"`
    pub amount: String,

    pub eligibility: String,
    pub deadline: String,
    pub url: String,
}
