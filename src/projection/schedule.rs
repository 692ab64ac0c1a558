//! Projection output records

use serde::{Deserialize, Serialize};

/// One projection year: deposits, growth, and the ending balance
///
/// Dollar fields are rounded to whole dollars for presentation; the
/// engine keeps its running balance at full precision between years.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyBreakdown {
    /// Attained age at the start of the year
    pub age: u8,

    /// Calendar year
    pub year: i32,

    /// Employee deferral deposited during the year, after the IRS cap
    pub contribution: f64,

    /// Employer match deposited during the year
    pub employer_match: f64,

    /// Investment growth earned during the year
    pub growth: f64,

    /// Balance at the end of the year
    pub balance: f64,
}

/// Full growth projection for one saver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthProjection {
    pub saver_id: u32,

    pub current_age: u8,

    pub retirement_age: u8,

    pub years_to_retirement: u32,

    /// Balance the projection starts from
    pub starting_balance: f64,

    /// First-year employee deferral before any IRS cap
    pub annual_contribution: f64,

    /// Employer match earned when contributing at or above the match limit
    pub employer_match: f64,

    /// Annual deferral plus full match, before caps
    pub total_annual_addition: f64,

    /// Balance at retirement
    pub projected_balance: f64,

    /// Employee deferrals over the whole projection
    pub total_contributions: f64,

    /// Employer match over the whole projection
    pub total_employer_match: f64,

    /// Investment growth over the whole projection
    pub total_growth: f64,

    /// Year-by-year detail
    pub years: Vec<YearlyBreakdown>,
}

impl GrowthProjection {
    /// Last projection year, if any years were projected
    pub fn final_year(&self) -> Option<&YearlyBreakdown> {
        self.years.last()
    }
}
