//! Employer match calculator
//!
//! Employers match employer_match_percent of salary, but only on
//! contributions up to employer_match_limit percent of salary. Proration
//! keeps partial contributions earning a partial match.

use serde::{Deserialize, Serialize};

/// Match earned on a dollar contribution, prorated against the match limit
pub fn prorated_match(
    salary: f64,
    contribution: f64,
    match_percent: f64,
    match_limit: f64,
) -> f64 {
    // A zero limit means no match program; also avoids dividing by zero
    if match_limit <= 0.0 {
        return 0.0;
    }

    let matchable = salary * (match_limit / 100.0);
    contribution.min(matchable) * (match_percent / match_limit)
}

/// Match earned when contributing at or above the match limit
pub fn full_limit_match(salary: f64, match_percent: f64, match_limit: f64) -> f64 {
    if match_limit <= 0.0 {
        return 0.0;
    }

    salary * (match_limit / 100.0) * (match_percent / match_limit)
}

/// One-year employer match breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerMatchResult {
    pub salary: f64,

    pub contribution_percent: f64,

    pub employer_match_percent: f64,

    pub employer_match_limit: f64,

    /// Employee contribution for the year
    pub your_contribution: f64,

    /// Employer match earned on that contribution
    pub employer_match: f64,

    /// Contribution plus match
    pub total_annual: f64,

    /// Match as a percent of salary, one-decimal rounding
    pub free_money_percent: f64,

    /// Whether the contribution rate captures the full match
    pub is_maxing_match: bool,
}

/// Work out the employer match for one year at a given contribution rate
pub fn calculate_employer_match(
    salary: f64,
    contribution_percent: f64,
    employer_match_percent: f64,
    employer_match_limit: f64,
) -> EmployerMatchResult {
    let your_contribution = salary * (contribution_percent / 100.0);
    let employer_match = prorated_match(
        salary,
        your_contribution,
        employer_match_percent,
        employer_match_limit,
    );

    let free_money_percent = if salary > 0.0 {
        employer_match / salary * 100.0
    } else {
        0.0
    };
    let is_maxing_match = contribution_percent >= employer_match_limit;

    EmployerMatchResult {
        salary,
        contribution_percent,
        employer_match_percent,
        employer_match_limit,
        your_contribution: your_contribution.round(),
        employer_match: employer_match.round(),
        total_annual: (your_contribution + employer_match).round(),
        free_money_percent: (free_money_percent * 10.0).round() / 10.0,
        is_maxing_match,
    }
}
