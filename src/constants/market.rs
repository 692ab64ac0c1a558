//! Market-average assumptions, input defaults, and comparison settings

use serde::{Deserialize, Serialize};

/// Market-average employer match data, for context in match results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerMatchAssumptions {
    /// Average employer match as percent of salary
    pub average_match_percent: f64,

    /// Average salary percentage the match applies up to
    pub average_match_limit: f64,

    /// Average vesting period in years
    pub vesting_years: u8,
}

impl EmployerMatchAssumptions {
    pub fn averages_2025() -> Self {
        Self {
            average_match_percent: 4.5,
            average_match_limit: 6.0,
            vesting_years: 4,
        }
    }
}

/// Long-run investment assumptions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentDefaults {
    /// Historical average annual return, percent
    pub annual_return: f64,

    /// Average inflation, percent
    pub inflation_rate: f64,

    pub retirement_age: u8,
    pub life_expectancy: u8,
}

impl InvestmentDefaults {
    pub fn defaults_2025() -> Self {
        Self {
            annual_return: 7.0,
            inflation_rate: 3.0,
            retirement_age: 65,
            life_expectancy: 90,
        }
    }

    /// Default payout horizon from retirement to life expectancy
    pub fn default_payout_years(&self) -> u32 {
        self.life_expectancy.saturating_sub(self.retirement_age) as u32
    }
}

/// Fallback input values used by presentation layers when a field is absent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDefaults {
    pub current_age: u8,
    pub salary: f64,
    pub contribution_percent: f64,
    pub current_balance: f64,
    pub employer_match_percent: f64,
    pub employer_match_limit: f64,
    pub expected_return: f64,
    pub retirement_age: u8,
}

impl InputDefaults {
    pub fn defaults_2025() -> Self {
        Self {
            current_age: 30,
            salary: 75_000.0,
            contribution_percent: 10.0,
            current_balance: 50_000.0,
            employer_match_percent: 4.0,
            employer_match_limit: 6.0,
            expected_return: 7.0,
            retirement_age: 65,
        }
    }
}

/// Settings for the Roth vs Traditional decision rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonSettings {
    /// Dead zone around zero, in whole units: after-tax gaps inside the band
    /// are reported as a tie rather than a winner
    pub decision_band: f64,
}

impl ComparisonSettings {
    pub fn defaults_2025() -> Self {
        Self {
            decision_band: 1_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_payout_years() {
        let defaults = InvestmentDefaults::defaults_2025();
        assert_eq!(defaults.default_payout_years(), 25);
    }
}
