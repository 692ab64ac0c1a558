//! Saver profile records used as projection input

use serde::{Deserialize, Serialize};

use crate::constants::InputDefaults;

/// One saver's plan inputs for a growth projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaverProfile {
    /// Identifier for batch runs; 0 for ad hoc profiles
    #[serde(default)]
    pub saver_id: u32,

    /// Current attained age
    pub current_age: u8,

    /// Target retirement age
    pub retirement_age: u8,

    /// Annual salary
    pub salary: f64,

    /// Employee deferral as percent of salary
    pub contribution_percent: f64,

    /// Current 401k balance
    #[serde(default)]
    pub current_balance: f64,

    /// Employer match as percent of salary
    pub employer_match_percent: f64,

    /// Salary percentage the match applies up to
    pub employer_match_limit: f64,

    /// Expected annual return, percent
    pub expected_return: f64,
}

impl SaverProfile {
    /// Create a profile with explicit values
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        saver_id: u32,
        current_age: u8,
        retirement_age: u8,
        salary: f64,
        contribution_percent: f64,
        current_balance: f64,
        employer_match_percent: f64,
        employer_match_limit: f64,
        expected_return: f64,
    ) -> Self {
        Self {
            saver_id,
            current_age,
            retirement_age,
            salary,
            contribution_percent,
            current_balance,
            employer_match_percent,
            employer_match_limit,
            expected_return,
        }
    }

    /// Create a profile from a year table's input defaults
    pub fn from_defaults(defaults: &InputDefaults) -> Self {
        Self {
            saver_id: 0,
            current_age: defaults.current_age,
            retirement_age: defaults.retirement_age,
            salary: defaults.salary,
            contribution_percent: defaults.contribution_percent,
            current_balance: defaults.current_balance,
            employer_match_percent: defaults.employer_match_percent,
            employer_match_limit: defaults.employer_match_limit,
            expected_return: defaults.expected_return,
        }
    }

    /// Projection horizon in years; zero when already at or past retirement age
    pub fn years_to_retirement(&self) -> u32 {
        self.retirement_age.saturating_sub(self.current_age) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RetirementConstants;

    #[test]
    fn test_years_to_retirement() {
        let mut profile = SaverProfile::new(1, 30, 65, 75_000.0, 10.0, 0.0, 4.0, 6.0, 7.0);
        assert_eq!(profile.years_to_retirement(), 35);

        profile.current_age = 65;
        assert_eq!(profile.years_to_retirement(), 0);

        profile.current_age = 70;
        assert_eq!(profile.years_to_retirement(), 0);
    }

    #[test]
    fn test_from_defaults() {
        let constants = RetirementConstants::default_2025();
        let profile = SaverProfile::from_defaults(&constants.input_defaults);

        assert_eq!(profile.current_age, 30);
        assert_eq!(profile.retirement_age, 65);
        assert_eq!(profile.salary, 75_000.0);
        assert_eq!(profile.contribution_percent, 10.0);
        assert_eq!(profile.years_to_retirement(), 35);
    }
}
