//! Growth projection engine
//!
//! Projects a 401k balance year by year to retirement age. Each year the
//! employee deferral is capped at the IRS limit for the saver's age, the
//! employer match is prorated against the match limit, and the balance
//! compounds monthly with deposits landing after each month's return.

use serde::{Deserialize, Serialize};

use crate::calculators::{full_limit_match, prorated_match};
use crate::constants::RetirementConstants;
use crate::saver::SaverProfile;

use super::schedule::{GrowthProjection, YearlyBreakdown};

/// Engine settings independent of any single saver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Calendar year assigned to the first projection year
    pub base_year: i32,
}

/// Projects saver balances under a single year's constants
pub struct GrowthProjector {
    constants: RetirementConstants,
    config: ProjectionConfig,
}

impl GrowthProjector {
    /// Create a projector with given constants and config
    pub fn new(constants: RetirementConstants, config: ProjectionConfig) -> Self {
        Self { constants, config }
    }

    /// Run the full projection for one saver
    pub fn project(&self, profile: &SaverProfile) -> GrowthProjection {
        let years_to_retirement = profile.years_to_retirement();
        let monthly_return = profile.expected_return / 100.0 / 12.0;
        let desired_contribution = profile.salary * (profile.contribution_percent / 100.0);

        let mut balance = profile.current_balance;
        let mut total_contributions = 0.0;
        let mut total_employer_match = 0.0;
        let mut years = Vec::with_capacity(years_to_retirement as usize);

        for i in 0..years_to_retirement {
            let age = profile.current_age + i as u8;
            let year = self.config.base_year + i as i32;

            // Deferral capped at the IRS limit for this year's age
            let annual_contribution = desired_contribution.min(self.constants.max_deferral(age));
            let employer_match = prorated_match(
                profile.salary,
                annual_contribution,
                profile.employer_match_percent,
                profile.employer_match_limit,
            );

            let monthly_deposit = (annual_contribution + employer_match) / 12.0;
            let year_start_balance = balance;
            balance = compound_monthly(balance, monthly_deposit, 12, monthly_return);

            let growth = balance - year_start_balance - annual_contribution - employer_match;

            // Totals accumulate unrounded; rows are rounded for presentation
            total_contributions += annual_contribution;
            total_employer_match += employer_match;

            years.push(YearlyBreakdown {
                age,
                year,
                contribution: annual_contribution.round(),
                employer_match: employer_match.round(),
                growth: growth.round(),
                balance: balance.round(),
            });
        }

        let total_growth =
            balance - profile.current_balance - total_contributions - total_employer_match;

        // Headline figures stay nominal: the desired deferral before any cap,
        // and the match earned when contributing at or above the match limit
        let nominal_match = full_limit_match(
            profile.salary,
            profile.employer_match_percent,
            profile.employer_match_limit,
        );

        GrowthProjection {
            saver_id: profile.saver_id,
            current_age: profile.current_age,
            retirement_age: profile.retirement_age,
            years_to_retirement,
            starting_balance: profile.current_balance,
            annual_contribution: desired_contribution.round(),
            employer_match: nominal_match.round(),
            total_annual_addition: (desired_contribution + nominal_match).round(),
            projected_balance: balance.round(),
            total_contributions: total_contributions.round(),
            total_employer_match: total_employer_match.round(),
            total_growth: total_growth.round(),
            years,
        }
    }
}

/// Grow a balance month by month, depositing after each month's return
pub fn compound_monthly(
    starting_balance: f64,
    monthly_deposit: f64,
    months: u32,
    monthly_rate: f64,
) -> f64 {
    let mut balance = starting_balance;
    for _ in 0..months {
        balance = balance * (1.0 + monthly_rate) + monthly_deposit;
    }
    balance
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn projector() -> GrowthProjector {
        GrowthProjector::new(
            RetirementConstants::default_2025(),
            ProjectionConfig { base_year: 2025 },
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn profile(
        current_age: u8,
        retirement_age: u8,
        salary: f64,
        contribution_percent: f64,
        current_balance: f64,
        employer_match_percent: f64,
        employer_match_limit: f64,
        expected_return: f64,
    ) -> SaverProfile {
        SaverProfile::new(
            1,
            current_age,
            retirement_age,
            salary,
            contribution_percent,
            current_balance,
            employer_match_percent,
            employer_match_limit,
            expected_return,
        )
    }

    #[test]
    fn test_zero_return_is_additive() {
        // 6000 deferral + 1800 match per year, no growth
        let result = projector().project(&profile(30, 40, 60_000.0, 10.0, 50_000.0, 3.0, 6.0, 0.0));

        assert_eq!(result.years_to_retirement, 10);
        assert_eq!(result.projected_balance, 128_000.0);
        assert_eq!(result.total_contributions, 60_000.0);
        assert_eq!(result.total_employer_match, 18_000.0);
        assert_eq!(result.total_growth, 0.0);

        assert_eq!(result.years[0].contribution, 6_000.0);
        assert_eq!(result.years[0].employer_match, 1_800.0);
        assert_eq!(result.years[0].growth, 0.0);
        assert_eq!(result.years[0].balance, 57_800.0);
    }

    #[test]
    fn test_zero_years_passes_balance_through() {
        let result =
            projector().project(&profile(65, 65, 90_000.0, 10.0, 400_000.0, 4.0, 6.0, 7.0));

        assert_eq!(result.years_to_retirement, 0);
        assert!(result.years.is_empty());
        assert_eq!(result.projected_balance, 400_000.0);
        assert_eq!(result.total_contributions, 0.0);
        assert_eq!(result.total_growth, 0.0);
    }

    #[test]
    fn test_deferral_capped_but_headline_nominal() {
        // 10% of 400k wants 40k but the age-30 cap is 23500
        let result = projector().project(&profile(30, 35, 400_000.0, 10.0, 0.0, 3.0, 6.0, 0.0));

        assert_eq!(result.years[0].contribution, 23_500.0);
        assert_eq!(result.years[0].employer_match, 11_750.0);

        assert_eq!(result.annual_contribution, 40_000.0);
        assert_eq!(result.employer_match, 12_000.0);
        assert_eq!(result.total_annual_addition, 52_000.0);
    }

    #[test]
    fn test_cap_follows_catch_up_windows() {
        // Ages 58 through 65; the 60-63 window gets the super catch-up
        let result = projector().project(&profile(58, 66, 500_000.0, 20.0, 0.0, 0.0, 6.0, 0.0));

        assert_eq!(result.years.len(), 8);
        assert_eq!(result.years[0].age, 58);
        assert_eq!(result.years[0].contribution, 31_000.0);
        assert_eq!(result.years[1].contribution, 31_000.0);
        assert_eq!(result.years[2].age, 60);
        assert_eq!(result.years[2].contribution, 34_750.0);
        assert_eq!(result.years[5].age, 63);
        assert_eq!(result.years[5].contribution, 34_750.0);
        assert_eq!(result.years[6].age, 64);
        assert_eq!(result.years[6].contribution, 31_000.0);
    }

    #[test]
    fn test_long_horizon_projection() {
        let result = projector().project(&profile(30, 65, 75_000.0, 10.0, 50_000.0, 4.0, 6.0, 7.0));

        assert_eq!(result.years_to_retirement, 35);
        assert_eq!(result.years.len(), 35);
        assert_eq!(result.years[0].year, 2025);
        assert_eq!(result.years[34].year, 2059);

        assert_eq!(result.total_contributions, 262_500.0);
        assert_eq!(result.total_employer_match, 105_000.0);
        assert!(result.projected_balance > 2_000_000.0);
        assert!(result.projected_balance < 2_300_000.0);

        let last = result.final_year().unwrap();
        assert_eq!(last.balance, result.projected_balance);
        assert_eq!(last.age, 64);
    }

    #[test]
    fn test_repeat_runs_are_identical() {
        let p = profile(42, 65, 91_000.0, 9.0, 130_000.0, 4.0, 6.0, 6.8);
        let first = projector().project(&p);
        let second = projector().project(&p);

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_compound_monthly() {
        assert_relative_eq!(
            compound_monthly(1_000.0, 0.0, 12, 0.01),
            1_000.0 * 1.01_f64.powi(12),
            epsilon = 1e-9
        );
        assert_eq!(compound_monthly(0.0, 100.0, 3, 0.0), 300.0);
        assert_eq!(compound_monthly(500.0, 0.0, 0, 0.05), 500.0);
    }
}
