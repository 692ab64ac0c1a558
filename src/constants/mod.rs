//! Year-scoped IRS and product constants consulted by every calculator

mod limits;
mod tax;
mod market;
mod annuity;
pub mod loader;

pub use limits::{ContributionLimits, AgeThresholds, CatchUpTier, AgeBandLimit};
pub use tax::{FilingStatus, TaxBracket, TaxSchedule, FederalTaxTables, EarlyWithdrawalRules};
pub use market::{EmployerMatchAssumptions, InvestmentDefaults, InputDefaults, ComparisonSettings};
pub use annuity::{
    AnnuityType, AnnuityRates, AnnuityParams, PayoutOption, PayoutFactors,
    SurrenderChargeSchedule, AnnuityRecommendations,
};
pub use loader::ConstantsError;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for one calendar year's calculator constants
///
/// Passed explicitly into every calculator that needs it; never a hidden
/// global. A different year is a different whole table, not a patched one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementConstants {
    /// Calendar year the table applies to
    pub year: i32,

    pub contribution_limits: ContributionLimits,
    pub age_thresholds: AgeThresholds,
    pub tax_tables: FederalTaxTables,
    pub employer_match: EmployerMatchAssumptions,
    pub investment_defaults: InvestmentDefaults,
    pub early_withdrawal: EarlyWithdrawalRules,
    pub comparison: ComparisonSettings,
    pub annuity: AnnuityParams,
    pub input_defaults: InputDefaults,
}

/// Years with built-in tables
const BUILT_IN_YEARS: [i32; 1] = [2025];

impl RetirementConstants {
    /// The built-in 2025 table (IRS Notice 2024-80 limits)
    pub fn default_2025() -> Self {
        Self {
            year: 2025,
            contribution_limits: ContributionLimits::limits_2025(),
            age_thresholds: AgeThresholds::thresholds_2025(),
            tax_tables: FederalTaxTables::tables_2025(),
            employer_match: EmployerMatchAssumptions::averages_2025(),
            investment_defaults: InvestmentDefaults::defaults_2025(),
            early_withdrawal: EarlyWithdrawalRules::rules_2025(),
            comparison: ComparisonSettings::defaults_2025(),
            annuity: AnnuityParams::params_2025(),
            input_defaults: InputDefaults::defaults_2025(),
        }
    }

    /// Built-in table for a calendar year
    pub fn for_year(year: i32) -> Result<Self, ConstantsError> {
        match year {
            2025 => Ok(Self::default_2025()),
            other => Err(ConstantsError::UnknownYear {
                year: other,
                supported: BUILT_IN_YEARS.to_vec(),
            }),
        }
    }

    /// Load a table from a JSON file (future-year overlays)
    pub fn from_json_path(path: &Path) -> Result<Self, ConstantsError> {
        loader::load_from_path(path)
    }

    /// Maximum employee deferral for an attained age: the base limit plus the
    /// age-appropriate catch-up amount
    pub fn max_deferral(&self, age: u8) -> f64 {
        let tier = self.age_thresholds.catch_up_tier(age);
        self.contribution_limits.employee + self.contribution_limits.catch_up_amount(tier)
    }

    /// Deferral-limit summary rows by age band
    pub fn limit_bands(&self) -> Vec<AgeBandLimit> {
        AgeBandLimit::bands(&self.contribution_limits, &self.age_thresholds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_values() {
        let constants = RetirementConstants::default_2025();

        assert_eq!(constants.year, 2025);
        assert_eq!(constants.contribution_limits.employee, 23_500.0);
        assert_eq!(constants.contribution_limits.total_additions, 70_000.0);
        assert_eq!(constants.early_withdrawal.penalty_free_age, 59.5);
        assert_eq!(constants.input_defaults.salary, 75_000.0);
        assert_eq!(constants.comparison.decision_band, 1_000.0);
    }

    #[test]
    fn test_max_deferral_by_age() {
        let constants = RetirementConstants::default_2025();

        assert_eq!(constants.max_deferral(30), 23_500.0);
        assert_eq!(constants.max_deferral(50), 31_000.0);
        assert_eq!(constants.max_deferral(59), 31_000.0);
        assert_eq!(constants.max_deferral(60), 34_750.0);
        assert_eq!(constants.max_deferral(63), 34_750.0);
        assert_eq!(constants.max_deferral(64), 31_000.0);
    }

    #[test]
    fn test_for_year() {
        assert!(RetirementConstants::for_year(2025).is_ok());

        let err = RetirementConstants::for_year(1999).unwrap_err();
        assert!(matches!(err, ConstantsError::UnknownYear { year: 1999, .. }));
    }
}
