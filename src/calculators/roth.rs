//! Roth vs Traditional 401k comparison
//!
//! Traditional contributions go in pre-tax and the balance is taxed at
//! withdrawal; Roth contributions go in after-tax and grow tax-free. Both
//! sides compound the same way, so the decision comes down to the tax
//! rates on each end.

use serde::{Deserialize, Serialize};

use crate::constants::RetirementConstants;
use crate::projection::compound_monthly;

/// Which account type comes out ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetterOption {
    Roth,
    Traditional,
    Same,
}

/// Side-by-side Roth and Traditional outcomes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RothComparison {
    /// Traditional balance at retirement, before tax
    pub traditional_balance: f64,

    /// Roth balance at retirement
    pub roth_balance: f64,

    /// Traditional balance after retirement tax
    pub traditional_after_tax: f64,

    /// Roth balance after tax; equals roth_balance since tax was paid up front
    pub roth_after_tax: f64,

    /// Tax deferred up front by going Traditional, summed over the horizon
    pub tax_savings_now: f64,

    /// Tax due on the Traditional balance at retirement
    pub tax_in_retirement: f64,

    pub better_option: BetterOption,

    /// Absolute after-tax gap between the two options
    pub difference: f64,
}

/// Compare Roth and Traditional treatment of the same annual contribution
pub fn compare_roth_vs_traditional(
    annual_contribution: f64,
    years_to_retirement: u32,
    expected_return: f64,
    current_tax_rate: f64,
    retirement_tax_rate: f64,
    constants: &RetirementConstants,
) -> RothComparison {
    let monthly_return = expected_return / 100.0 / 12.0;
    let months = years_to_retirement * 12;

    let traditional_balance =
        compound_monthly(0.0, annual_contribution / 12.0, months, monthly_return);
    let traditional_after_tax = traditional_balance * (1.0 - retirement_tax_rate / 100.0);

    // Roth invests less up front, then keeps everything
    let roth_contribution = annual_contribution * (1.0 - current_tax_rate / 100.0);
    let roth_balance = compound_monthly(0.0, roth_contribution / 12.0, months, monthly_return);

    let tax_savings_now =
        annual_contribution * (current_tax_rate / 100.0) * years_to_retirement as f64;
    let tax_in_retirement = traditional_balance * (retirement_tax_rate / 100.0);

    // Gaps inside the decision band are called a wash
    let band = constants.comparison.decision_band;
    let difference = roth_balance - traditional_after_tax;
    let better_option = if difference > band {
        BetterOption::Roth
    } else if difference < -band {
        BetterOption::Traditional
    } else {
        BetterOption::Same
    };

    RothComparison {
        traditional_balance: traditional_balance.round(),
        roth_balance: roth_balance.round(),
        traditional_after_tax: traditional_after_tax.round(),
        roth_after_tax: roth_balance.round(),
        tax_savings_now: tax_savings_now.round(),
        tax_in_retirement: tax_in_retirement.round(),
        better_option,
        difference: difference.abs().round(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constants() -> RetirementConstants {
        RetirementConstants::default_2025()
    }

    #[test]
    fn test_equal_rates_is_a_wash() {
        let result = compare_roth_vs_traditional(10_000.0, 30, 7.0, 22.0, 22.0, &constants());

        assert_eq!(result.better_option, BetterOption::Same);
        assert_eq!(result.difference, 0.0);
        assert_eq!(result.roth_after_tax, result.roth_balance);
    }

    #[test]
    fn test_higher_retirement_tax_favors_roth() {
        let result = compare_roth_vs_traditional(10_000.0, 30, 7.0, 0.0, 22.0, &constants());

        assert_eq!(result.better_option, BetterOption::Roth);
        assert!(result.difference > 100_000.0);
        assert_eq!(result.roth_balance, result.traditional_balance);
    }

    #[test]
    fn test_higher_current_tax_favors_traditional() {
        let result = compare_roth_vs_traditional(10_000.0, 20, 6.0, 35.0, 10.0, &constants());

        assert_eq!(result.better_option, BetterOption::Traditional);
        assert!(result.traditional_after_tax > result.roth_balance);
    }

    #[test]
    fn test_zero_years() {
        let result = compare_roth_vs_traditional(10_000.0, 0, 7.0, 22.0, 15.0, &constants());

        assert_eq!(result.traditional_balance, 0.0);
        assert_eq!(result.roth_balance, 0.0);
        assert_eq!(result.tax_savings_now, 0.0);
        assert_eq!(result.better_option, BetterOption::Same);
    }

    #[test]
    fn test_decision_band_is_configurable() {
        // One year at zero return: traditional nets 12000, Roth nets 11400
        let mut constants = constants();
        let result = compare_roth_vs_traditional(12_000.0, 1, 0.0, 5.0, 0.0, &constants);
        assert_eq!(result.better_option, BetterOption::Same);
        assert_eq!(result.difference, 600.0);

        constants.comparison.decision_band = 500.0;
        let result = compare_roth_vs_traditional(12_000.0, 1, 0.0, 5.0, 0.0, &constants);
        assert_eq!(result.better_option, BetterOption::Traditional);
    }

    #[test]
    fn test_display_figures() {
        let result = compare_roth_vs_traditional(10_000.0, 10, 0.0, 20.0, 25.0, &constants());

        // 10 years of flat 10000 contributions
        assert_eq!(result.traditional_balance, 100_000.0);
        assert_eq!(result.traditional_after_tax, 75_000.0);
        assert_eq!(result.roth_balance, 80_000.0);
        assert_eq!(result.tax_savings_now, 20_000.0);
        assert_eq!(result.tax_in_retirement, 25_000.0);
        assert_eq!(result.better_option, BetterOption::Roth);
        assert_eq!(result.difference, 5_000.0);
    }
}
