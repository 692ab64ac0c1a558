//! Catch-up contribution calculator
//!
//! Savers aged 50+ may defer beyond the base limit, with a larger super
//! catch-up inside the 60-63 window. Reports the extra headroom both as a
//! simple sum and as a compounded projection; the two are different lenses
//! on the same deferrals.

use serde::{Deserialize, Serialize};

use crate::constants::{CatchUpTier, RetirementConstants};
use crate::projection::compound_monthly;

/// Catch-up eligibility and the value of using it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatchUpResult {
    pub age: u8,

    /// Base employee deferral limit
    pub base_limit: f64,

    /// Extra deferral allowed at this age
    pub catch_up_amount: f64,

    /// Base plus catch-up
    pub total_limit: f64,

    pub tier: CatchUpTier,

    pub is_super_catch_up: bool,

    /// Catch-up dollars deferred over the horizon, undiscounted
    pub additional_savings: f64,

    /// The same deferrals compounded monthly to retirement, rounded
    pub projected_growth: f64,
}

/// Work out catch-up headroom for an age and project its value
pub fn calculate_catch_up(
    age: u8,
    years_to_retirement: u32,
    expected_return: f64,
    constants: &RetirementConstants,
) -> CatchUpResult {
    let limits = &constants.contribution_limits;
    let tier = constants.age_thresholds.catch_up_tier(age);
    let catch_up_amount = limits.catch_up_amount(tier);

    let additional_savings = catch_up_amount * years_to_retirement as f64;

    let monthly_return = expected_return / 100.0 / 12.0;
    let projected_growth = compound_monthly(
        0.0,
        catch_up_amount / 12.0,
        years_to_retirement * 12,
        monthly_return,
    );

    CatchUpResult {
        age,
        base_limit: limits.employee,
        catch_up_amount,
        total_limit: limits.employee + catch_up_amount,
        tier,
        is_super_catch_up: tier == CatchUpTier::Super,
        additional_savings,
        projected_growth: projected_growth.round(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constants() -> RetirementConstants {
        RetirementConstants::default_2025()
    }

    #[test]
    fn test_under_fifty_has_no_catch_up() {
        let result = calculate_catch_up(45, 20, 7.0, &constants());

        assert_eq!(result.tier, CatchUpTier::None);
        assert_eq!(result.catch_up_amount, 0.0);
        assert_eq!(result.total_limit, 23_500.0);
        assert_eq!(result.additional_savings, 0.0);
        assert_eq!(result.projected_growth, 0.0);
        assert!(!result.is_super_catch_up);
    }

    #[test]
    fn test_standard_catch_up() {
        let result = calculate_catch_up(52, 13, 7.0, &constants());

        assert_eq!(result.tier, CatchUpTier::Standard);
        assert_eq!(result.catch_up_amount, 7_500.0);
        assert_eq!(result.total_limit, 31_000.0);
        assert_eq!(result.additional_savings, 97_500.0);
        assert!(result.projected_growth > result.additional_savings);
    }

    #[test]
    fn test_super_catch_up_window() {
        let result = calculate_catch_up(61, 5, 7.0, &constants());

        assert_eq!(result.tier, CatchUpTier::Super);
        assert!(result.is_super_catch_up);
        assert_eq!(result.catch_up_amount, 11_250.0);
        assert_eq!(result.total_limit, 34_750.0);
        assert_eq!(result.additional_savings, 56_250.0);

        // 937.50/month for 60 months at 7%
        assert!((result.projected_growth - 67_118.0).abs() <= 5.0);
    }

    #[test]
    fn test_back_to_standard_after_window() {
        let result = calculate_catch_up(64, 1, 7.0, &constants());

        assert_eq!(result.tier, CatchUpTier::Standard);
        assert_eq!(result.catch_up_amount, 7_500.0);
        assert!(!result.is_super_catch_up);
    }

    #[test]
    fn test_simple_vs_compounded_at_zero_return() {
        let result = calculate_catch_up(55, 10, 0.0, &constants());

        assert_eq!(result.additional_savings, 75_000.0);
        assert_eq!(result.projected_growth, 75_000.0);
    }
}
