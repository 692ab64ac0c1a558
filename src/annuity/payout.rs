//! Payout option quotes
//!
//! A base level payment adjusted by the payout option factor. The factors
//! are fixed table multipliers standing in for a full mortality-priced
//! quote: guarantees beyond a single life cost a haircut.

use serde::{Deserialize, Serialize};

use crate::constants::{PayoutOption, RetirementConstants};

use super::value::level_payment;

/// Monthly income under a chosen payout option
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutQuote {
    pub principal: f64,

    /// Annual rate, percent
    pub rate: f64,

    pub payout_years: u32,

    pub option: PayoutOption,

    /// Factor applied to the single-life payment
    pub factor: f64,

    pub monthly_payment: f64,

    pub annual_payout: f64,

    pub total_payout: f64,
}

/// Quote monthly income for a payout option
pub fn calculate_payout(
    principal: f64,
    rate: f64,
    payout_years: u32,
    option: PayoutOption,
    constants: &RetirementConstants,
) -> PayoutQuote {
    let base = level_payment(principal, payout_years * 12, rate / 100.0 / 12.0);
    let factor = constants.annuity.payout_factors.factor(option);
    let monthly_payment = base * factor;

    PayoutQuote {
        principal,
        rate,
        payout_years,
        option,
        factor,
        monthly_payment: monthly_payment.round(),
        annual_payout: (monthly_payment * 12.0).round(),
        total_payout: (monthly_payment * 12.0 * payout_years as f64).round(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constants() -> RetirementConstants {
        RetirementConstants::default_2025()
    }

    #[test]
    fn test_life_only_keeps_full_payment() {
        let quote = calculate_payout(120_000.0, 0.0, 10, PayoutOption::LifeOnly, &constants());

        assert_eq!(quote.factor, 1.0);
        assert_eq!(quote.monthly_payment, 1_000.0);
        assert_eq!(quote.total_payout, 120_000.0);
    }

    #[test]
    fn test_period_certain_haircut() {
        let quote = calculate_payout(
            120_000.0,
            0.0,
            10,
            PayoutOption::LifeWithPeriodCertain,
            &constants(),
        );

        assert_eq!(quote.factor, 0.92);
        assert_eq!(quote.monthly_payment, 920.0);
        assert_eq!(quote.annual_payout, 11_040.0);
    }

    #[test]
    fn test_joint_survivor_haircut() {
        let quote = calculate_payout(120_000.0, 0.0, 10, PayoutOption::JointSurvivor, &constants());

        assert_eq!(quote.factor, 0.85);
        assert_eq!(quote.monthly_payment, 850.0);
    }

    #[test]
    fn test_option_ordering_at_market_rate() {
        let life = calculate_payout(250_000.0, 5.5, 20, PayoutOption::LifeOnly, &constants());
        let period = calculate_payout(
            250_000.0,
            5.5,
            20,
            PayoutOption::LifeWithPeriodCertain,
            &constants(),
        );
        let joint = calculate_payout(250_000.0, 5.5, 20, PayoutOption::JointSurvivor, &constants());

        assert!(life.monthly_payment > period.monthly_payment);
        assert!(period.monthly_payment > joint.monthly_payment);
    }
}
