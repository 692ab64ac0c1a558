//! Surrender cost calculator
//!
//! Surrendering inside the charge period costs a percentage of the
//! contract value, and surrendering before the penalty-free age adds the
//! early-withdrawal penalty on any gain. The two charges are separate and
//! the penalty never applies to a loss.

use serde::{Deserialize, Serialize};

use crate::constants::RetirementConstants;

/// Cost breakdown for surrendering an annuity contract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurrenderResult {
    /// Premium originally paid in
    pub principal: f64,

    /// Contract value at surrender
    pub current_value: f64,

    pub years_held: u32,

    pub age: f64,

    /// Charge rate from the schedule, as a fraction
    pub surrender_charge_rate: f64,

    pub surrender_charge: f64,

    /// Early-withdrawal penalty on the gain
    pub early_penalty: f64,

    pub total_deductions: f64,

    /// What the owner walks away with
    pub net_amount: f64,

    pub is_early_withdrawal: bool,

    pub in_surrender_period: bool,
}

/// Work out what surrendering the contract today costs
pub fn calculate_surrender(
    principal: f64,
    current_value: f64,
    years_held: u32,
    age: f64,
    constants: &RetirementConstants,
) -> SurrenderResult {
    let schedule = &constants.annuity.surrender_charges;
    let rules = &constants.early_withdrawal;

    let surrender_charge_rate = schedule.get_rate(years_held);
    let surrender_charge = current_value * surrender_charge_rate;

    // Penalty hits the gain only, never the returned principal
    let gain = (current_value - principal).max(0.0);
    let is_early_withdrawal = rules.is_early(age);
    let early_penalty = if is_early_withdrawal {
        gain * rules.penalty_rate
    } else {
        0.0
    };

    let total_deductions = surrender_charge + early_penalty;

    SurrenderResult {
        principal,
        current_value,
        years_held,
        age,
        surrender_charge_rate,
        surrender_charge: surrender_charge.round(),
        early_penalty: early_penalty.round(),
        total_deductions: total_deductions.round(),
        net_amount: (current_value - total_deductions).round(),
        is_early_withdrawal,
        in_surrender_period: schedule.in_charge_period(years_held),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constants() -> RetirementConstants {
        RetirementConstants::default_2025()
    }

    #[test]
    fn test_early_surrender_with_gain() {
        let result = calculate_surrender(100_000.0, 110_000.0, 2, 55.0, &constants());

        assert_eq!(result.surrender_charge_rate, 0.06);
        assert_eq!(result.surrender_charge, 6_600.0);
        assert_eq!(result.early_penalty, 1_000.0);
        assert_eq!(result.total_deductions, 7_600.0);
        assert_eq!(result.net_amount, 102_400.0);
        assert!(result.is_early_withdrawal);
        assert!(result.in_surrender_period);
    }

    #[test]
    fn test_no_penalty_past_penalty_free_age() {
        let result = calculate_surrender(100_000.0, 110_000.0, 2, 62.0, &constants());

        assert_eq!(result.early_penalty, 0.0);
        assert_eq!(result.surrender_charge, 6_600.0);
        assert_eq!(result.net_amount, 103_400.0);
    }

    #[test]
    fn test_loss_never_draws_penalty() {
        let result = calculate_surrender(100_000.0, 90_000.0, 3, 50.0, &constants());

        assert!(result.is_early_withdrawal);
        assert_eq!(result.early_penalty, 0.0);
        assert_eq!(result.surrender_charge, 4_500.0);
        assert_eq!(result.net_amount, 85_500.0);
    }

    #[test]
    fn test_out_of_surrender_period() {
        let result = calculate_surrender(100_000.0, 150_000.0, 9, 70.0, &constants());

        assert_eq!(result.surrender_charge_rate, 0.0);
        assert_eq!(result.surrender_charge, 0.0);
        assert_eq!(result.early_penalty, 0.0);
        assert_eq!(result.net_amount, 150_000.0);
        assert!(!result.in_surrender_period);
    }
}
