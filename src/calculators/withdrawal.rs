//! 401k withdrawal tax and penalty calculator
//!
//! Applies flat federal and state percentages plus the early-withdrawal
//! penalty when the saver is under the penalty-free age. Bracket math is
//! out of scope here; callers pick the rate.

use serde::{Deserialize, Serialize};

use crate::constants::RetirementConstants;

/// Tax and penalty breakdown for a single withdrawal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalResult {
    pub withdrawal_amount: f64,

    /// Age at withdrawal; fractional ages are meaningful at the 59.5 line
    pub age: f64,

    pub federal_tax: f64,

    pub state_tax: f64,

    /// Early-withdrawal penalty; zero at or past the penalty-free age
    pub early_penalty: f64,

    pub total_taxes: f64,

    /// What the saver actually keeps
    pub net_amount: f64,

    /// Total taxes as a percent of the withdrawal, one-decimal rounding
    pub effective_tax_rate: f64,

    pub is_early_withdrawal: bool,
}

/// Work out taxes, penalty, and net proceeds for a withdrawal
pub fn calculate_withdrawal(
    withdrawal_amount: f64,
    age: f64,
    federal_tax_rate: f64,
    state_tax_rate: f64,
    constants: &RetirementConstants,
) -> WithdrawalResult {
    let rules = &constants.early_withdrawal;
    let is_early_withdrawal = rules.is_early(age);

    let federal_tax = withdrawal_amount * (federal_tax_rate / 100.0);
    let state_tax = withdrawal_amount * (state_tax_rate / 100.0);
    let early_penalty = if is_early_withdrawal {
        withdrawal_amount * rules.penalty_rate
    } else {
        0.0
    };

    let total_taxes = federal_tax + state_tax + early_penalty;
    let net_amount = withdrawal_amount - total_taxes;
    let effective_tax_rate = if withdrawal_amount > 0.0 {
        total_taxes / withdrawal_amount * 100.0
    } else {
        0.0
    };

    WithdrawalResult {
        withdrawal_amount,
        age,
        federal_tax: federal_tax.round(),
        state_tax: state_tax.round(),
        early_penalty: early_penalty.round(),
        total_taxes: total_taxes.round(),
        net_amount: net_amount.round(),
        effective_tax_rate: (effective_tax_rate * 10.0).round() / 10.0,
        is_early_withdrawal,
    }
}
