//! Annuity accumulation and level-payment math

use serde::{Deserialize, Serialize};

/// When payments begin relative to the accumulation phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutTiming {
    /// Payments start now, from the principal as-is
    Immediate,
    /// Principal accumulates for the deferral years first
    Deferred,
}

/// Accumulation and payout quote for one annuity purchase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnuityQuote {
    pub principal: f64,

    /// Annual rate, percent
    pub rate: f64,

    /// Deferral years before payments begin
    pub years: u32,

    /// Years of monthly payments
    pub payout_years: u32,

    pub timing: PayoutTiming,

    /// Principal grown through the deferral period
    pub future_value: f64,

    /// Level monthly payment that exhausts the payout base
    pub monthly_payment: f64,

    pub annual_payout: f64,

    pub total_payout: f64,
}

/// Level monthly payment amortizing a principal to zero
///
/// Standard annuity-immediate payment. Near-zero rates fall back to a
/// straight division so the formula cannot blow up; zero months pays
/// nothing.
pub fn level_payment(principal: f64, months: u32, monthly_rate: f64) -> f64 {
    if months == 0 {
        return 0.0;
    }
    if monthly_rate.abs() < 1e-10 {
        return principal / months as f64;
    }

    let factor = (1.0 + monthly_rate).powi(months as i32);
    principal * monthly_rate * factor / (factor - 1.0)
}

/// Quote an annuity purchase: grow the principal, then level it out
pub fn calculate_annuity(
    principal: f64,
    rate: f64,
    years: u32,
    payout_years: u32,
    timing: PayoutTiming,
) -> AnnuityQuote {
    let future_value = principal * (1.0 + rate / 100.0).powi(years as i32);

    let payout_base = match timing {
        PayoutTiming::Immediate => principal,
        PayoutTiming::Deferred => future_value,
    };

    let monthly_rate = rate / 100.0 / 12.0;
    let monthly_payment = level_payment(payout_base, payout_years * 12, monthly_rate);

    AnnuityQuote {
        principal,
        rate,
        years,
        payout_years,
        timing,
        future_value: future_value.round(),
        monthly_payment: monthly_payment.round(),
        annual_payout: (monthly_payment * 12.0).round(),
        total_payout: (monthly_payment * 12.0 * payout_years as f64).round(),
    }
}
