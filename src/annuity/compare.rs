//! Side-by-side comparison of the three annuity types

use serde::{Deserialize, Serialize};

use crate::constants::{AnnuityType, RetirementConstants};

use super::value::{calculate_annuity, PayoutTiming};

/// One annuity type quoted at its average market rate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnuityTypeQuote {
    pub annuity_type: AnnuityType,

    pub label: String,

    /// Average annual rate for the type, percent
    pub rate: f64,

    pub future_value: f64,

    pub monthly_payment: f64,
}

/// All three types quoted on the same purchase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnuityComparison {
    pub principal: f64,

    pub years: u32,

    pub payout_years: u32,

    pub fixed: AnnuityTypeQuote,

    pub variable: AnnuityTypeQuote,

    pub indexed: AnnuityTypeQuote,

    /// Which type to pick for safety
    pub safest: String,

    /// Which type to pick for growth
    pub highest_growth: String,
}

fn quote_type(
    annuity_type: AnnuityType,
    principal: f64,
    years: u32,
    payout_years: u32,
    constants: &RetirementConstants,
) -> AnnuityTypeQuote {
    let rate = constants.annuity.rates(annuity_type).average;
    let quote = calculate_annuity(principal, rate, years, payout_years, PayoutTiming::Deferred);

    AnnuityTypeQuote {
        annuity_type,
        label: annuity_type.label().to_string(),
        rate,
        future_value: quote.future_value,
        monthly_payment: quote.monthly_payment,
    }
}

/// Quote fixed, variable, and indexed annuities on the same purchase
pub fn compare_annuities(
    principal: f64,
    years: u32,
    payout_years: u32,
    constants: &RetirementConstants,
) -> AnnuityComparison {
    AnnuityComparison {
        principal,
        years,
        payout_years,
        fixed: quote_type(AnnuityType::Fixed, principal, years, payout_years, constants),
        variable: quote_type(AnnuityType::Variable, principal, years, payout_years, constants),
        indexed: quote_type(AnnuityType::Indexed, principal, years, payout_years, constants),
        safest: constants.annuity.recommendations.safest.clone(),
        highest_growth: constants.annuity.recommendations.highest_growth.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constants() -> RetirementConstants {
        RetirementConstants::default_2025()
    }

    #[test]
    fn test_growth_ordering_follows_average_rates() {
        let comparison = compare_annuities(100_000.0, 10, 20, &constants());

        // Averages: variable 7.0 > indexed 6.0 > fixed 5.5
        assert!(comparison.variable.future_value > comparison.indexed.future_value);
        assert!(comparison.indexed.future_value > comparison.fixed.future_value);
        assert!(comparison.variable.monthly_payment > comparison.fixed.monthly_payment);
    }

    #[test]
    fn test_labels_and_recommendations() {
        let comparison = compare_annuities(100_000.0, 10, 20, &constants());

        assert_eq!(comparison.fixed.label, "Fixed Annuity");
        assert_eq!(comparison.variable.label, "Variable Annuity");
        assert_eq!(comparison.indexed.label, "Indexed Annuity");
        assert_eq!(comparison.safest, "Fixed Annuity");
        assert_eq!(comparison.highest_growth, "Variable Annuity");
    }

    #[test]
    fn test_deferred_accumulation() {
        let comparison = compare_annuities(100_000.0, 10, 20, &constants());

        // Fixed at 5.5% for 10 years
        assert_eq!(comparison.fixed.rate, 5.5);
        assert_eq!(comparison.fixed.future_value, 170_814.0);
    }
}
