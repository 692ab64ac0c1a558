//! Federal tax bracket tables and early-withdrawal rules
//!
//! Bracket tables are reference data for display and marginal-rate lookups.
//! The Roth vs Traditional comparison deliberately uses flat caller-supplied
//! rates instead of these tables.

use serde::{Deserialize, Serialize};

/// Federal filing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    Single,
    MarriedFilingJointly,
}

/// One federal tax bracket, half-open on the upper bound
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Lower bound of taxable income for this bracket
    pub min: f64,

    /// Upper bound (exclusive); None for the top bracket
    pub max: Option<f64>,

    /// Marginal rate as a fraction (0.22 = 22%)
    pub rate: f64,
}

/// Ordered bracket schedule for one filing status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxSchedule {
    pub brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    /// 2025 single-filer brackets
    pub fn single_2025() -> Self {
        Self {
            brackets: vec![
                TaxBracket { min: 0.0, max: Some(11_925.0), rate: 0.10 },
                TaxBracket { min: 11_925.0, max: Some(48_475.0), rate: 0.12 },
                TaxBracket { min: 48_475.0, max: Some(103_350.0), rate: 0.22 },
                TaxBracket { min: 103_350.0, max: Some(197_300.0), rate: 0.24 },
                TaxBracket { min: 197_300.0, max: Some(250_525.0), rate: 0.32 },
                TaxBracket { min: 250_525.0, max: Some(626_350.0), rate: 0.35 },
                TaxBracket { min: 626_350.0, max: None, rate: 0.37 },
            ],
        }
    }

    /// 2025 married-filing-jointly brackets
    pub fn married_filing_jointly_2025() -> Self {
        Self {
            brackets: vec![
                TaxBracket { min: 0.0, max: Some(23_850.0), rate: 0.10 },
                TaxBracket { min: 23_850.0, max: Some(96_950.0), rate: 0.12 },
                TaxBracket { min: 96_950.0, max: Some(206_700.0), rate: 0.22 },
                TaxBracket { min: 206_700.0, max: Some(394_600.0), rate: 0.24 },
                TaxBracket { min: 394_600.0, max: Some(501_050.0), rate: 0.32 },
                TaxBracket { min: 501_050.0, max: Some(751_600.0), rate: 0.35 },
                TaxBracket { min: 751_600.0, max: None, rate: 0.37 },
            ],
        }
    }

    /// Bracket containing the given taxable income
    pub fn bracket_for(&self, taxable_income: f64) -> Option<&TaxBracket> {
        self.brackets
            .iter()
            .find(|b| b.max.map_or(true, |max| taxable_income < max))
    }

    /// Marginal rate for the given taxable income, as a fraction
    pub fn marginal_rate(&self, taxable_income: f64) -> f64 {
        self.bracket_for(taxable_income).map(|b| b.rate).unwrap_or(0.0)
    }
}

/// Bracket schedules for every supported filing status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FederalTaxTables {
    pub single: TaxSchedule,
    pub married_filing_jointly: TaxSchedule,
}

impl FederalTaxTables {
    /// 2025 tables
    pub fn tables_2025() -> Self {
        Self {
            single: TaxSchedule::single_2025(),
            married_filing_jointly: TaxSchedule::married_filing_jointly_2025(),
        }
    }

    /// Schedule for a filing status
    pub fn schedule(&self, status: FilingStatus) -> &TaxSchedule {
        match status {
            FilingStatus::Single => &self.single,
            FilingStatus::MarriedFilingJointly => &self.married_filing_jointly,
        }
    }
}

/// Early-withdrawal penalty rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarlyWithdrawalRules {
    /// Penalty on distributions before the penalty-free age, as a fraction
    pub penalty_rate: f64,

    /// Age at which the penalty stops applying; the comparison is strict,
    /// so a withdrawal at exactly this age is penalty free
    pub penalty_free_age: f64,

    /// Rule of 55 separation-from-service age, carried for display only
    pub rule_of_55_age: f64,
}

impl EarlyWithdrawalRules {
    pub fn rules_2025() -> Self {
        Self {
            penalty_rate: 0.10,
            penalty_free_age: 59.5,
            rule_of_55_age: 55.0,
        }
    }

    /// Whether a withdrawal at the given age draws the early penalty
    pub fn is_early(&self, age: f64) -> bool {
        age < self.penalty_free_age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_marginal_rates() {
        let schedule = TaxSchedule::single_2025();

        assert_eq!(schedule.marginal_rate(10_000.0), 0.10);
        assert_eq!(schedule.marginal_rate(11_925.0), 0.12);
        assert_eq!(schedule.marginal_rate(50_000.0), 0.22);
        assert_eq!(schedule.marginal_rate(150_000.0), 0.24);
        assert_eq!(schedule.marginal_rate(700_000.0), 0.37);
    }

    #[test]
    fn test_married_marginal_rates() {
        let tables = FederalTaxTables::tables_2025();
        let schedule = tables.schedule(FilingStatus::MarriedFilingJointly);

        assert_eq!(schedule.marginal_rate(100_000.0), 0.22);
        assert_eq!(schedule.marginal_rate(400_000.0), 0.32);
        assert_eq!(schedule.marginal_rate(800_000.0), 0.37);
    }

    #[test]
    fn test_bracket_bounds() {
        let schedule = TaxSchedule::single_2025();
        let bracket = schedule.bracket_for(48_474.99).unwrap();

        assert_eq!(bracket.rate, 0.12);
        assert_eq!(bracket.max, Some(48_475.0));
    }

    #[test]
    fn test_early_withdrawal_threshold_is_strict() {
        let rules = EarlyWithdrawalRules::rules_2025();

        assert!(rules.is_early(59.4));
        assert!(!rules.is_early(59.5));
        assert!(!rules.is_early(60.0));
    }
}
