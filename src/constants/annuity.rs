//! Annuity product parameters: type rates, payout factors, and surrender charges

use serde::{Deserialize, Serialize};

/// Annuity product type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnuityType {
    /// Guaranteed fixed crediting
    Fixed,
    /// Market-exposed subaccounts
    Variable,
    /// Index-linked crediting with participation and cap
    Indexed,
}

impl AnnuityType {
    pub const ALL: [AnnuityType; 3] = [AnnuityType::Fixed, AnnuityType::Variable, AnnuityType::Indexed];

    /// Display label for the type
    pub fn label(&self) -> &'static str {
        match self {
            AnnuityType::Fixed => "Fixed Annuity",
            AnnuityType::Variable => "Variable Annuity",
            AnnuityType::Indexed => "Indexed Annuity",
        }
    }
}

/// Assumed crediting rates for one annuity type, percent per year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnuityRates {
    /// Long-run average rate
    pub average: f64,

    /// Historical low end
    pub minimum: f64,

    /// Historical high end
    pub maximum: f64,
}

/// Payout-option factors applied to the level-payment amount
///
/// Fixed multipliers, not derived from mortality tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutFactors {
    pub life_only: f64,
    pub period_certain: f64,
    pub joint_survivor: f64,
}

impl PayoutFactors {
    pub fn factors_2025() -> Self {
        Self {
            life_only: 1.0,
            period_certain: 0.92,
            joint_survivor: 0.85,
        }
    }

    /// Factor for a payout option
    pub fn factor(&self, option: PayoutOption) -> f64 {
        match option {
            PayoutOption::LifeOnly => self.life_only,
            PayoutOption::LifeWithPeriodCertain => self.period_certain,
            PayoutOption::JointSurvivor => self.joint_survivor,
        }
    }
}

/// How annuitized payments are structured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutOption {
    /// Payments for the annuitant's life only
    LifeOnly,
    /// Life payments with a guaranteed minimum period
    LifeWithPeriodCertain,
    /// Payments continuing to a surviving spouse
    JointSurvivor,
}

/// Surrender charge schedule by whole years held
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurrenderChargeSchedule {
    /// Charge rates by year held (1-indexed), as fractions
    charges: Vec<f64>,
}

impl SurrenderChargeSchedule {
    /// Default 8-year declining schedule: 7% in year one, down to 0% at year 8+
    pub fn default_8_year() -> Self {
        Self {
            charges: vec![0.07, 0.06, 0.05, 0.04, 0.03, 0.02, 0.01, 0.0],
        }
    }

    /// Surrender charge rate for a given number of years held
    pub fn get_rate(&self, years_held: u32) -> f64 {
        if years_held == 0 {
            return self.charges.first().copied().unwrap_or(0.0);
        }
        let idx = (years_held as usize).saturating_sub(1);
        self.charges.get(idx).copied().unwrap_or(0.0)
    }

    /// Check if still in the surrender charge period
    pub fn in_charge_period(&self, years_held: u32) -> bool {
        self.get_rate(years_held) > 0.0
    }

    /// Length of the charge schedule in years
    pub fn period_years(&self) -> u32 {
        self.charges.len() as u32
    }
}

/// Static recommendation labels for the type comparison
///
/// Marketing copy, not computed from the quotes. Kept as data so product can
/// retarget the labels without a code change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnuityRecommendations {
    pub safest: String,
    pub highest_growth: String,
}

/// All annuity parameters consulted by the annuity suite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnuityParams {
    pub fixed: AnnuityRates,
    pub variable: AnnuityRates,
    pub indexed: AnnuityRates,

    /// Share of index gains credited to indexed products, percent
    pub participation_rate: f64,

    /// Maximum credited rate for indexed products, percent
    pub cap_rate: f64,

    pub payout_factors: PayoutFactors,
    pub surrender_charges: SurrenderChargeSchedule,
    pub recommendations: AnnuityRecommendations,
}

impl AnnuityParams {
    pub fn params_2025() -> Self {
        Self {
            fixed: AnnuityRates { average: 5.5, minimum: 3.0, maximum: 6.5 },
            variable: AnnuityRates { average: 7.0, minimum: -10.0, maximum: 12.0 },
            indexed: AnnuityRates { average: 6.0, minimum: 0.0, maximum: 10.0 },
            participation_rate: 80.0,
            cap_rate: 10.0,
            payout_factors: PayoutFactors::factors_2025(),
            surrender_charges: SurrenderChargeSchedule::default_8_year(),
            recommendations: AnnuityRecommendations {
                safest: AnnuityType::Fixed.label().to_string(),
                highest_growth: AnnuityType::Variable.label().to_string(),
            },
        }
    }

    /// Rate assumptions for an annuity type
    pub fn rates(&self, annuity_type: AnnuityType) -> &AnnuityRates {
        match annuity_type {
            AnnuityType::Fixed => &self.fixed,
            AnnuityType::Variable => &self.variable,
            AnnuityType::Indexed => &self.indexed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surrender_charges() {
        let sc = SurrenderChargeSchedule::default_8_year();

        assert_eq!(sc.get_rate(1), 0.07);
        assert_eq!(sc.get_rate(5), 0.03);
        assert_eq!(sc.get_rate(7), 0.01);
        assert_eq!(sc.get_rate(8), 0.0);
        assert_eq!(sc.get_rate(20), 0.0);
        // Year 0 takes the first-year charge
        assert_eq!(sc.get_rate(0), 0.07);
    }

    #[test]
    fn test_charge_period() {
        let sc = SurrenderChargeSchedule::default_8_year();

        assert!(sc.in_charge_period(1));
        assert!(sc.in_charge_period(7));
        assert!(!sc.in_charge_period(8));
        assert_eq!(sc.period_years(), 8);
    }

    #[test]
    fn test_payout_factors() {
        let pf = PayoutFactors::factors_2025();

        assert_eq!(pf.factor(PayoutOption::LifeOnly), 1.0);
        assert_eq!(pf.factor(PayoutOption::LifeWithPeriodCertain), 0.92);
        assert_eq!(pf.factor(PayoutOption::JointSurvivor), 0.85);
    }

    #[test]
    fn test_type_rates_and_labels() {
        let params = AnnuityParams::params_2025();

        assert_eq!(params.rates(AnnuityType::Fixed).average, 5.5);
        assert_eq!(params.rates(AnnuityType::Variable).average, 7.0);
        assert_eq!(params.rates(AnnuityType::Indexed).average, 6.0);
        assert_eq!(AnnuityType::Variable.label(), "Variable Annuity");
        assert_eq!(params.recommendations.safest, "Fixed Annuity");
    }
}
