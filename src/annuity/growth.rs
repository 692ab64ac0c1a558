//! Annual-step annuity growth schedule
//!
//! Annuities credit once per contract year, so this schedule compounds
//! annually rather than monthly.

use serde::{Deserialize, Serialize};

/// One contract year of credited growth
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnuityGrowthRow {
    /// Contract year, starting at 1
    pub year: u32,

    /// Interest credited during the year
    pub growth: f64,

    /// Value at the end of the year
    pub balance: f64,
}

/// Year-by-year accumulation of an annuity principal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnuityGrowthSchedule {
    pub principal: f64,

    /// Annual rate, percent
    pub rate: f64,

    pub years: u32,

    /// Value after the final year
    pub final_value: f64,

    /// Total interest credited
    pub total_growth: f64,

    pub rows: Vec<AnnuityGrowthRow>,
}

/// Compound a principal annually and record each year
pub fn calculate_growth(principal: f64, rate: f64, years: u32) -> AnnuityGrowthSchedule {
    let mut balance = principal;
    let mut rows = Vec::with_capacity(years as usize);

    for year in 1..=years {
        let growth = balance * (rate / 100.0);
        balance += growth;

        rows.push(AnnuityGrowthRow {
            year,
            growth: growth.round(),
            balance: balance.round(),
        });
    }

    AnnuityGrowthSchedule {
        principal,
        rate,
        years,
        final_value: balance.round(),
        total_growth: (balance - principal).round(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_compounding() {
        let schedule = calculate_growth(100_000.0, 10.0, 3);

        assert_eq!(schedule.rows.len(), 3);
        assert_eq!(schedule.rows[0].year, 1);
        assert_eq!(schedule.rows[0].growth, 10_000.0);
        assert_eq!(schedule.rows[0].balance, 110_000.0);
        assert_eq!(schedule.rows[1].balance, 121_000.0);
        assert_eq!(schedule.rows[2].balance, 133_100.0);

        assert_eq!(schedule.final_value, 133_100.0);
        assert_eq!(schedule.total_growth, 33_100.0);
    }

    #[test]
    fn test_zero_years() {
        let schedule = calculate_growth(100_000.0, 10.0, 0);

        assert!(schedule.rows.is_empty());
        assert_eq!(schedule.final_value, 100_000.0);
        assert_eq!(schedule.total_growth, 0.0);
    }

    #[test]
    fn test_zero_rate_stays_flat() {
        let schedule = calculate_growth(50_000.0, 0.0, 5);

        assert_eq!(schedule.rows.len(), 5);
        assert_eq!(schedule.final_value, 50_000.0);
        assert_eq!(schedule.total_growth, 0.0);
        assert_eq!(schedule.rows[4].growth, 0.0);
    }
}
