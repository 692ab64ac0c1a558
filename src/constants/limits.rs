//! IRS contribution limits and the age thresholds that gate them

use serde::{Deserialize, Serialize};

/// Annual 401k contribution limits (IRS Notice 2024-80 for 2025)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionLimits {
    /// Employee elective deferral limit
    pub employee: f64,

    /// Standard catch-up for ages 50-59 and 64+
    pub catch_up: f64,

    /// Super catch-up for ages 60-63 (SECURE 2.0, first effective 2025)
    pub super_catch_up: f64,

    /// Total annual additions limit (employee + employer)
    pub total_additions: f64,

    /// Maximum compensation considered for plan purposes
    pub compensation: f64,
}

impl ContributionLimits {
    /// 2025 limits
    pub fn limits_2025() -> Self {
        Self {
            employee: 23_500.0,
            catch_up: 7_500.0,
            super_catch_up: 11_250.0,
            total_additions: 70_000.0,
            compensation: 350_000.0,
        }
    }

    /// Catch-up amount for a given tier
    pub fn catch_up_amount(&self, tier: CatchUpTier) -> f64 {
        match tier {
            CatchUpTier::None => 0.0,
            CatchUpTier::Standard => self.catch_up,
            CatchUpTier::Super => self.super_catch_up,
        }
    }
}

/// Age thresholds gating catch-up eligibility and distributions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeThresholds {
    /// Age at which catch-up contributions begin
    pub catch_up_age: u8,

    /// First age of the super catch-up window
    pub super_catch_up_start: u8,

    /// Last age of the super catch-up window (inclusive)
    pub super_catch_up_end: u8,

    /// Required minimum distribution age
    pub required_min_distribution: u8,
}

impl AgeThresholds {
    /// 2025 thresholds
    pub fn thresholds_2025() -> Self {
        Self {
            catch_up_age: 50,
            super_catch_up_start: 60,
            super_catch_up_end: 63,
            required_min_distribution: 73,
        }
    }

    /// Catch-up tier for an attained age
    ///
    /// The super window wins inside 60-63; otherwise any age at or past the
    /// catch-up age gets the standard amount, so 64+ drops back to standard.
    pub fn catch_up_tier(&self, age: u8) -> CatchUpTier {
        if age >= self.super_catch_up_start && age <= self.super_catch_up_end {
            CatchUpTier::Super
        } else if age >= self.catch_up_age {
            CatchUpTier::Standard
        } else {
            CatchUpTier::None
        }
    }
}

/// Which catch-up amount an age qualifies for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatchUpTier {
    /// Under the catch-up age
    None,
    /// Ages 50-59 and 64+
    Standard,
    /// Ages 60-63
    Super,
}

/// One row of the deferral-limit summary by age band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeBandLimit {
    pub age_band: String,
    pub employee: f64,
    pub catch_up: f64,
    pub total: f64,
}

impl AgeBandLimit {
    /// Build the four-band summary (under 50 / 50-59 / 60-63 / 64+)
    pub fn bands(limits: &ContributionLimits, thresholds: &AgeThresholds) -> Vec<AgeBandLimit> {
        let band = |age_band: String, catch_up: f64| AgeBandLimit {
            age_band,
            employee: limits.employee,
            catch_up,
            total: limits.employee + catch_up,
        };

        vec![
            band(format!("Under {}", thresholds.catch_up_age), 0.0),
            band(
                format!(
                    "Ages {}-{}",
                    thresholds.catch_up_age,
                    thresholds.super_catch_up_start - 1
                ),
                limits.catch_up,
            ),
            band(
                format!(
                    "Ages {}-{}",
                    thresholds.super_catch_up_start, thresholds.super_catch_up_end
                ),
                limits.super_catch_up,
            ),
            band(
                format!("Ages {}+", thresholds.super_catch_up_end + 1),
                limits.catch_up,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catch_up_tier_windows() {
        let thresholds = AgeThresholds::thresholds_2025();

        assert_eq!(thresholds.catch_up_tier(49), CatchUpTier::None);
        assert_eq!(thresholds.catch_up_tier(50), CatchUpTier::Standard);
        assert_eq!(thresholds.catch_up_tier(59), CatchUpTier::Standard);
        assert_eq!(thresholds.catch_up_tier(60), CatchUpTier::Super);
        assert_eq!(thresholds.catch_up_tier(63), CatchUpTier::Super);
        assert_eq!(thresholds.catch_up_tier(64), CatchUpTier::Standard);
        assert_eq!(thresholds.catch_up_tier(75), CatchUpTier::Standard);
    }

    #[test]
    fn test_catch_up_amounts() {
        let limits = ContributionLimits::limits_2025();

        assert_eq!(limits.catch_up_amount(CatchUpTier::None), 0.0);
        assert_eq!(limits.catch_up_amount(CatchUpTier::Standard), 7_500.0);
        assert_eq!(limits.catch_up_amount(CatchUpTier::Super), 11_250.0);
    }

    #[test]
    fn test_age_band_summary() {
        let bands = AgeBandLimit::bands(
            &ContributionLimits::limits_2025(),
            &AgeThresholds::thresholds_2025(),
        );

        assert_eq!(bands.len(), 4);
        assert_eq!(bands[0].age_band, "Under 50");
        assert_eq!(bands[0].total, 23_500.0);
        assert_eq!(bands[1].age_band, "Ages 50-59");
        assert_eq!(bands[1].total, 31_000.0);
        assert_eq!(bands[2].age_band, "Ages 60-63");
        assert_eq!(bands[2].total, 34_750.0);
        assert_eq!(bands[3].age_band, "Ages 64+");
        assert_eq!(bands[3].total, 31_000.0);
    }
}
