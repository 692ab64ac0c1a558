//! High-level planner over one year's constants
//!
//! Loads a constants table once, then answers any number of projection and
//! calculator requests against it without re-reading configuration.

use std::path::Path;

use rayon::prelude::*;

use crate::annuity::{
    calculate_annuity, calculate_growth, calculate_payout, calculate_surrender, compare_annuities,
    AnnuityComparison, AnnuityGrowthSchedule, AnnuityQuote, PayoutQuote, PayoutTiming,
    SurrenderResult,
};
use crate::calculators::{
    calculate_catch_up, calculate_employer_match, calculate_withdrawal,
    compare_roth_vs_traditional, CatchUpResult, EmployerMatchResult, RothComparison,
    WithdrawalResult,
};
use crate::constants::{
    AgeBandLimit, ConstantsError, PayoutOption, RetirementConstants,
};
use crate::projection::{GrowthProjection, GrowthProjector, ProjectionConfig};
use crate::saver::SaverProfile;

/// Pre-loaded planner answering projections and calculator queries
///
/// # Example
/// ```ignore
/// let planner = Planner::for_year(2025)?;
///
/// let projection = planner.project(&profile);
/// let quote = planner.annuity_comparison(250_000.0, 10, 25);
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    constants: RetirementConstants,

    /// Calendar year labelling the first projection year
    base_year: i32,
}

impl Planner {
    /// Planner on the built-in 2025 table
    pub fn new() -> Self {
        Self::with_constants(RetirementConstants::default_2025())
    }

    /// Planner on the built-in table for a plan year
    pub fn for_year(year: i32) -> Result<Self, ConstantsError> {
        Ok(Self::with_constants(RetirementConstants::for_year(year)?))
    }

    /// Planner on a constants table loaded from JSON
    pub fn from_json_path(path: &Path) -> Result<Self, ConstantsError> {
        Ok(Self::with_constants(RetirementConstants::from_json_path(
            path,
        )?))
    }

    /// Planner on a pre-built constants table
    pub fn with_constants(constants: RetirementConstants) -> Self {
        let base_year = constants.year;
        Self {
            constants,
            base_year,
        }
    }

    /// Override the calendar year assigned to the first projection year
    pub fn with_base_year(mut self, base_year: i32) -> Self {
        self.base_year = base_year;
        self
    }

    /// The constants table in use
    pub fn constants(&self) -> &RetirementConstants {
        &self.constants
    }

    /// Mutable access for scenario tweaks
    pub fn constants_mut(&mut self) -> &mut RetirementConstants {
        &mut self.constants
    }

    fn projector(&self) -> GrowthProjector {
        GrowthProjector::new(
            self.constants.clone(),
            ProjectionConfig {
                base_year: self.base_year,
            },
        )
    }

    /// Project one saver's balance to retirement
    pub fn project(&self, profile: &SaverProfile) -> GrowthProjection {
        self.projector().project(profile)
    }

    /// Project many savers, fanning out across threads
    pub fn project_batch(&self, profiles: &[SaverProfile]) -> Vec<GrowthProjection> {
        log::debug!("projecting batch of {} saver profiles", profiles.len());

        let projector = self.projector();
        profiles.par_iter().map(|p| projector.project(p)).collect()
    }

    /// One-year employer match breakdown
    pub fn employer_match(
        &self,
        salary: f64,
        contribution_percent: f64,
        employer_match_percent: f64,
        employer_match_limit: f64,
    ) -> EmployerMatchResult {
        calculate_employer_match(
            salary,
            contribution_percent,
            employer_match_percent,
            employer_match_limit,
        )
    }

    /// Roth vs Traditional comparison under this table's decision band
    pub fn roth_vs_traditional(
        &self,
        annual_contribution: f64,
        years_to_retirement: u32,
        expected_return: f64,
        current_tax_rate: f64,
        retirement_tax_rate: f64,
    ) -> RothComparison {
        compare_roth_vs_traditional(
            annual_contribution,
            years_to_retirement,
            expected_return,
            current_tax_rate,
            retirement_tax_rate,
            &self.constants,
        )
    }

    /// Withdrawal taxes and penalty under this table's rules
    pub fn withdrawal(
        &self,
        amount: f64,
        age: f64,
        federal_tax_rate: f64,
        state_tax_rate: f64,
    ) -> WithdrawalResult {
        calculate_withdrawal(amount, age, federal_tax_rate, state_tax_rate, &self.constants)
    }

    /// Catch-up headroom and its projected value
    pub fn catch_up(
        &self,
        age: u8,
        years_to_retirement: u32,
        expected_return: f64,
    ) -> CatchUpResult {
        calculate_catch_up(age, years_to_retirement, expected_return, &self.constants)
    }

    /// Annuity accumulation and payment quote
    pub fn annuity(
        &self,
        principal: f64,
        rate: f64,
        years: u32,
        payout_years: u32,
        timing: PayoutTiming,
    ) -> AnnuityQuote {
        calculate_annuity(principal, rate, years, payout_years, timing)
    }

    /// Monthly income under a payout option
    pub fn annuity_payout(
        &self,
        principal: f64,
        rate: f64,
        payout_years: u32,
        option: PayoutOption,
    ) -> PayoutQuote {
        calculate_payout(principal, rate, payout_years, option, &self.constants)
    }

    /// Annual-step accumulation schedule
    pub fn annuity_growth(&self, principal: f64, rate: f64, years: u32) -> AnnuityGrowthSchedule {
        calculate_growth(principal, rate, years)
    }

    /// Cost of surrendering a contract today
    pub fn annuity_surrender(
        &self,
        principal: f64,
        current_value: f64,
        years_held: u32,
        age: f64,
    ) -> SurrenderResult {
        calculate_surrender(principal, current_value, years_held, age, &self.constants)
    }

    /// Fixed vs variable vs indexed on the same purchase
    pub fn annuity_comparison(
        &self,
        principal: f64,
        years: u32,
        payout_years: u32,
    ) -> AnnuityComparison {
        compare_annuities(principal, years, payout_years, &self.constants)
    }

    /// Deferral limit summary by age band
    pub fn limit_bands(&self) -> Vec<AgeBandLimit> {
        self.constants.limit_bands()
    }

    /// Maximum employee deferral for an age under this table
    pub fn max_deferral(&self, age: u8) -> f64 {
        self.constants.max_deferral(age)
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}
