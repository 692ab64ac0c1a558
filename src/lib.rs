//! Retirement Calc - Retirement savings projection engine for 401k plans and annuities
//!
//! This library provides:
//! - 401k growth projections with monthly compounding and IRS deferral capping
//! - Employer match proration and catch-up contribution calculators
//! - Roth vs Traditional after-tax comparison
//! - Early-withdrawal tax and penalty math
//! - Annuity future value, payout, growth schedule, and surrender calculators
//! - Year-scoped constants tables (2025 IRS limits built in, JSON overlay for others)

pub mod constants;
pub mod saver;
pub mod projection;
pub mod calculators;
pub mod annuity;
pub mod planner;

// Re-export commonly used types
pub use constants::{RetirementConstants, ContributionLimits, AgeThresholds, CatchUpTier};
pub use saver::SaverProfile;
pub use projection::{GrowthProjector, ProjectionConfig, GrowthProjection, YearlyBreakdown};
pub use planner::Planner;
