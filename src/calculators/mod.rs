//! Standalone retirement calculators

mod catch_up;
mod employer_match;
mod roth;
mod withdrawal;

pub use catch_up::{calculate_catch_up, CatchUpResult};
pub use employer_match::{
    calculate_employer_match, full_limit_match, prorated_match, EmployerMatchResult,
};
pub use roth::{compare_roth_vs_traditional, BetterOption, RothComparison};
pub use withdrawal::{calculate_withdrawal, WithdrawalResult};
