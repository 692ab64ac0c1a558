//! Annuity quoting: accumulation, payout options, growth, surrender

mod compare;
mod growth;
mod payout;
mod surrender;
mod value;

pub use compare::{compare_annuities, AnnuityComparison, AnnuityTypeQuote};
pub use growth::{calculate_growth, AnnuityGrowthRow, AnnuityGrowthSchedule};
pub use payout::{calculate_payout, PayoutQuote};
pub use surrender::{calculate_surrender, SurrenderResult};
pub use value::{calculate_annuity, level_payment, AnnuityQuote, PayoutTiming};
