//! Growth projection engine and its output records

mod engine;
mod schedule;

pub use engine::{compound_monthly, GrowthProjector, ProjectionConfig};
pub use schedule::{GrowthProjection, YearlyBreakdown};
