//! Run growth projections for a whole block of savers from savers.csv
//!
//! Outputs one summary row per saver for comparison with the plan sponsor's
//! spreadsheet.

use anyhow::Context;
use chrono::{Datelike, Utc};
use retirement_calc::saver::load_profiles;
use retirement_calc::Planner;
use serde::Serialize;
use std::env;
use std::time::Instant;

/// Per-saver summary written to the output CSV
#[derive(Debug, Serialize)]
struct SummaryRow {
    saver_id: u32,
    current_age: u8,
    retirement_age: u8,
    years_to_retirement: u32,
    starting_balance: f64,
    total_contributions: f64,
    total_employer_match: f64,
    total_growth: f64,
    projected_balance: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = Instant::now();
    let input_path = env::var("SAVERS_CSV").unwrap_or_else(|_| "savers.csv".to_string());
    let output_path =
        env::var("OUTPUT_CSV").unwrap_or_else(|_| "batch_projection_output.csv".to_string());

    println!("Loading savers from {}...", input_path);
    let profiles = load_profiles(&input_path)
        .with_context(|| format!("failed to load saver profiles from {}", input_path))?;
    println!("Loaded {} savers in {:?}", profiles.len(), start.elapsed());

    let planner = Planner::new().with_base_year(Utc::now().year());

    println!("Running projections...");
    let proj_start = Instant::now();
    let results = planner.project_batch(&profiles);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("failed to create {}", output_path))?;
    for projection in &results {
        let row = SummaryRow {
            saver_id: projection.saver_id,
            current_age: projection.current_age,
            retirement_age: projection.retirement_age,
            years_to_retirement: projection.years_to_retirement,
            starting_balance: projection.starting_balance,
            total_contributions: projection.total_contributions,
            total_employer_match: projection.total_employer_match,
            total_growth: projection.total_growth,
            projected_balance: projection.projected_balance,
        };
        writer.serialize(row).context("failed to write output row")?;
    }
    writer.flush().context("failed to flush output file")?;

    println!("Output written to {}", output_path);

    // Print summary stats
    let total_projected: f64 = results.iter().map(|r| r.projected_balance).sum();
    let total_contributions: f64 = results.iter().map(|r| r.total_contributions).sum();
    let total_match: f64 = results.iter().map(|r| r.total_employer_match).sum();
    let total_growth: f64 = results.iter().map(|r| r.total_growth).sum();

    println!("\nBlock Summary:");
    println!("  Savers:              {}", results.len());
    println!("  Total contributions: ${:.0}", total_contributions);
    println!("  Total match:         ${:.0}", total_match);
    println!("  Total growth:        ${:.0}", total_growth);
    println!("  Projected balances:  ${:.0}", total_projected);

    if let Some(top) = results
        .iter()
        .max_by(|a, b| a.projected_balance.total_cmp(&b.projected_balance))
    {
        println!(
            "  Largest balance:     ${:.0} (saver {}, retires at {})",
            top.projected_balance, top.saver_id, top.retirement_age
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
