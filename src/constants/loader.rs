//! JSON-based constants loader
//!
//! Loads a complete year table from a JSON file, for years beyond the
//! built-in 2025 tables. Tables are loaded whole and validated; there is no
//! field-by-field patching.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::RetirementConstants;

/// Errors from loading or validating a constants table
#[derive(Debug, Error)]
pub enum ConstantsError {
    #[error("failed to read constants file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse constants file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no built-in constants table for year {year}; built-in years: {supported:?}")]
    UnknownYear { year: i32, supported: Vec<i32> },

    #[error("invalid constants table: {0}")]
    Invalid(String),
}

/// Load a constants table from a JSON file
pub fn load_from_path(path: &Path) -> Result<RetirementConstants, ConstantsError> {
    let file = File::open(path)?;
    load_from_reader(file)
}

/// Load a constants table from any reader (e.g. string buffer, network stream)
pub fn load_from_reader<R: Read>(reader: R) -> Result<RetirementConstants, ConstantsError> {
    let table: RetirementConstants = serde_json::from_reader(reader)?;
    validate(&table)?;
    Ok(table)
}

/// Reject tables that would make the calculators produce nonsense
fn validate(table: &RetirementConstants) -> Result<(), ConstantsError> {
    if table.contribution_limits.employee <= 0.0 {
        return Err(ConstantsError::Invalid(
            "employee deferral limit must be positive".to_string(),
        ));
    }

    let thresholds = &table.age_thresholds;
    if thresholds.super_catch_up_start > thresholds.super_catch_up_end {
        return Err(ConstantsError::Invalid(format!(
            "super catch-up window {}-{} is inverted",
            thresholds.super_catch_up_start, thresholds.super_catch_up_end
        )));
    }
    if thresholds.super_catch_up_start < thresholds.catch_up_age {
        return Err(ConstantsError::Invalid(
            "super catch-up window starts before the catch-up age".to_string(),
        ));
    }

    for schedule in [&table.tax_tables.single, &table.tax_tables.married_filing_jointly] {
        let mut prev_min = -1.0;
        for bracket in &schedule.brackets {
            if bracket.min <= prev_min {
                return Err(ConstantsError::Invalid(
                    "tax brackets must be ordered by lower bound".to_string(),
                ));
            }
            if let Some(max) = bracket.max {
                if max <= bracket.min {
                    return Err(ConstantsError::Invalid(
                        "tax bracket upper bound must exceed its lower bound".to_string(),
                    ));
                }
            }
            prev_min = bracket.min;
        }
    }

    if !(0.0..=1.0).contains(&table.early_withdrawal.penalty_rate) {
        return Err(ConstantsError::Invalid(
            "early-withdrawal penalty rate must be a fraction in [0, 1]".to_string(),
        ));
    }

    Ok(())
}
