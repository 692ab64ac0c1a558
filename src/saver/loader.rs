//! CSV loading for saver profiles

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::data::SaverProfile;

/// Errors raised while loading saver profiles from CSV
#[derive(Debug, Error)]
pub enum SaverLoadError {
    #[error("failed to open saver file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid saver row {row}: {message}")]
    InvalidRow { row: usize, message: String },
}

/// Raw CSV row before validation
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    saver_id: Option<u32>,
    current_age: u8,
    retirement_age: u8,
    salary: f64,
    contribution_percent: f64,
    #[serde(default)]
    current_balance: f64,
    employer_match_percent: f64,
    employer_match_limit: f64,
    expected_return: f64,
}

impl CsvRow {
    fn to_profile(&self, row: usize, fallback_id: u32) -> Result<SaverProfile, SaverLoadError> {
        if self.salary < 0.0 {
            return Err(SaverLoadError::InvalidRow {
                row,
                message: format!("salary must be non-negative, got {}", self.salary),
            });
        }
        if self.contribution_percent < 0.0 || self.contribution_percent > 100.0 {
            return Err(SaverLoadError::InvalidRow {
                row,
                message: format!(
                    "contribution_percent must be between 0 and 100, got {}",
                    self.contribution_percent
                ),
            });
        }
        if self.current_balance < 0.0 {
            return Err(SaverLoadError::InvalidRow {
                row,
                message: format!("current_balance must be non-negative, got {}", self.current_balance),
            });
        }
        if self.employer_match_percent < 0.0 {
            return Err(SaverLoadError::InvalidRow {
                row,
                message: format!(
                    "employer_match_percent must be non-negative, got {}",
                    self.employer_match_percent
                ),
            });
        }
        if self.employer_match_limit < 0.0 {
            return Err(SaverLoadError::InvalidRow {
                row,
                message: format!(
                    "employer_match_limit must be non-negative, got {}",
                    self.employer_match_limit
                ),
            });
        }

        Ok(SaverProfile {
            saver_id: self.saver_id.unwrap_or(fallback_id),
            current_age: self.current_age,
            retirement_age: self.retirement_age,
            salary: self.salary,
            contribution_percent: self.contribution_percent,
            current_balance: self.current_balance,
            employer_match_percent: self.employer_match_percent,
            employer_match_limit: self.employer_match_limit,
            expected_return: self.expected_return,
        })
    }
}

/// Load saver profiles from a CSV file on disk
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<SaverProfile>, SaverLoadError> {
    let file = File::open(path)?;
    load_profiles_from_reader(file)
}

/// Load saver profiles from any CSV reader
pub fn load_profiles_from_reader<R: Read>(reader: R) -> Result<Vec<SaverProfile>, SaverLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut profiles = Vec::new();
    for (index, record) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let row = index + 1;
        let raw = record?;
        profiles.push(raw.to_profile(row, row as u32)?);
    }

    log::debug!("loaded {} saver profiles", profiles.len());
    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
saver_id,current_age,retirement_age,salary,contribution_percent,current_balance,employer_match_percent,employer_match_limit,expected_return
101,30,65,75000,10,50000,4,6,7
102,45,67,98000,12,210000,3,6,6.5
";

    #[test]
    fn test_load_from_reader() {
        let profiles = load_profiles_from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(profiles.len(), 2);

        assert_eq!(profiles[0].saver_id, 101);
        assert_eq!(profiles[0].current_age, 30);
        assert_eq!(profiles[0].salary, 75_000.0);
        assert_eq!(profiles[0].employer_match_limit, 6.0);

        assert_eq!(profiles[1].saver_id, 102);
        assert_eq!(profiles[1].expected_return, 6.5);
    }

    #[test]
    fn test_missing_id_uses_row_number() {
        let csv = "\
current_age,retirement_age,salary,contribution_percent,current_balance,employer_match_percent,employer_match_limit,expected_return
30,65,75000,10,0,4,6,7
40,65,90000,8,120000,4,6,7
";
        let profiles = load_profiles_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(profiles[0].saver_id, 1);
        assert_eq!(profiles[1].saver_id, 2);
    }

    #[test]
    fn test_rejects_negative_salary() {
        let csv = "\
saver_id,current_age,retirement_age,salary,contribution_percent,current_balance,employer_match_percent,employer_match_limit,expected_return
1,30,65,-100,10,0,4,6,7
";
        let result = load_profiles_from_reader(csv.as_bytes());
        assert!(matches!(
            result,
            Err(SaverLoadError::InvalidRow { row: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_contribution_over_100() {
        let csv = "\
saver_id,current_age,retirement_age,salary,contribution_percent,current_balance,employer_match_percent,employer_match_limit,expected_return
1,30,65,75000,120,0,4,6,7
";
        let result = load_profiles_from_reader(csv.as_bytes());
        assert!(matches!(result, Err(SaverLoadError::InvalidRow { .. })));
    }

    #[test]
    fn test_rejects_malformed_csv() {
        let csv = "\
saver_id,current_age,retirement_age,salary,contribution_percent,current_balance,employer_match_percent,employer_match_limit,expected_return
1,thirty,65,75000,10,0,4,6,7
";
        let result = load_profiles_from_reader(csv.as_bytes());
        assert!(matches!(result, Err(SaverLoadError::Csv(_))));
    }
}
