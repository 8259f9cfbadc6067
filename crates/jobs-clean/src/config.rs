//! Cleaning configuration.
//!
//! The default reproduces the policy the Glassdoor job-postings dataset
//! needs; a JSON file can override it per dataset.

use std::fs;
use std::path::Path;

use jobs_model::CellValue;

use crate::error::{CleanError, Result};
use crate::sentinel::{MissingColumns, SentinelPolicy};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CleaningConfig {
    /// Columns removed outright before extraction.
    pub drop_columns: Vec<String>,
    /// Sentinel-to-missing replacement policy.
    pub sentinel: SentinelPolicy,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        let columns = [
            "rating",
            "headquarters",
            "size",
            "founded",
            "type_of_ownership",
            "industry",
            "sector",
            "revenue",
            "competitors",
        ];
        Self {
            drop_columns: vec!["index".to_string(), "job_description".to_string()],
            sentinel: SentinelPolicy {
                columns: columns.iter().map(|c| (*c).to_string()).collect(),
                sentinels: vec![
                    CellValue::text("-1"),
                    CellValue::Int(-1),
                    CellValue::Float(-1.0),
                    CellValue::text("Unknown / Non-Applicable"),
                ],
                replacement: CellValue::Missing,
                missing_columns: MissingColumns::Skip,
            },
        }
    }
}

impl CleaningConfig {
    /// Loads a configuration from a JSON file, validating the sentinel
    /// policy so a bad file fails at setup rather than mid-table.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| CleanError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&text).map_err(|source| CleanError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.sentinel.check()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CleaningConfig::default();
        assert!(config.sentinel.check().is_ok());
        assert!(config.sentinel.sentinels.contains(&CellValue::Int(-1)));
        assert!(config.drop_columns.contains(&"job_description".to_string()));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = CleaningConfig::default();
        let json = serde_json::to_string(&config).expect("serialize config");
        let round: CleaningConfig = serde_json::from_str(&json).expect("deserialize config");
        assert_eq!(round.sentinel.columns, config.sentinel.columns);
        assert_eq!(round.sentinel.sentinels, config.sentinel.sentinels);
    }
}
