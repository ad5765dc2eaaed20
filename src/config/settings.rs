//! User settings for booth-budget
//!
//! Manages user preferences: which cadence to show, the currency symbol, an
//! optional custom percentage table, and the rent fallback policy.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::BoothPaths;
use crate::error::{BoothError, BoothResult};
use crate::models::Cadence;
use crate::services::RentPolicy;
use crate::storage::file_io::write_json_atomic;

/// User settings for booth-budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Cadence to show by default; all three when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_cadence: Option<Cadence>,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Custom percentage table (JSON or YAML)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_path: Option<PathBuf>,

    /// Rent percentage to assume when the table has no Rent Expense line.
    /// Unset means rent-based budgets fail on such tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rent_fallback_percent: Option<f64>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_cadence: None,
            currency_symbol: default_currency(),
            table_path: None,
            rent_fallback_percent: None,
        }
    }
}

impl Settings {
    /// The rent policy these settings select
    ///
    /// A fallback percentage must be a finite fraction in [0, 1], the same
    /// range table lines are held to.
    pub fn rent_policy(&self) -> BoothResult<RentPolicy> {
        match self.rent_fallback_percent {
            Some(p) if p.is_finite() && (0.0..=1.0).contains(&p) => {
                Ok(RentPolicy::LegacyFallback(p))
            }
            Some(p) => Err(BoothError::Config(format!(
                "rent_fallback_percent must be between 0 and 1 (found {})",
                p
            ))),
            None => Ok(RentPolicy::Strict),
        }
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &BoothPaths) -> Result<Self, BoothError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BoothError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| BoothError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BoothPaths) -> Result<(), BoothError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
