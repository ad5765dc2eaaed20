//! Path management for booth-budget
//!
//! Provides XDG-compliant path resolution for configuration and the
//! percentage table.
//!
//! ## Path Resolution Order
//!
//! 1. `BOOTH_BUDGET_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/booth-budget` or `~/.config/booth-budget`
//! 3. Windows: `%APPDATA%\booth-budget`

use std::path::PathBuf;

use crate::error::BoothError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "BOOTH_BUDGET_DATA_DIR";

/// Manages all paths used by booth-budget
#[derive(Debug, Clone)]
pub struct BoothPaths {
    base_dir: PathBuf,
}

impl BoothPaths {
    /// Create a new BoothPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, BoothError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BoothPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/booth-budget/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the editable percentage table
    pub fn table_file(&self) -> PathBuf {
        self.data_dir().join("budget_table.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), BoothError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BoothError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BoothError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if booth-budget has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BoothError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                BoothError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("booth-budget"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BoothError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BoothError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("booth-budget"))
}
