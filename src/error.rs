//! Custom error types for booth-budget
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for booth-budget operations
#[derive(Error, Debug)]
pub enum BoothError {
    /// Configuration-related errors, including an unusable percentage table
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for inputs and table lines
    #[error("Validation error: {0}")]
    Validation(String),

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BoothError {
    /// Create a "duplicate" error for a line item within a table section
    pub fn duplicate_line_item(section: &str, line_item: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Line item",
            identifier: format!("{} in {}", line_item.into(), section),
        }
    }

    /// Create the error raised when the table has no usable rent percentage
    pub fn invalid_rent_percent(found: Option<f64>) -> Self {
        match found {
            Some(p) => Self::Config(format!(
                "Rent Expense percentage must be greater than zero (found {})",
                p
            )),
            None => Self::Config("Rent Expense line not found in indirect expenses".into()),
        }
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BoothError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BoothError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for BoothError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for BoothError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for booth-budget operations
pub type BoothResult<T> = Result<T, BoothError>;
