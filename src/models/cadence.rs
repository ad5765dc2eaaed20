//! Display cadences
//!
//! All inputs and table percentages are weekly. Other cadences are reached by
//! multiplying the weekly budget by a fixed factor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Weeks in a year
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Time scale a budget is shown at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    /// The base cadence every input is expressed in
    #[default]
    Weekly,
    /// Average month (52 / 12 weeks)
    Monthly,
    Annual,
}

impl Cadence {
    /// All cadences in display order
    pub fn all() -> &'static [Cadence] {
        &[Self::Weekly, Self::Monthly, Self::Annual]
    }

    /// Multiplier from the weekly base cadence to this one
    pub fn factor(&self) -> f64 {
        match self {
            Self::Weekly => 1.0,
            Self::Monthly => WEEKS_PER_YEAR / 12.0,
            Self::Annual => WEEKS_PER_YEAR,
        }
    }

    /// Parse a cadence name
    ///
    /// Accepts "weekly", "monthly", "annual" and the short forms "week",
    /// "month", "year", "annually", case-insensitively.
    pub fn parse(s: &str) -> Result<Self, CadenceParseError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" | "week" | "w" => Ok(Self::Weekly),
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            "annual" | "annually" | "yearly" | "year" | "y" => Ok(Self::Annual),
            _ => Err(CadenceParseError(s.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Annual => "Annual",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error type for cadence parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CadenceParseError(pub String);

impl fmt::Display for CadenceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid cadence '{}': expected weekly, monthly or annual",
            self.0
        )
    }
}

impl std::error::Error for CadenceParseError {}
