//! Caller-supplied calculation inputs
//!
//! Both input shapes are expressed at the base cadence (weekly).

use serde::{Deserialize, Serialize};

/// Validation errors for calculation inputs
#[derive(Debug, Clone, PartialEq)]
pub enum InputValidationError {
    NegativeAmount { field: &'static str, value: f64 },
    NotANumber { field: &'static str },
    Unparseable(String),
}

impl std::fmt::Display for InputValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount { field, value } => {
                write!(f, "{} cannot be negative (got {})", field, value)
            }
            Self::NotANumber { field } => write!(f, "{} must be a finite number", field),
            Self::Unparseable(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for InputValidationError {}

fn check_amount(field: &'static str, value: f64) -> Result<(), InputValidationError> {
    if !value.is_finite() {
        return Err(InputValidationError::NotANumber { field });
    }
    if value < 0.0 {
        return Err(InputValidationError::NegativeAmount { field, value });
    }
    Ok(())
}

/// Parse a user-entered amount
///
/// Accepts "1000", "1,000.50" and "$1000". A blank entry is zero, the same as
/// an empty form field.
pub fn parse_amount(s: &str) -> Result<f64, InputValidationError> {
    let trimmed = s.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();

    if cleaned.is_empty() {
        return Ok(0.0);
    }

    cleaned
        .parse::<f64>()
        .map_err(|_| InputValidationError::Unparseable(s.to_string()))
}

/// Weekly income broken out by stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeInputs {
    pub services: f64,
    pub tips: f64,
    pub retail: f64,
}

impl IncomeInputs {
    pub fn new(services: f64, tips: f64, retail: f64) -> Self {
        Self {
            services,
            tips,
            retail,
        }
    }

    /// Sum of all three streams
    pub fn total(&self) -> f64 {
        self.services + self.tips + self.retail
    }

    /// Validate that every stream is a finite, non-negative amount
    pub fn validate(&self) -> Result<(), InputValidationError> {
        check_amount("Services", self.services)?;
        check_amount("Tips", self.tips)?;
        check_amount("Retail", self.retail)?;
        Ok(())
    }
}

/// A rent figure to budget backwards from
///
/// The amount is taken at the same cadence as the percentage table. It is
/// not converted between monthly and weekly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RentTarget {
    pub amount: f64,
}

impl RentTarget {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }

    pub fn validate(&self) -> Result<(), InputValidationError> {
        check_amount("Rent", self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_formats() {
        assert_eq!(parse_amount("1000").unwrap(), 1000.0);
        assert_eq!(parse_amount("1,000.50").unwrap(), 1000.5);
        assert_eq!(parse_amount("$250").unwrap(), 250.0);
        assert_eq!(parse_amount("  ").unwrap(), 0.0);
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn test_income_inputs_total() {
        let inputs = IncomeInputs::new(1000.0, 200.0, 300.0);
        assert_eq!(inputs.total(), 1500.0);
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_negative_income_rejected() {
        let inputs = IncomeInputs::new(1000.0, -1.0, 0.0);
        assert!(matches!(
            inputs.validate(),
            Err(InputValidationError::NegativeAmount { field: "Tips", .. })
        ));
    }

    #[test]
    fn test_rent_target_validation() {
        assert!(RentTarget::new(900.0).validate().is_ok());
        assert!(RentTarget::new(0.0).validate().is_ok());
        assert!(matches!(
            RentTarget::new(f64::INFINITY).validate(),
            Err(InputValidationError::NotANumber { .. })
        ));
    }
}
