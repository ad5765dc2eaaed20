//! Money type for representing currency amounts
//!
//! Every amount the engine exposes is rounded to whole cents and stored as an
//! i64. Totals are then plain integer sums of the rounded lines, so a displayed
//! subtotal always equals the sum of the displayed line items.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// Round a currency value to 2 decimal places.
///
/// Rounds half up (toward positive infinity) after nudging the value by
/// machine epsilon, so values such as `1.005` that are stored slightly below
/// the half-cent still round up.
pub fn round_currency(value: f64) -> f64 {
    cents_from_amount(value) as f64 / 100.0
}

fn cents_from_amount(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    ((value + f64::EPSILON) * 100.0 + 0.5).floor() as i64
}

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use booth_budget::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount by rounding a decimal amount with [`round_currency`]
    ///
    /// # Examples
    /// ```
    /// use booth_budget::models::Money;
    /// assert_eq!(Money::from_amount(1.005).cents(), 101);
    /// ```
    pub fn from_amount(amount: f64) -> Self {
        Self(cents_from_amount(amount))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a decimal value
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiply by a cadence factor and re-round to cents
    pub fn scale(&self, factor: f64) -> Self {
        Self::from_amount(self.to_f64() * factor)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
