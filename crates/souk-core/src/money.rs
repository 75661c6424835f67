//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  A cart that sums 0.90 + 1.50 as floats has to round its way       │
//! │  back to "2.40" at display time and hope nothing drifted.          │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Minor Units                                  │
//! │    90 + 150 = 240, displayed as "DT 2.40". No drift, ever.         │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use souk_core::money::Money;
//!
//! // Create from minor units (preferred)
//! let price = Money::from_cents(90); // DT 0.90
//!
//! // Arithmetic operations
//! let doubled = price * 2;                      // DT 1.80
//! let total = price + Money::from_cents(150);   // DT 2.40
//! assert_eq!(total.to_string(), "DT 2.40");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit
/// (hundredths of a dinar, tagged `DT` at display time).
///
/// ## Design Decisions
/// - **i64 (signed)**: intermediate arithmetic may dip negative even
///   though catalog prices and line totals never do
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for snapshot serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use souk_core::money::Money;
    ///
    /// let price = Money::from_cents(90); // Represents DT 0.90
    /// assert_eq!(price.cents(), 90);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use souk_core::money::Money;
    ///
    /// let price = Money::from_major_minor(1, 15); // DT 1.15
    /// assert_eq!(price.cents(), 115);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-1, 50)` = DT -1.50, not DT -0.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major (dinar) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, saturating at the i64 range.
    ///
    /// Saturation keeps line totals non-negative for non-negative
    /// inputs no matter how large the quantity gets: the product can
    /// never wrap to a negative value.
    ///
    /// ## Example
    /// ```rust
    /// use souk_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(120); // DT 1.20
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 360); // DT 3.60
    ///
    /// let absurd = Money::from_cents(90).multiply_quantity(i64::MAX);
    /// assert_eq!(absurd.cents(), i64::MAX); // saturated, not wrapped
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Adds two Money values, saturating at the i64 range.
    ///
    /// Grand totals fold through this so a sum of saturated line
    /// totals cannot wrap either.
    #[inline]
    pub const fn saturating_add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in the widget's fixed format:
/// the `DT` currency tag followed by exactly two decimals.
///
/// This IS the display format the widget renders; there is no separate
/// frontend formatting layer.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{} {}{}.{:02}",
            crate::CURRENCY_TAG,
            sign,
            self.major().abs(),
            self.minor()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing an iterator of Money values (grand totals). Saturates so
/// that totals over saturated line totals stay in range.
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Money::saturating_add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(115);
        assert_eq!(money.cents(), 115);
        assert_eq!(money.major(), 1);
        assert_eq!(money.minor(), 15);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(1, 15);
        assert_eq!(money.cents(), 115);

        let negative = Money::from_major_minor(-1, 50);
        assert_eq!(negative.cents(), -150);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(90)), "DT 0.90");
        assert_eq!(format!("{}", Money::from_cents(150)), "DT 1.50");
        assert_eq!(format!("{}", Money::from_cents(240)), "DT 2.40");
        assert_eq!(format!("{}", Money::from_cents(0)), "DT 0.00");
        assert_eq!(format!("{}", Money::from_cents(-150)), "DT -1.50");
    }

    #[test]
    fn test_two_decimals_always() {
        // The two-decimal guarantee holds for every minor-unit value.
        assert_eq!(format!("{}", Money::from_cents(5)), "DT 0.05");
        assert_eq!(format!("{}", Money::from_cents(100)), "DT 1.00");
        assert_eq!(format!("{}", Money::from_cents(101)), "DT 1.01");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(90);
        let b = Money::from_cents(150);

        assert_eq!((a + b).cents(), 240);
        assert_eq!((b - a).cents(), 60);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 270);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(115);
        let line_total = unit_price.multiply_quantity(5);
        assert_eq!(line_total.cents(), 575);
    }

    #[test]
    fn test_multiply_quantity_saturates() {
        let unit_price = Money::from_cents(90);

        let huge = unit_price.multiply_quantity(200_000_000_000_000_000); // 2×10^17
        assert_eq!(huge.cents(), i64::MAX);
        assert!(!huge.is_negative());

        let max = unit_price.multiply_quantity(i64::MAX);
        assert_eq!(max.cents(), i64::MAX);
    }

    #[test]
    fn test_saturating_add() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max.saturating_add(Money::from_cents(1)).cents(), i64::MAX);

        let total: Money = [max, max, Money::from_cents(90)].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_sum() {
        let total: Money = [90, 150, 120]
            .iter()
            .map(|c| Money::from_cents(*c))
            .sum();
        assert_eq!(total.cents(), 360);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(!negative.is_zero());
        assert!(negative.is_negative());
    }
}
