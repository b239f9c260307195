//! Money type for representing currency amounts
//!
//! Amounts are stored as `f64` currency units. Even splits divide with plain
//! floating-point division; no remainder is redistributed, so callers compare
//! against a small threshold instead of exact zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount in whole currency units (e.g. `10.5` is $10.50)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    /// Create a Money amount from currency units
    ///
    /// # Examples
    /// ```
    /// use bill_splitter::models::Money;
    /// let amount = Money::new(10.5); // $10.50
    /// ```
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use bill_splitter::models::Money;
    /// assert_eq!(Money::from_cents(1050), Money::new(10.5));
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(cents as f64 / 100.0)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw amount
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Check if the amount is a real number (not NaN or infinite)
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Check if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Check if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// The smaller of two amounts
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Whether the amount lies within `threshold` of zero (inclusive)
    pub fn is_settled(&self, threshold: f64) -> bool {
        self.0.abs() <= threshold
    }

    /// Divide evenly among `parts` people
    ///
    /// Plain division: `Money::new(100.0).split(3)` is 33.333..., and three
    /// such shares need not add back to exactly 100.
    pub fn split(&self, parts: usize) -> Self {
        Self(self.0 / parts as f64)
    }

    /// Round half away from zero to `decimal_places`
    pub fn round_to(&self, decimal_places: u32) -> Self {
        let factor = 10f64.powi(decimal_places as i32);
        Self((self.0 * factor).round() / factor)
    }

    /// Format with a currency symbol and a fixed number of decimals
    pub fn format_with(&self, symbol: &str, decimal_places: usize) -> String {
        let magnitude = self.0.abs();
        // Avoid printing "-$0.00" for tiny negative noise
        let rounded_zero = format!("{:.*}", decimal_places, magnitude)
            .chars()
            .all(|c| c == '0' || c == '.');
        if self.is_negative() && !rounded_zero {
            format!("-{}{:.*}", symbol, decimal_places, magnitude)
        } else {
            format!("{}{:.*}", symbol, decimal_places, magnitude)
        }
    }

    /// Format with a currency symbol at two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        self.format_with(symbol, 2)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
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

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::new(10.5).to_string(), "$10.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(Money::new(-10.5).to_string(), "-$10.50");
        assert_eq!(Money::new(0.05).to_string(), "$0.05");
        assert_eq!(Money::new(-0.001).to_string(), "$0.00");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::new(1234.5).format_with("€", 2), "€1234.50");
        assert_eq!(Money::new(-7.0).format_with("¥", 0), "-¥7");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(10.0);
        let b = Money::new(5.0);

        assert_eq!(a + b, Money::new(15.0));
        assert_eq!(a - b, Money::new(5.0));
        assert_eq!(-a, Money::new(-10.0));
        assert_eq!(a.min(b), b);
    }

    #[test]
    fn test_split_does_not_redistribute() {
        let share = Money::new(100.0).split(3);
        assert_eq!(share.amount(), 100.0 / 3.0);
        let resummed = share + share + share;
        assert!((resummed.amount() - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(Money::new(33.333_333).round_to(2), Money::new(33.33));
        assert_eq!(Money::new(2.675_1).round_to(2), Money::new(2.68));
        assert_eq!(Money::new(-1.005_1).round_to(2), Money::new(-1.01));
    }

    #[test]
    fn test_is_settled() {
        assert!(Money::new(0.004).is_settled(0.01));
        assert!(Money::new(-0.009).is_settled(0.01));
        assert!(Money::new(0.01).is_settled(0.01));
        assert!(!Money::new(0.02).is_settled(0.01));
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Money::new(1.0), Money::new(2.0), Money::new(3.5)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::new(6.5));
    }

    #[test]
    fn test_serialization() {
        let m = Money::new(10.5);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "10.5");
        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
