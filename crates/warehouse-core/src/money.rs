//! # Money Module
//!
//! Provides the `Money` type used for unit prices and stock valuation.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With f64 prices:                                                       │
//! │    0.1 × 3 = 0.30000000000000004  ❌                                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    10 cents × 3 = 30 cents, always                                      │
//! │    Operator types "0.10", validation stores 10                          │
//! │    Operator types "0.125", validation rounds half-up and stores 13      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use warehouse_core::money::Money;
//!
//! let price = Money::from_cents(1099); // 10.99
//! let stock_value = price.multiply_quantity(3);
//! assert_eq!(stock_value.cents(), 3297);
//! assert_eq!(stock_value.to_string(), "32.97");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Number of fractional digits carried by `Money`.
pub const MINOR_DIGITS: usize = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: matches the arithmetic the rest of the crate does;
///   validation keeps unit prices non-negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialized as a bare integer**: `{"price": 50}` means 0.50
/// - **Rounding**: input finer than a cent rounds half-up, so `0.125`
///   becomes 13 cents (see `validation::parse_price`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use warehouse_core::money::Money;
    ///
    /// let price = Money::from_cents(50); // 0.50
    /// assert_eq!(price.cents(), 50);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
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

    /// Multiplies a unit price by a stock quantity.
    ///
    /// Saturates at `i64::MAX` instead of overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use warehouse_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u64) -> Self {
        let qty = i64::try_from(qty).unwrap_or(i64::MAX);
        Money(self.0.saturating_mul(qty))
    }

    /// Formats the amount with a currency symbol in front, e.g. `$10.99`.
    pub fn display_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}{}.{:02}", sign, symbol, self.major().abs(), self.minor())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal rendering without a currency symbol: `10.99`, `-5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(""))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |total, amount| total + amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
