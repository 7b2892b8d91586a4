//! # Validation Module
//!
//! Parse-and-check helpers for operator input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console prompt (apps/console)                                 │
//! │  ├── Reads one trimmed line                                             │
//! │  └── On ValidationError: prints it and asks again                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Text → i64 / u64 / Money                                           │
//! │  └── Sign check, cent rounding                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: ItemStore                                                     │
//! │  ├── Capacity, unique ids                                               │
//! │  └── Quantity never below zero                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use warehouse_core::validation::{parse_integer, parse_price};
//!
//! assert_eq!(parse_integer("choice", " 7 ").unwrap(), 7);
//! assert_eq!(parse_price("0.5").unwrap().cents(), 50);
//! assert!(parse_price("abc").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::{Money, MINOR_DIGITS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Parsers
// =============================================================================

/// Parses a whole number, ignoring surrounding whitespace.
pub fn parse_integer(field: &str, input: &str) -> ValidationResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NotAnInteger {
            field: field.to_string(),
            input: input.trim().to_string(),
        })
}

/// Parses a non-negative whole number (a quantity).
pub fn parse_quantity(field: &str, input: &str) -> ValidationResult<u64> {
    let value = parse_integer(field, input)?;
    validate_quantity(field, value)
}

/// Checks that `value` is not negative and narrows it to `u64`.
pub fn validate_quantity(field: &str, value: i64) -> ValidationResult<u64> {
    u64::try_from(value).map_err(|_| ValidationError::Negative {
        field: field.to_string(),
    })
}

/// Parses a unit price into [`Money`].
///
/// ## Rules
/// - Any plain decimal: `12`, `12.5`, `.5`, `12.`, `0.125`
/// - Scientific notation: `1e2`, `2.5E-1`
/// - Rounded to whole cents, half-up: `0.125` is 13 cents, `0.124` is 12
/// - Negative prices are rejected; `-0` is zero
///
/// ## Example
/// ```rust
/// use warehouse_core::validation::parse_price;
///
/// assert_eq!(parse_price("12").unwrap().cents(), 1200);
/// assert_eq!(parse_price(".5").unwrap().cents(), 50);
/// assert_eq!(parse_price("0.125").unwrap().cents(), 13);
/// assert_eq!(parse_price("1e2").unwrap().cents(), 10000);
/// assert!(parse_price("-1").is_err());
/// ```
pub fn parse_price(input: &str) -> ValidationResult<Money> {
    const FIELD: &str = "price";

    let text = input.trim();
    let (negative, unsigned) = split_sign(text);

    let decimal = Decimal::parse(unsigned).ok_or_else(|| ValidationError::InvalidDecimal {
        field: FIELD.to_string(),
        input: text.to_string(),
    })?;

    if negative && !decimal.is_zero() {
        return Err(ValidationError::Negative {
            field: FIELD.to_string(),
        });
    }

    decimal
        .to_cents()
        .map(Money::from_cents)
        .ok_or_else(|| ValidationError::OutOfRange {
            field: FIELD.to_string(),
            min: 0,
            max: i64::MAX / 100,
        })
}

/// Strips one leading `+` or `-`; returns whether it was `-`.
fn split_sign(text: &str) -> (bool, &str) {
    match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    }
}

fn all_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

/// An unsigned decimal as significant digits plus the position of the point.
///
/// `digits = [1, 2, 5]` is `0.125` with `point = 0` and `1.25` with
/// `point = 1`. Leading zeros are dropped, so zero has no digits.
#[derive(Debug, PartialEq, Eq)]
struct Decimal {
    digits: Vec<u8>,
    point: i64,
}

impl Decimal {
    /// `digits[.digits][(e|E)[+|-]digits]` with at least one mantissa digit.
    fn parse(text: &str) -> Option<Self> {
        let (mantissa, exponent) = match text.find(['e', 'E']) {
            Some(pos) => (&text[..pos], Some(&text[pos + 1..])),
            None => (text, None),
        };

        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return None;
        }

        let exponent = match exponent {
            Some(exponent) => parse_exponent(exponent)?,
            None => 0,
        };

        let mut digits: Vec<u8> = whole
            .bytes()
            .chain(fraction.bytes())
            .map(|b| b - b'0')
            .collect();
        let leading = digits.iter().take_while(|&&d| d == 0).count();
        digits.drain(..leading);

        let point = i64::try_from(whole.len())
            .ok()?
            .saturating_sub(i64::try_from(leading).ok()?)
            .saturating_add(exponent);

        Some(Decimal { digits, point })
    }

    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    fn digit_at(&self, pos: i64) -> u8 {
        usize::try_from(pos)
            .ok()
            .and_then(|pos| self.digits.get(pos))
            .copied()
            .unwrap_or(0)
    }

    /// Whole cents, rounded half-up. `None` when the result overflows `i64`.
    fn to_cents(&self) -> Option<i64> {
        if self.is_zero() {
            return Some(0);
        }

        // digits before the cent boundary
        let kept = self.point.saturating_add(i64::try_from(MINOR_DIGITS).ok()?);

        // the first digit is non-zero, so a huge `kept` overflows within a
        // few rounds
        let mut cents: i64 = 0;
        for pos in 0..kept.max(0) {
            cents = cents
                .checked_mul(10)?
                .checked_add(i64::from(self.digit_at(pos)))?;
        }

        if self.digit_at(kept) >= 5 {
            cents = cents.checked_add(1)?;
        }
        Some(cents)
    }
}

/// `[+|-]digits`, saturating instead of failing on absurd magnitudes.
fn parse_exponent(text: &str) -> Option<i64> {
    let (negative, digits) = split_sign(text);
    if digits.is_empty() || !all_digits(digits) {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

// =============================================================================
// Unit Tests
// =============================================================================
