//! # Money Module
//!
//! Prices as whole cents, read from what the operator typed.
//!
//! ## From Console Text to Cents
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  typed        split on '.'       cents          shown                   │
//! │  ─────────    ──────────────     ───────────    ──────────────          │
//! │  "1500"       1500 | ""          150000         $1500.00                │
//! │  "1500.5"     1500 | "5"         150050         $1500.50                │
//! │  "0.125"      0    | "125"       13 (rounded)   $0.13                   │
//! │  "-3.25"      -3   | "25"        -325           -$3.25                  │
//! │                                                                         │
//! │  The digits are read one by one; the amount never passes through f64.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ferreteria_core::money::Money;
//!
//! let price: Money = "1500.5".parse().unwrap();
//! assert_eq!(price.cents(), 150_050);
//! assert_eq!(price.to_string(), "$1500.50");
//! assert_eq!(price.checked_mul_quantity(3), Some(Money::from_cents(450_150)));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: price updates are not validated, so negative values
///   must be representable
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use ferreteria_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
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

    /// Returns the whole-unit portion (truncated toward zero).
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Multiplies by a quantity, returning `None` on overflow.
    ///
    /// ```rust
    /// use ferreteria_core::money::Money;
    ///
    /// let unit = Money::from_cents(299);
    /// assert_eq!(unit.checked_mul_quantity(3), Some(Money::from_cents(897)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_mul_quantity(2), None);
    /// ```
    #[inline]
    pub fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(qty).map(Money)
    }

    /// Renders the amount with two decimals and no currency symbol.
    ///
    /// This is the piece the report pads into its price column.
    ///
    /// ```rust
    /// use ferreteria_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(150_000).amount_string(), "1500.00");
    /// assert_eq!(Money::from_cents(-550).amount_string(), "-5.50");
    /// ```
    pub fn amount_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal text such as `1500`, `1500.5`, `-3.25` or `.99`.
///
/// ## Rules
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  "  1500.5 "  ─► trim ─► sign? ─► digits ─► "." ─► digits               │
/// │                                                                         │
/// │  1st and 2nd fractional digits   → cents                                │
/// │  3rd fractional digit >= 5       → round half away from zero            │
/// │  4th digit onward                → ignored                              │
/// │  anything else ("1e3", "1_000")  → ValidationError::InvalidFormat       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const FIELD: &str = "precio";

        let text = s.trim();
        if text.is_empty() {
            return Err(ValidationError::Required {
                field: FIELD.to_string(),
            });
        }

        let (negative, unsigned) = match text.as_bytes()[0] {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(ValidationError::invalid_format(FIELD, "no contiene dígitos"));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ValidationError::invalid_format(
                FIELD,
                format!("'{}' no es un número decimal", text),
            ));
        }

        let out_of_range = || ValidationError::OutOfRange {
            field: FIELD.to_string(),
            min: i64::MIN / 100,
            max: i64::MAX / 100,
        };

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };

        let digits: Vec<i64> = fraction.bytes().map(|b| i64::from(b - b'0')).collect();
        let digit = |i: usize| digits.get(i).copied().unwrap_or(0);
        let mut cents_part = digit(0) * 10 + digit(1);
        if digit(2) >= 5 {
            cents_part += 1;
        }

        let magnitude = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents_part))
            .ok_or_else(out_of_range)?;

        Ok(Money(if negative { -magnitude } else { magnitude }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$1500.00` (or `-$5.50`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
