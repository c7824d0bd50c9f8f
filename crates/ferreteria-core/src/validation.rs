//! # Validation Module
//!
//! Coerces raw console text into the typed values each field needs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Input Pipeline                                     │
//! │                                                                         │
//! │  Console line ("  12 \n")                                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  THIS MODULE: trim + parse                                              │
//! │  ├── Ok(12)                 → field accepted                            │
//! │  └── Err(ValidationError)   → message shown, SAME field re-prompted     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Inventory operation (business rules: duplicates, stock)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only type coercion happens here. Signs and magnitudes are not checked:
//! negative quantities and prices are passed through to the store as typed.
//!
//! ## Usage
//! ```rust
//! use ferreteria_core::validation::{parse_code, parse_price};
//!
//! assert_eq!(parse_code(" 12 ").unwrap(), 12);
//! assert!(parse_code("doce").is_err());
//! assert_eq!(parse_price("1500").unwrap().cents(), 150_000);
//! ```

use std::num::IntErrorKind;

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Coercion
// =============================================================================

/// Parses an integer field.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Empty input → `Required`
/// - Out of `i64` range → `OutOfRange`
/// - Anything else that is not an integer → `InvalidFormat`
pub fn parse_integer(field: &str, input: &str) -> ValidationResult<i64> {
    let text = input.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    text.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ValidationError::OutOfRange {
            field: field.to_string(),
            min: i64::MIN,
            max: i64::MAX,
        },
        _ => ValidationError::invalid_format(
            field,
            format!("'{}' no es un número entero", text),
        ),
    })
}

/// Parses a product code.
pub fn parse_code(input: &str) -> ValidationResult<i64> {
    parse_integer("código", input)
}

/// Parses a quantity (stock, restock amount, units sold).
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    parse_integer("cantidad", input)
}

/// Parses a decimal price into [`Money`].
pub fn parse_price(input: &str) -> ValidationResult<Money> {
    input.parse()
}

// =============================================================================
// Unit Tests
// =============================================================================
