//! # Error Types
//!
//! Domain-specific error types for ferreteria-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ferreteria-core errors (this file)                                     │
//! │  ├── CoreError        - Business rule violations (recoverable)          │
//! │  └── ValidationError  - Raw input could not be coerced                  │
//! │                                                                         │
//! │  ferreteria-cli errors (app crate)                                      │
//! │  └── CliError         - Menu choice, console I/O, configuration         │
//! │                                                                         │
//! │  Flow: ValidationError → re-prompt                                      │
//! │        CoreError       → message printed, menu continues                │
//! │        CliError::Io    → process exits                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Messages are Spanish because they are printed verbatim to the operator.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Inventory business errors.
///
/// Every variant is recoverable: the operation is aborted, the store is left
/// untouched and the operator gets the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A product with this code is already registered.
    #[error("ADVERTENCIA: ya existe un producto con el código {code}")]
    DuplicateCode { code: i64 },

    /// No product is registered under this code.
    #[error("Producto con código {0} no encontrado")]
    ProductNotFound(i64),

    /// Trying to sell more units than are in stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Registrar Venta (code: 1, qty: 10)
    ///      │
    ///      ▼
    /// Check stock: available=2
    ///      │
    ///      ▼
    /// InsufficientStock { code: 1, available: 2, requested: 10 }
    ///      │
    ///      ▼
    /// Console: "Stock insuficiente para el producto 'Martillo' ..."
    /// ```
    #[error(
        "Stock insuficiente para el producto '{name}' (código {code}): disponible {available}, solicitado {requested}"
    )]
    InsufficientStock {
        code: i64,
        name: String,
        available: i64,
        requested: i64,
    },

    /// The stock adjustment does not fit in an `i64`.
    #[error("La cantidad excede el stock máximo representable para el código {code}")]
    StockOverflow { code: i64 },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input coercion errors.
///
/// Raised when console text cannot be turned into the typed value a field
/// requires. The console layer re-prompts the same field on these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required value is missing.
    #[error("{field} es obligatorio")]
    Required { field: String },

    /// Text is not a valid number for the field.
    #[error("{field} tiene un formato inválido: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value is out of range.
    #[error("{field} debe estar entre {min} y {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

impl ValidationError {
    /// Creates an InvalidFormat error for a field.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
