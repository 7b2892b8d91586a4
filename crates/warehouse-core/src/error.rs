//! # Error Types
//!
//! Domain-specific error types for warehouse-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  warehouse-core errors (this file)                                      │
//! │  ├── CoreError        - Store and workflow rule violations              │
//! │  └── ValidationError  - Unparsable or out-of-range operator input       │
//! │                                                                         │
//! │  console errors (apps/console)                                          │
//! │  └── ConsoleError     - Terminal I/O and configuration failures         │
//! │                                                                         │
//! │  Every CoreError is recovered by the session and shown as a message.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// None of these are fatal: the console reports them and shows the menu
/// again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The store already holds `capacity` items.
    #[error("Warehouse is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// An item with this id is already registered.
    #[error("Item ID {0} already exists")]
    DuplicateId(String),

    /// No item with this id (or at this position) exists.
    #[error("Item {0} not found")]
    NotFound(String),

    /// A stock change would drive the quantity below zero, or the amount
    /// itself was negative.
    ///
    /// ## User Workflow
    /// ```text
    /// Stock-out (amount: 8)
    ///      │
    ///      ▼
    /// Check quantity: 5
    ///      │
    ///      ▼
    /// InvalidAdjustment { id: "B001", quantity: 5, delta: -8 }
    ///      │
    ///      ▼
    /// Console shows: "Invalid amount or exceeds stock"
    /// ```
    #[error("Invalid adjustment of {delta} for {id}: quantity is {quantity}")]
    InvalidAdjustment { id: String, quantity: u64, delta: i64 },

    /// A menu or action selector outside the accepted range.
    #[error("Invalid choice: {value}")]
    InvalidSelector { value: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These are the "invalid input" kind: the console answers them by asking
/// again rather than aborting the operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input is not a whole number.
    #[error("{field} must be a whole number, got '{input}'")]
    NotAnInteger { field: String, input: String },

    /// Input is not a decimal number.
    #[error("{field} must be a decimal number, got '{input}'")]
    InvalidDecimal { field: String, input: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Numeric value does not fit the target range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidAdjustment {
            id: "B001".to_string(),
            quantity: 5,
            delta: -8,
        };
        assert_eq!(
            err.to_string(),
            "Invalid adjustment of -8 for B001: quantity is 5"
        );

        let err = CoreError::CapacityExceeded { capacity: 2000 };
        assert_eq!(err.to_string(), "Warehouse is full (capacity 2000)");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::NotAnInteger {
            field: "quantity".to_string(),
            input: "ten".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be a whole number, got 'ten'");

        let err = ValidationError::Negative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Negative {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
