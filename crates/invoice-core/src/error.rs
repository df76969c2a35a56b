//! # Error Types
//!
//! Domain-specific error types for invoice-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  invoice-core errors (this file)                                       │
//! │  ├── CoreError        - Catalog / master-data failures                 │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  invoice-store errors (separate crate)                                 │
//! │  └── StoreError       - Persisted state I/O failures                   │
//! │                                                                         │
//! │  invoice-desk errors (in app)                                          │
//! │  └── ApiError         - What the editor sees (serialized)              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Editor                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Never Errors
//! The Totals Engine, the words converter and the document formatter are
//! total functions. Nothing in this file is returned from them.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Master product cannot be found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Saved customer cannot be found.
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These only guard master-data entry (new catalog products, saved
/// customers), and only for the presence and length of their text
/// fields. Numbers and GSTINs are never validated: negative or fractional
/// values pass straight through the totals.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("42".to_string());
        assert_eq!(err.to_string(), "Product not found: 42");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "hsn code".to_string(),
        };
        assert_eq!(err.to_string(), "hsn code is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "name must be at most 200 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
