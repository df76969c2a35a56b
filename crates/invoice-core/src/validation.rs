//! # Validation Module
//!
//! Rules for master-data entry: new catalog products and saved customers.
//!
//! ## Where Validation Applies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Scope                                   │
//! │                                                                         │
//! │  Catalog entry (THIS MODULE)                                           │
//! │  ├── product: name, HSN code                                           │
//! │  └── customer: name, address                                           │
//! │                                                                         │
//! │  NOT validated                                                          │
//! │  ├── rates, quantities, discount, freight: non-finite becomes 0,       │
//! │  │   everything else passes straight through the Totals Engine         │
//! │  └── GSTIN: stored as typed, upper-cased                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use invoice_core::validation::{validate_hsn_code, validate_product_name};
//!
//! validate_product_name("BHU-MITRA (5 Lt)").unwrap();
//! assert!(validate_hsn_code("  ").is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest search query that can match anything.
pub const MAX_SEARCH_QUERY_LENGTH: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

fn required(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    required("name", name, 200)
}

/// Validates an HSN/SAC code.
///
/// ## Rules
/// - Must not be empty
/// - At most 20 characters (catalog codes look like `3808:9910`)
pub fn validate_hsn_code(hsn_code: &str) -> ValidationResult<()> {
    required("hsn code", hsn_code, 20)
}

/// Validates a customer name.
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    required("name", name, 200)
}

/// Validates a customer address.
pub fn validate_address(address: &str) -> ValidationResult<()> {
    required("address", address, 500)
}

/// Trims a search query.
///
/// ## Returns
/// * `Some(query)` - trimmed, possibly empty
/// * `None` - longer than [`MAX_SEARCH_QUERY_LENGTH`]; no entry can match it
///
/// ## Example
/// ```rust
/// use invoice_core::validation::normalize_search_query;
///
/// assert_eq!(normalize_search_query("  blume ").as_deref(), Some("blume"));
/// assert_eq!(normalize_search_query(&"x".repeat(101)), None);
/// ```
pub fn normalize_search_query(query: &str) -> Option<String> {
    let query = query.trim();
    if query.chars().count() > MAX_SEARCH_QUERY_LENGTH {
        return None;
    }
    Some(query.to_string())
}
