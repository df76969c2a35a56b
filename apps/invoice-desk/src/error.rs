//! # API Error Type
//!
//! Unified error type for desk commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tax Invoice Desk                       │
//! │                                                                         │
//! │  Editor                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  addProduct({ name: '' })                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  ApiResult<T>                                                    │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Storage Error? ─── StoreError::Io { .. } ──────────┐           │  │
//! │  │         │                                           │           │  │
//! │  │         ▼                                           ▼           │  │
//! │  │  Validation Error? ─── CoreError::Validation ──── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  e.code    = "VALIDATION_ERROR"                                        │
//! │  e.message = "Product name is required"                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use invoice_core::CoreError;
use invoice_store::StoreError;

/// API error returned from desk commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "EXPORT_IN_PROGRESS",
///   "message": "An export is already running"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or customer id unknown
    NotFound,

    /// Catalog form or search input rejected
    ValidationError,

    /// Persisted state could not be read or written
    StorageError,

    /// A second export was requested while one is running
    ExportInProgress,

    /// Rasterizing or writing the PDF failed
    ExportFailed,

    /// Internal error
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    pub fn export_failed(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ExportFailed, message)
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io { key, source } => {
                // Log the cause, show a short message
                tracing::error!(key = %key, error = %source, "Storage I/O failed");
                ApiError::new(ErrorCode::StorageError, "Could not save or load your data")
            }
            StoreError::Serialize { key, source } => {
                tracing::error!(key = %key, error = %source, "Serialization failed");
                ApiError::new(ErrorCode::StorageError, "Could not save your data")
            }
            StoreError::InvalidKey(key) => {
                ApiError::internal(format!("Invalid storage key: {}", key))
            }
            StoreError::Internal(e) => {
                tracing::error!("Internal store error: {}", e);
                ApiError::new(ErrorCode::StorageError, "Storage operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::CustomerNotFound(id) => ApiError::not_found("Customer", &id),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Result type for desk commands.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use invoice_core::ValidationError;

    #[test]
    fn test_serializes_screaming_code() {
        let err = ApiError::new(ErrorCode::ExportInProgress, "busy");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "EXPORT_IN_PROGRESS");
        assert_eq!(json["message"], "busy");
    }

    #[test]
    fn test_from_core_error() {
        let err: ApiError = CoreError::ProductNotFound("p-1".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: p-1");

        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "Product name".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_from_store_error_hides_cause() {
        let err: ApiError = StoreError::io(
            "last_draft_ske",
            std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"),
        )
        .into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(!err.message.contains("disk on fire"));
    }
}
