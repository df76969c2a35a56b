//! # Store Error Types
//!
//! Error types for persisted-state operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the key and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in desk app) ← Serialized for the editor                    │
//! │                                                                         │
//! │  NOT an error: a stored value that fails to parse. Repositories log    │
//! │  it and hand back the built-in default instead.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persisted-state operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing storage failed.
    ///
    /// ## When This Occurs
    /// - Data directory can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Storage I/O failed for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be serialized for writing.
    #[error("Failed to serialize '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Key contains characters that can't name a file.
    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),

    /// Internal store error.
    #[error("Internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Creates an Io error for a given key.
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            key: key.into(),
            source,
        }
    }

    /// Creates a Serialize error for a given key.
    pub fn serialize(key: impl Into<String>, source: serde_json::Error) -> Self {
        StoreError::Serialize {
            key: key.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::io(
            "last_draft_ske",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "Storage I/O failed for 'last_draft_ske': denied"
        );

        let err = StoreError::InvalidKey("../etc".to_string());
        assert_eq!(err.to_string(), "Invalid storage key: '../etc'");
    }
}
