//! # Error Types
//!
//! Structured error types for kennel_core. The capacity calculator itself is
//! total (missing heights and zero capacities are absorbed via documented
//! defaults), so errors only surface at the seams that can genuinely fail:
//! pricing-table lookups and facility file I/O.
//!
//! ## Example
//!
//! ```rust
//! use kennel_core::errors::{KennelError, KennelResult};
//!
//! fn validate_capacity(capacity_m2: f64) -> KennelResult<()> {
//!     if capacity_m2 < 0.0 {
//!         return Err(KennelError::invalid_input(
//!             "capacity_m2",
//!             capacity_m2.to_string(),
//!             "Room capacity cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for kennel_core operations
pub type KennelResult<T> = Result<T, KennelError>;

/// Structured error type for engine operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by API layers and UIs.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum KennelError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// No price row configured for a dog size class
    #[error("No price configured for dog size: {dog_size}")]
    PriceNotFound { dog_size: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl KennelError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        KennelError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        KennelError::MissingField {
            field: field.into(),
        }
    }

    /// Create a PriceNotFound error
    pub fn price_not_found(dog_size: impl Into<String>) -> Self {
        KennelError::PriceNotFound {
            dog_size: dog_size.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        KennelError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            KennelError::InvalidInput { .. } => "INVALID_INPUT",
            KennelError::MissingField { .. } => "MISSING_FIELD",
            KennelError::PriceNotFound { .. } => "PRICE_NOT_FOUND",
            KennelError::FileError { .. } => "FILE_ERROR",
            KennelError::SerializationError { .. } => "SERIALIZATION_ERROR",
            KennelError::VersionMismatch { .. } => "VERSION_MISMATCH",
            KennelError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = KennelError::invalid_input("capacity_m2", "-5.0", "Capacity cannot be negative");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: KennelError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(KennelError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(KennelError::price_not_found("large").error_code(), "PRICE_NOT_FOUND");
    }
}
