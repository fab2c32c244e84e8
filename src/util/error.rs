//! Error types for the assetkit library.

use thiserror::Error;

use crate::core::{EntityKind, Operation, Variant};

/// Main error type for asset entity operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A concrete entity type was asked to perform a variant-specific
    /// operation it does not implement. This is a hard failure: the
    /// contract never substitutes default or zeroed data for the gap.
    #[error("{operation} under the {variant} variant is not supported by {type_name}")]
    UnsupportedVariant {
        type_name: &'static str,
        variant: Variant,
        operation: Operation,
    },

    /// Two entities of different concrete types were used where the same
    /// concrete type is required (value copy).
    #[error("Entity type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// No factory is registered for an entity kind.
    #[error("No entity factory registered for kind {0}")]
    UnknownKind(EntityKind),

    /// A binary source ran out of bytes.
    #[error("Unexpected end of data at position {0}")]
    UnexpectedEof(u64),

    /// Malformed data encountered while populating an entity.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// I/O error from an underlying source or sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error.
    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an unsupported-variant error for a concrete entity type.
    pub fn unsupported(type_name: &'static str, variant: Variant, operation: Operation) -> Self {
        Self::UnsupportedVariant {
            type_name,
            variant,
            operation,
        }
    }

    /// Create an invalid data error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Create an "other" error from a string.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// Result type alias for asset entity operations.
pub type Result<T> = std::result::Result<T, Error>;
