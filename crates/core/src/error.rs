//! Unified error types for zookeepr.
//!
//! Every layer (storage, store, HTTP) reports failures through this enum so the
//! outer surface can classify them without knowing which layer raised them.

use thiserror::Error;

/// All zookeepr errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A creation candidate failed the structural check
    #[error("validation failed: {0}")]
    Validation(String),

    /// No record carries the requested identifier
    #[error("not found: {0}")]
    NotFound(String),

    /// I/O error while reading or writing the backing store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding of the backing document failed
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The backing store rejected or lost a write
    #[error("storage error: {0}")]
    Storage(String),

    /// Internal error (bug or invariant violation)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for zookeepr operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if the failure happened while persisting.
    ///
    /// These are the errors a caller sees when a new record was not published
    /// because the backing store could not be rewritten.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            Error::Io(_) | Error::Serialization(_) | Error::Storage(_)
        )
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
