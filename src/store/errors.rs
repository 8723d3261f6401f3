//! Document store error types
//!
//! Error codes:
//! - ESTATE_STORE_UNAVAILABLE: no connection configured, or no server reachable
//! - ESTATE_PERSISTENCE_FAILED: the store rejected or failed an operation

use mongodb::error::ErrorKind;
use thiserror::Error;

/// Store errors. Neither kind is retried.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No active store connection: none configured, or server selection failed
    #[error("Document store unavailable: {0}")]
    Unavailable(String),

    /// The store failed a read or write after a connection existed
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl StoreError {
    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Unavailable(_) => "ESTATE_STORE_UNAVAILABLE",
            StoreError::Persistence(_) => "ESTATE_PERSISTENCE_FAILED",
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        match e.kind.as_ref() {
            ErrorKind::ServerSelection { .. } => StoreError::Unavailable(e.to_string()),
            _ => StoreError::Persistence(e.to_string()),
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            StoreError::Unavailable("x".into()).code(),
            "ESTATE_STORE_UNAVAILABLE"
        );
        assert_eq!(
            StoreError::Persistence("x".into()).code(),
            "ESTATE_PERSISTENCE_FAILED"
        );
    }

    #[test]
    fn test_display_keeps_cause() {
        let err = StoreError::Persistence("duplicate key".into());
        assert!(err.to_string().contains("duplicate key"));
        assert!(!err.is_unavailable());
    }
}
