//! CLI-specific error types
//!
//! All CLI errors end the process with a non-zero status.

use std::io;

use thiserror::Error;

use crate::http_server::ConfigError;
use crate::store::StoreError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Runtime, store or listener failed to start
    #[error("Boot failed: {0}")]
    BootFailed(String),

    /// I/O error (stdout)
    #[error("I/O error: {0}")]
    Io(String),
}

impl CliError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "ESTATE_CLI_CONFIG_ERROR",
            Self::BootFailed(_) => "ESTATE_CLI_BOOT_FAILED",
            Self::Io(_) => "ESTATE_CLI_IO_ERROR",
        }
    }

    /// Boot failed
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::BootFailed(msg.into())
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Io(format!("JSON error: {}", e))
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        Self::boot_failed(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(CliError::boot_failed("x").code(), "ESTATE_CLI_BOOT_FAILED");
        assert_eq!(CliError::from(io::Error::other("x")).code(), "ESTATE_CLI_IO_ERROR");
    }

    #[test]
    fn test_store_error_becomes_boot_failure() {
        let err = CliError::from(StoreError::Unavailable("bad uri".into()));
        assert_eq!(err.code(), "ESTATE_CLI_BOOT_FAILED");
        assert!(err.to_string().contains("bad uri"));
    }
}
