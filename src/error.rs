//! Custom error types for Pluvio
//!
//! Two kinds of failure matter to callers: a [`ValidationError`] raised by the
//! business rules, which is recoverable and carries a field-level message, and
//! everything else (storage, I/O, configuration), which is not.

use thiserror::Error;

use crate::models::ValidationError;

/// The main error type for Pluvio operations
#[derive(Error, Debug)]
pub enum PluvioError {
    /// A rainfall entry failed business validation
    #[error("Erreur de validation : {0}")]
    Validation(#[from] ValidationError),

    /// The backing store failed (I/O, constraint violation, corrupt row...)
    #[error("Erreur de stockage : {0}")]
    Storage(String),

    /// Configuration-related errors
    #[error("Erreur de configuration : {0}")]
    Config(String),

    /// File I/O errors
    #[error("Erreur d'entrée/sortie : {0}")]
    Io(String),

    /// Export errors
    #[error("Erreur d'export : {0}")]
    Export(String),
}

impl PluvioError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<std::io::Error> for PluvioError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PluvioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<sqlx::Error> for PluvioError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for Pluvio operations
pub type PluvioResult<T> = Result<T, PluvioError>;
