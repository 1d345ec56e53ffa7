//! Custom error types for tabungan-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for tabungan-cli operations
#[derive(Error, Debug)]
pub enum TabunganError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Backup import errors (bad archive shape, missing collections)
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TabunganError {
    /// Create a "not found" error for backups
    pub fn backup_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Backup",
            identifier: identifier.into(),
        }
    }

    /// Create an import error for an invalid backup format
    pub fn invalid_backup(reason: impl Into<String>) -> Self {
        Self::Import(format!("Format file backup tidak valid: {}", reason.into()))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TabunganError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TabunganError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for tabungan-cli operations
pub type TabunganResult<T> = Result<T, TabunganError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TabunganError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = TabunganError::backup_not_found("backup_tabungan_2024-01-01.json");
        assert_eq!(
            err.to_string(),
            "Backup not found: backup_tabungan_2024-01-01.json"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_backup_error() {
        let err = TabunganError::invalid_backup("field `pengeluaran` tidak ditemukan");
        assert!(err
            .to_string()
            .contains("Format file backup tidak valid"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let tabungan_err: TabunganError = io_err.into();
        assert!(matches!(tabungan_err, TabunganError::Io(_)));
    }
}
