//! Backup restoration
//!
//! Reads and validates backup archives. Nothing here writes the live
//! collections; the record service applies a loaded archive.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::{TabunganError, TabunganResult};

use super::manager::BackupArchive;

/// Read and decode a backup archive
///
/// Decoding is strict: both collections must be present and every entry
/// must match the schema, otherwise the archive is rejected as a whole.
pub fn load_archive(path: &Path) -> TabunganResult<BackupArchive> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TabunganError::backup_not_found(path.display().to_string())
        } else {
            TabunganError::Io(format!("Failed to read backup file: {}", e))
        }
    })?;

    serde_json::from_str(&contents).map_err(|e| TabunganError::invalid_backup(e.to_string()))
}

/// Result of validating a backup
#[derive(Debug)]
pub struct ValidationResult {
    /// Number of savings entries in the archive
    pub savings_count: usize,
    /// Number of expense entries in the archive
    pub expense_count: usize,
    /// When the backup was created, if recorded
    pub timestamp: Option<DateTime<Utc>>,
    /// Archive format version
    pub version: f64,
}

impl ValidationResult {
    /// Get a one-line summary of the archive contents
    pub fn summary(&self) -> String {
        format!(
            "{} tabungan, {} pengeluaran (v{})",
            self.savings_count, self.expense_count, self.version
        )
    }
}

/// Validate a backup file without restoring it
pub fn validate_backup(path: &Path) -> TabunganResult<ValidationResult> {
    let archive = load_archive(path)?;

    Ok(ValidationResult {
        savings_count: archive.tabungan.len(),
        expense_count: archive.pengeluaran.len(),
        timestamp: archive.timestamp,
        version: archive.version,
    })
}
