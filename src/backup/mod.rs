//! Backup system
//!
//! Dated JSON archives of both collections, plus strict decoding for
//! restore.
//!
//! # Backup Format
//!
//! Backups are stored as JSON files with the following structure:
//! - `tabungan`: Savings entries (required)
//! - `pengeluaran`: Expense entries (required)
//! - `timestamp`: When the backup was created (informational)
//! - `version`: Archive format version (informational)
//!
//! An archive missing either collection is rejected without touching the
//! live data.

mod manager;
mod restore;

pub use manager::{BackupArchive, BackupInfo, BackupManager, BACKUP_VERSION};
pub use restore::{load_archive, validate_backup, ValidationResult};
