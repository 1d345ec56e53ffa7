//! Backup manager
//!
//! Creates dated JSON archives of both collections and lists what already
//! exists in the backup directory.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::TabunganPaths;
use crate::error::{TabunganError, TabunganResult};
use crate::models::{ExpenseEntry, SavingsEntry};

pub const BACKUP_VERSION: f64 = 1.0;

const BACKUP_PREFIX: &str = "backup_tabungan_";

/// Backup archive format
///
/// Both collections are required: an archive missing either key does not
/// decode. `timestamp` and `version` are informational and tolerated if
/// absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupArchive {
    /// Savings entries
    pub tabungan: Vec<SavingsEntry>,
    /// Expense entries
    pub pengeluaran: Vec<ExpenseEntry>,
    /// When the backup was created
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    /// Archive format version
    #[serde(default = "default_version")]
    pub version: f64,
}

fn default_version() -> f64 {
    BACKUP_VERSION
}

impl BackupArchive {
    /// Total number of entries across both collections
    pub fn entry_count(&self) -> usize {
        self.tabungan.len() + self.pengeluaran.len()
    }
}

/// Metadata about a backup file
#[derive(Debug, Clone)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Full path to backup
    pub path: PathBuf,
    /// When the backup was created
    pub created_at: DateTime<Utc>,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Manages backup creation and lookup
pub struct BackupManager {
    backup_dir: PathBuf,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(paths: &TabunganPaths) -> Self {
        Self {
            backup_dir: paths.backup_dir(),
        }
    }

    /// Create a dated backup of both collections
    ///
    /// Returns the path to the created backup file.
    pub fn create_backup(
        &self,
        savings: &[SavingsEntry],
        expenses: &[ExpenseEntry],
        now: DateTime<Utc>,
    ) -> TabunganResult<PathBuf> {
        fs::create_dir_all(&self.backup_dir)
            .map_err(|e| TabunganError::Io(format!("Failed to create backup directory: {}", e)))?;

        let archive = BackupArchive {
            tabungan: savings.to_vec(),
            pengeluaran: expenses.to_vec(),
            timestamp: Some(now),
            version: BACKUP_VERSION,
        };

        let backup_path = self.next_backup_path(now.date_naive());

        let json = serde_json::to_string_pretty(&archive)
            .map_err(|e| TabunganError::Json(format!("Failed to serialize backup: {}", e)))?;
        fs::write(&backup_path, json)
            .map_err(|e| TabunganError::Io(format!("Failed to write backup file: {}", e)))?;

        Ok(backup_path)
    }

    // Same-day backups get a numeric suffix instead of overwriting
    fn next_backup_path(&self, date: NaiveDate) -> PathBuf {
        let base = format!("{}{}", BACKUP_PREFIX, date.format("%Y-%m-%d"));
        let mut path = self.backup_dir.join(format!("{}.json", base));
        let mut counter = 1;
        while path.exists() {
            path = self.backup_dir.join(format!("{}_{}.json", base, counter));
            counter += 1;
        }
        path
    }

    /// List all available backups, newest first
    pub fn list_backups(&self) -> TabunganResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir)
            .map_err(|e| TabunganError::Io(format!("Failed to read backup directory: {}", e)))?
        {
            let entry = entry
                .map_err(|e| TabunganError::Io(format!("Failed to read directory entry: {}", e)))?;

            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                if let Some(info) = parse_backup_info(&path) {
                    backups.push(info);
                }
            }
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(backups)
    }

    /// Get a specific backup by filename
    pub fn get_backup(&self, filename: &str) -> TabunganResult<Option<BackupInfo>> {
        let path = self.backup_dir.join(filename);
        if path.exists() {
            Ok(parse_backup_info(&path))
        } else {
            Ok(None)
        }
    }

    /// Get the most recent backup
    pub fn get_latest_backup(&self) -> TabunganResult<Option<BackupInfo>> {
        let backups = self.list_backups()?;
        Ok(backups.into_iter().next())
    }

    /// Get backup directory path
    pub fn backup_dir(&self) -> &PathBuf {
        &self.backup_dir
    }
}

fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();

    if !filename.starts_with(BACKUP_PREFIX) {
        return None;
    }

    let metadata = fs::metadata(path).ok()?;
    let created_at = DateTime::<Utc>::from(metadata.modified().ok()?);

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        created_at,
        size_bytes: metadata.len(),
    })
}
