//! Path management for tabungan-cli
//!
//! Provides XDG-compliant path resolution for configuration, data, and backups.
//!
//! ## Path Resolution Order
//!
//! 1. `TABUNGAN_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/tabungan-cli` or `~/.config/tabungan-cli`
//! 3. Windows: `%APPDATA%\tabungan-cli`

use std::path::PathBuf;

use crate::error::TabunganError;

/// Manages all paths used by tabungan-cli
#[derive(Debug, Clone)]
pub struct TabunganPaths {
    /// Base directory for all tabungan-cli data
    base_dir: PathBuf,
}

impl TabunganPaths {
    /// Create a new TabunganPaths instance
    ///
    /// Path resolution:
    /// 1. `TABUNGAN_CLI_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/tabungan-cli` or `~/.config/tabungan-cli`
    /// 3. Windows: `%APPDATA%\tabungan-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TabunganError> {
        let base_dir = if let Ok(custom) = std::env::var("TABUNGAN_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create TabunganPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/tabungan-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/tabungan-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the backup directory (~/.config/tabungan-cli/backups/)
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the savings entries file
    pub fn tabungan_file(&self) -> PathBuf {
        self.data_dir().join("tabungan.json")
    }

    /// Get the path to the expense entries file
    pub fn pengeluaran_file(&self) -> PathBuf {
        self.data_dir().join("pengeluaran.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates the base, data, and backup directories.
    pub fn ensure_directories(&self) -> Result<(), TabunganError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TabunganError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TabunganError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.backup_dir())
            .map_err(|e| TabunganError::Io(format!("Failed to create backup directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, TabunganError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| TabunganError::Config("Could not determine home directory".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("tabungan-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TabunganError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| TabunganError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("tabungan-cli"))
}
