//! User settings for tabungan-cli
//!
//! Manages user preferences: the minimum accepted amount and the default
//! chart style.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::paths::TabunganPaths;
use crate::error::TabunganError;
use crate::models::Money;

/// Chart rendering style preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartStyle {
    /// Grouped horizontal bars (default)
    #[default]
    Bar,
    /// Per-series value rows with a trend line
    Line,
}

impl fmt::Display for ChartStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartStyle::Bar => write!(f, "bar"),
            ChartStyle::Line => write!(f, "line"),
        }
    }
}

impl FromStr for ChartStyle {
    type Err = TabunganError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bar" => Ok(ChartStyle::Bar),
            "line" => Ok(ChartStyle::Line),
            other => Err(TabunganError::Config(format!(
                "Unknown chart style: '{}' (use bar or line)",
                other
            ))),
        }
    }
}

/// User settings for tabungan-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Smallest amount accepted for a savings or expense entry
    #[serde(default = "default_min_amount")]
    pub min_amount: Money,

    /// Chart style used when the chart command gets no explicit flag
    #[serde(default)]
    pub default_chart_style: ChartStyle,
}

fn default_schema_version() -> u32 {
    1
}

fn default_min_amount() -> Money {
    Money::from_rupiah(1000)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            min_amount: default_min_amount(),
            default_chart_style: ChartStyle::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TabunganPaths) -> Result<Self, TabunganError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TabunganError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TabunganError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TabunganPaths) -> Result<(), TabunganError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TabunganError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| TabunganError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.min_amount, Money::from_rupiah(1000));
        assert_eq!(settings.default_chart_style, ChartStyle::Bar);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TabunganPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.min_amount = Money::from_rupiah(2000);
        settings.default_chart_style = ChartStyle::Line;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.min_amount, Money::from_rupiah(2000));
        assert_eq!(loaded.default_chart_style, ChartStyle::Line);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TabunganPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.min_amount, Money::from_rupiah(1000));
    }

    #[test]
    fn test_chart_style_parse() {
        assert_eq!("bar".parse::<ChartStyle>().unwrap(), ChartStyle::Bar);
        assert_eq!("Line".parse::<ChartStyle>().unwrap(), ChartStyle::Line);
        assert!("pie".parse::<ChartStyle>().is_err());
    }

    #[test]
    fn test_partial_settings_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TabunganPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        std::fs::write(paths.settings_file(), r#"{"min_amount": 500}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.min_amount, Money::from_rupiah(500));
        assert_eq!(loaded.schema_version, 1);
        assert_eq!(loaded.default_chart_style, ChartStyle::Bar);
    }
}
