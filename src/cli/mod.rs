//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer. Class,
//! amount, and date arguments arrive as strings and are parsed here.

pub mod backup;
pub mod chart;
pub mod config;
pub mod entry;
pub mod export;
pub mod rekap;
pub mod reset;

pub use backup::{handle_backup_command, BackupCommands};
pub use chart::handle_chart_command;
pub use config::handle_config_command;
pub use entry::{handle_keluar_command, handle_masuk_command};
pub use export::handle_export_command;
pub use rekap::handle_rekap_command;
pub use reset::handle_reset_command;

use chrono::NaiveDate;
use clap::Args;

use crate::error::{TabunganError, TabunganResult};
use crate::models::{ClassFilter, FilterState, Kelas, Money};

/// Filter flags shared by the report and chart commands
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Class filter: all, 7, 8, or 9
    #[arg(long, default_value = "all")]
    pub kelas: String,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub dari: Option<String>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub sampai: Option<String>,

    /// Drop the date bounds entirely (default range is month to date)
    #[arg(long, conflicts_with_all = ["dari", "sampai"])]
    pub semua: bool,
}

impl FilterArgs {
    /// Resolve the flags into a filter state
    ///
    /// With no date flags the range defaults to month-to-date, the same
    /// default view the recap always opened with. `--semua` lifts the
    /// bounds entirely.
    pub fn resolve(&self, today: NaiveDate) -> TabunganResult<FilterState> {
        let kelas = parse_class_filter(&self.kelas)?;

        let filter = if self.dari.is_some() || self.sampai.is_some() {
            let start = self.dari.as_deref().map(parse_date).transpose()?;
            let end = self.sampai.as_deref().map(parse_date).transpose()?;
            FilterState::new().date_range(start, end)
        } else if self.semua {
            FilterState::new()
        } else {
            FilterState::month_to_date(today)
        };

        Ok(filter.with_kelas(kelas))
    }
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(s: &str) -> TabunganResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        TabunganError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}

/// Parse a rupiah amount argument
pub fn parse_amount(s: &str) -> TabunganResult<Money> {
    Money::parse(s).map_err(|e| TabunganError::Validation(e.to_string()))
}

/// Parse a single class argument
pub fn parse_kelas(s: &str) -> TabunganResult<Kelas> {
    s.parse()
        .map_err(|e: crate::models::KelasParseError| TabunganError::Validation(e.to_string()))
}

/// Parse a class filter argument (accepts "all")
pub fn parse_class_filter(s: &str) -> TabunganResult<ClassFilter> {
    s.parse()
        .map_err(|e: crate::models::KelasParseError| TabunganError::Validation(e.to_string()))
}
