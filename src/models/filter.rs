//! Report filter state
//!
//! A filter is a class selector plus an inclusive date range. Both date
//! bounds are optional; an unset bound matches everything on that side.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use super::kelas::{Kelas, KelasParseError};

/// Class selector: all cohorts or a single one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassFilter {
    #[default]
    All,
    Only(Kelas),
}

impl ClassFilter {
    /// Check whether a class passes this selector
    pub fn matches(&self, kelas: Kelas) -> bool {
        match self {
            ClassFilter::All => true,
            ClassFilter::Only(k) => *k == kelas,
        }
    }

    pub const fn is_all(&self) -> bool {
        matches!(self, ClassFilter::All)
    }
}

impl fmt::Display for ClassFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassFilter::All => write!(f, "all"),
            ClassFilter::Only(k) => write!(f, "{}", k),
        }
    }
}

impl FromStr for ClassFilter {
    type Err = KelasParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(ClassFilter::All)
        } else {
            Ok(ClassFilter::Only(s.parse()?))
        }
    }
}

/// The active report filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    pub kelas: ClassFilter,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl FilterState {
    /// Filter with no constraints (all classes, all dates)
    pub fn new() -> Self {
        Self::default()
    }

    /// The default filter range: first of the current month through today
    pub fn month_to_date(today: NaiveDate) -> Self {
        let first_of_month = today.with_day(1).unwrap_or(today);
        Self {
            kelas: ClassFilter::All,
            start_date: Some(first_of_month),
            end_date: Some(today),
        }
    }

    /// Set the class selector
    pub fn with_kelas(mut self, kelas: ClassFilter) -> Self {
        self.kelas = kelas;
        self
    }

    /// Set the inclusive date bounds
    pub fn date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Check whether a record with this class and date is in scope
    pub fn matches(&self, kelas: Kelas, date: NaiveDate) -> bool {
        let kelas_match = self.kelas.matches(kelas);
        let date_match = self.start_date.map_or(true, |start| date >= start)
            && self.end_date.map_or(true, |end| date <= end);
        kelas_match && date_match
    }
}
