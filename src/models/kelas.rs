//! Class cohort labels
//!
//! The app tracks exactly three grade cohorts. Labels serialize as the
//! strings "7", "8", "9" to match the persisted `kelas` field, and any
//! other label is rejected at decode time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three fixed grade cohorts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Kelas {
    #[serde(rename = "7")]
    Tujuh,
    #[serde(rename = "8")]
    Delapan,
    #[serde(rename = "9")]
    Sembilan,
}

impl Kelas {
    /// All cohorts in report order
    pub const ALL: [Kelas; 3] = [Kelas::Tujuh, Kelas::Delapan, Kelas::Sembilan];

    /// The bare wire label ("7", "8", "9")
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kelas::Tujuh => "7",
            Kelas::Delapan => "8",
            Kelas::Sembilan => "9",
        }
    }

    /// The section heading used in reports and exports ("Kelas 7")
    pub fn heading(&self) -> String {
        format!("Kelas {}", self.as_str())
    }
}

impl fmt::Display for Kelas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Kelas {
    type Err = KelasParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "7" => Ok(Kelas::Tujuh),
            "8" => Ok(Kelas::Delapan),
            "9" => Ok(Kelas::Sembilan),
            other => Err(KelasParseError(other.to_string())),
        }
    }
}

/// Error for class labels outside the fixed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KelasParseError(pub String);

impl fmt::Display for KelasParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kelas tidak dikenal: '{}' (gunakan 7, 8, atau 9)", self.0)
    }
}

impl std::error::Error for KelasParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order() {
        assert_eq!(Kelas::ALL, [Kelas::Tujuh, Kelas::Delapan, Kelas::Sembilan]);
        assert!(Kelas::Tujuh < Kelas::Sembilan);
    }

    #[test]
    fn test_display_and_heading() {
        assert_eq!(Kelas::Tujuh.to_string(), "7");
        assert_eq!(Kelas::Delapan.heading(), "Kelas 8");
    }

    #[test]
    fn test_parse() {
        assert_eq!("7".parse::<Kelas>().unwrap(), Kelas::Tujuh);
        assert_eq!(" 9 ".parse::<Kelas>().unwrap(), Kelas::Sembilan);
        assert!("10".parse::<Kelas>().is_err());
        assert!("kelas 7".parse::<Kelas>().is_err());
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_string(&Kelas::Delapan).unwrap();
        assert_eq!(json, "\"8\"");

        let back: Kelas = serde_json::from_str("\"9\"").unwrap();
        assert_eq!(back, Kelas::Sembilan);

        // Labels outside the fixed set are a decode error
        assert!(serde_json::from_str::<Kelas>("\"6\"").is_err());
    }
}
