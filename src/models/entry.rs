//! Savings and expense entry models
//!
//! Field names on the wire are the Indonesian keys used by the persisted
//! data files and backup archives (`nama`, `kelas`, `jumlah`, `tanggal`,
//! `keterangan`). Entries are immutable once created; they only leave the
//! store through a full reset or a backup import.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EntryId;
use super::kelas::Kelas;
use super::money::Money;

/// A savings deposit ("tabungan") attributed to a class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsEntry {
    /// Unique identifier (millisecond timestamp)
    pub id: EntryId,

    /// Name of the student who deposited
    #[serde(rename = "nama")]
    pub student_name: String,

    /// The class the deposit belongs to
    pub kelas: Kelas,

    /// Deposited amount in rupiah
    #[serde(rename = "jumlah")]
    pub amount: Money,

    /// Deposit date
    #[serde(rename = "tanggal")]
    pub date: NaiveDate,
}

impl SavingsEntry {
    /// Create a new savings entry
    pub fn new(
        id: EntryId,
        student_name: impl Into<String>,
        kelas: Kelas,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            student_name: student_name.into(),
            kelas,
            amount,
            date,
        }
    }

    /// Validate against the configured minimum amount
    pub fn validate(&self, min_amount: Money) -> Result<(), EntryValidationError> {
        if self.student_name.trim().is_empty() {
            return Err(EntryValidationError::EmptyField { field: "nama" });
        }
        if self.amount < min_amount {
            return Err(EntryValidationError::BelowMinimum {
                minimum: min_amount,
            });
        }
        Ok(())
    }
}

impl fmt::Display for SavingsEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Kelas {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kelas,
            self.student_name,
            self.amount
        )
    }
}

/// A class expense ("pengeluaran")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Unique identifier (millisecond timestamp)
    pub id: EntryId,

    /// The class the expense is charged to
    pub kelas: Kelas,

    /// Spent amount in rupiah (stored positive)
    #[serde(rename = "jumlah")]
    pub amount: Money,

    /// What the money was spent on
    #[serde(rename = "keterangan")]
    pub note: String,

    /// Expense date
    #[serde(rename = "tanggal")]
    pub date: NaiveDate,
}

impl ExpenseEntry {
    /// Create a new expense entry
    pub fn new(
        id: EntryId,
        kelas: Kelas,
        amount: Money,
        note: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            kelas,
            amount,
            note: note.into(),
            date,
        }
    }

    /// Validate against the configured minimum amount
    pub fn validate(&self, min_amount: Money) -> Result<(), EntryValidationError> {
        if self.note.trim().is_empty() {
            return Err(EntryValidationError::EmptyField {
                field: "keterangan",
            });
        }
        if self.amount < min_amount {
            return Err(EntryValidationError::BelowMinimum {
                minimum: min_amount,
            });
        }
        Ok(())
    }
}

impl fmt::Display for ExpenseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Kelas {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kelas,
            self.note,
            self.amount
        )
    }
}

/// Validation errors for entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    /// Amount is below the configured minimum
    BelowMinimum { minimum: Money },
    /// A required text field is empty
    EmptyField { field: &'static str },
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowMinimum { minimum } => write!(f, "Jumlah minimal {}", minimum),
            Self::EmptyField { field } => write!(f, "Field {} harus diisi", field),
        }
    }
}

impl std::error::Error for EntryValidationError {}
