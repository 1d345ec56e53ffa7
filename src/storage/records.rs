//! Record store for savings and expense entries
//!
//! Owns the two entry collections and their JSON files. Each file holds a
//! bare JSON array of entries in insertion order, mirroring the two
//! storage keys the data originally lived under. Loading never fails the
//! session: unreadable or corrupt files reset both collections to empty
//! and the caller surfaces a non-fatal notice.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{TabunganError, TabunganResult};
use crate::models::{ExpenseEntry, SavingsEntry};

use super::file_io::{read_json, write_json_atomic};

/// Outcome of loading persisted data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Both collections read cleanly (missing files count as empty)
    Loaded,
    /// A file was unreadable or corrupt; both collections were reset
    Reset { reason: String },
}

/// Owns both entry collections and round-trips them through disk
pub struct RecordStore {
    savings_path: PathBuf,
    expenses_path: PathBuf,
    savings: Vec<SavingsEntry>,
    expenses: Vec<ExpenseEntry>,
}

impl RecordStore {
    /// Create an empty store backed by the two given files
    pub fn new(savings_path: PathBuf, expenses_path: PathBuf) -> Self {
        Self {
            savings_path,
            expenses_path,
            savings: Vec::new(),
            expenses: Vec::new(),
        }
    }

    /// All savings entries in insertion order
    pub fn savings(&self) -> &[SavingsEntry] {
        &self.savings
    }

    /// All expense entries in insertion order
    pub fn expenses(&self) -> &[ExpenseEntry] {
        &self.expenses
    }

    /// Check whether both collections are empty
    pub fn is_empty(&self) -> bool {
        self.savings.is_empty() && self.expenses.is_empty()
    }

    /// Add a savings entry
    ///
    /// Validation happens in the command layer before this call.
    pub fn append_savings(&mut self, entry: SavingsEntry) {
        self.savings.push(entry);
    }

    /// Add an expense entry
    pub fn append_expense(&mut self, entry: ExpenseEntry) {
        self.expenses.push(entry);
    }

    /// Swap in entirely new collections (backup import)
    pub fn replace_all(&mut self, savings: Vec<SavingsEntry>, expenses: Vec<ExpenseEntry>) {
        self.savings = savings;
        self.expenses = expenses;
    }

    /// Empty both collections
    pub fn clear(&mut self) {
        self.savings.clear();
        self.expenses.clear();
    }

    /// Load both collections from disk
    ///
    /// A missing file is an empty collection. A file that exists but
    /// cannot be read or parsed resets both collections and reports the
    /// reason; the session continues with empty data.
    pub fn load(&mut self) -> LoadOutcome {
        let savings: Result<Vec<SavingsEntry>, _> = read_json(&self.savings_path);
        let expenses: Result<Vec<ExpenseEntry>, _> = read_json(&self.expenses_path);

        match (savings, expenses) {
            (Ok(savings), Ok(expenses)) => {
                debug!(
                    savings = savings.len(),
                    expenses = expenses.len(),
                    "loaded record store"
                );
                self.savings = savings;
                self.expenses = expenses;
                LoadOutcome::Loaded
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "failed to load persisted data, resetting to empty");
                self.savings.clear();
                self.expenses.clear();
                LoadOutcome::Reset {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Write both collections to disk atomically
    pub fn persist(&self) -> TabunganResult<()> {
        write_json_atomic(&self.savings_path, &self.savings)
            .and_then(|_| write_json_atomic(&self.expenses_path, &self.expenses))
            .map_err(|e| {
                TabunganError::Storage(format!(
                    "Gagal menyimpan data ke penyimpanan lokal: {}",
                    e
                ))
            })?;
        debug!(
            savings = self.savings.len(),
            expenses = self.expenses.len(),
            "persisted record store"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryId, Kelas, Money};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> RecordStore {
        RecordStore::new(
            dir.path().join("tabungan.json"),
            dir.path().join("pengeluaran.json"),
        )
    }

    fn savings_entry(id: i64, amount: i64) -> SavingsEntry {
        SavingsEntry::new(
            EntryId::from_millis(id),
            "Budi",
            Kelas::Tujuh,
            Money::from_rupiah(amount),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        )
    }

    fn expense_entry(id: i64, amount: i64) -> ExpenseEntry {
        ExpenseEntry::new(
            EntryId::from_millis(id),
            Kelas::Tujuh,
            Money::from_rupiah(amount),
            "Beli spidol",
            NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
        )
    }

    #[test]
    fn test_load_missing_files_is_empty() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);

        assert_eq!(store.load(), LoadOutcome::Loaded);
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_persist_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);

        store.append_savings(savings_entry(1, 5000));
        store.append_savings(savings_entry(2, 3000));
        store.append_expense(expense_entry(3, 2000));
        store.persist().unwrap();

        let mut reloaded = store_in(&temp);
        assert_eq!(reloaded.load(), LoadOutcome::Loaded);
        assert_eq!(reloaded.savings(), store.savings());
        assert_eq!(reloaded.expenses(), store.expenses());
    }

    #[test]
    fn test_persisted_file_is_bare_array() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);

        store.append_savings(savings_entry(1, 5000));
        store.persist().unwrap();

        let raw = fs::read_to_string(temp.path().join("tabungan.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_file_resets_both_collections() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);

        store.append_savings(savings_entry(1, 5000));
        store.append_expense(expense_entry(2, 2000));
        store.persist().unwrap();

        fs::write(temp.path().join("tabungan.json"), "{ not json").unwrap();

        let outcome = store.load();
        assert!(matches!(outcome, LoadOutcome::Reset { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_kelas_in_file_resets() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);

        fs::write(
            temp.path().join("tabungan.json"),
            r#"[{"id":1,"nama":"Budi","kelas":"12","jumlah":5000,"tanggal":"2024-01-10"}]"#,
        )
        .unwrap();

        assert!(matches!(store.load(), LoadOutcome::Reset { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_replace_all_and_clear() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);

        store.append_savings(savings_entry(1, 5000));
        store.replace_all(
            vec![savings_entry(10, 7000), savings_entry(11, 8000)],
            vec![expense_entry(12, 2500)],
        );

        assert_eq!(store.savings().len(), 2);
        assert_eq!(store.expenses().len(), 1);
        assert_eq!(store.savings()[0].id, EntryId::from_millis(10));

        store.clear();
        assert!(store.is_empty());
    }
}
