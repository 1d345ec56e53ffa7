//! Record service
//!
//! Command-level operations over the record store: adding entries,
//! resetting, and swapping in restored data. Every mutation validates
//! first and persists before returning.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{TabunganError, TabunganResult};
use crate::models::{ExpenseEntry, IdGenerator, Kelas, Money, SavingsEntry};
use crate::storage::RecordStore;

/// Input for adding a savings entry
#[derive(Debug, Clone)]
pub struct AddSavingsInput {
    pub student_name: String,
    pub kelas: Kelas,
    pub amount: Money,
    pub date: NaiveDate,
}

/// Input for adding an expense entry
#[derive(Debug, Clone)]
pub struct AddExpenseInput {
    pub kelas: Kelas,
    pub amount: Money,
    pub note: String,
    pub date: NaiveDate,
}

/// Service for record mutations
pub struct RecordService<'a> {
    store: &'a mut RecordStore,
    ids: &'a mut dyn IdGenerator,
    min_amount: Money,
}

impl<'a> RecordService<'a> {
    /// Create a new record service
    pub fn new(
        store: &'a mut RecordStore,
        ids: &'a mut dyn IdGenerator,
        min_amount: Money,
    ) -> Self {
        Self {
            store,
            ids,
            min_amount,
        }
    }

    /// Add a savings entry
    pub fn add_savings(&mut self, input: AddSavingsInput) -> TabunganResult<SavingsEntry> {
        let entry = SavingsEntry::new(
            self.ids.next_id(),
            input.student_name.trim(),
            input.kelas,
            input.amount,
            input.date,
        );

        entry
            .validate(self.min_amount)
            .map_err(|e| TabunganError::Validation(e.to_string()))?;

        self.store.append_savings(entry.clone());
        self.store.persist()?;

        info!(id = %entry.id, kelas = %entry.kelas, "savings entry added");
        Ok(entry)
    }

    /// Add an expense entry
    pub fn add_expense(&mut self, input: AddExpenseInput) -> TabunganResult<ExpenseEntry> {
        let entry = ExpenseEntry::new(
            self.ids.next_id(),
            input.kelas,
            input.amount,
            input.note.trim(),
            input.date,
        );

        entry
            .validate(self.min_amount)
            .map_err(|e| TabunganError::Validation(e.to_string()))?;

        self.store.append_expense(entry.clone());
        self.store.persist()?;

        info!(id = %entry.id, kelas = %entry.kelas, "expense entry added");
        Ok(entry)
    }

    /// Delete all entries and persist the empty collections
    pub fn reset(&mut self) -> TabunganResult<()> {
        self.store.clear();
        self.store.persist()?;
        info!("all entries cleared");
        Ok(())
    }

    /// Replace both collections with restored data and persist
    pub fn restore(
        &mut self,
        savings: Vec<SavingsEntry>,
        expenses: Vec<ExpenseEntry>,
    ) -> TabunganResult<()> {
        let counts = (savings.len(), expenses.len());
        self.store.replace_all(savings, expenses);
        self.store.persist()?;
        info!(savings = counts.0, expenses = counts.1, "entries restored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryId, FixedIdGenerator};
    use tempfile::TempDir;

    fn setup(temp: &TempDir) -> (RecordStore, FixedIdGenerator) {
        let store = RecordStore::new(
            temp.path().join("tabungan.json"),
            temp.path().join("pengeluaran.json"),
        );
        (store, FixedIdGenerator::new([1, 2, 3, 4]))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_savings_persists() {
        let temp = TempDir::new().unwrap();
        let (mut store, mut ids) = setup(&temp);

        {
            let mut service = RecordService::new(&mut store, &mut ids, Money::from_rupiah(1000));
            let entry = service
                .add_savings(AddSavingsInput {
                    student_name: "  Budi  ".into(),
                    kelas: Kelas::Tujuh,
                    amount: Money::from_rupiah(5000),
                    date: date(2024, 1, 10),
                })
                .unwrap();

            assert_eq!(entry.id, EntryId::from_millis(1));
            assert_eq!(entry.student_name, "Budi");
        }

        let mut reloaded = RecordStore::new(
            temp.path().join("tabungan.json"),
            temp.path().join("pengeluaran.json"),
        );
        reloaded.load();
        assert_eq!(reloaded.savings().len(), 1);
    }

    #[test]
    fn test_add_savings_below_minimum_stores_nothing() {
        let temp = TempDir::new().unwrap();
        let (mut store, mut ids) = setup(&temp);

        let mut service = RecordService::new(&mut store, &mut ids, Money::from_rupiah(1000));
        let result = service.add_savings(AddSavingsInput {
            student_name: "Budi".into(),
            kelas: Kelas::Tujuh,
            amount: Money::from_rupiah(500),
            date: date(2024, 1, 10),
        });

        let err = result.unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Jumlah minimal Rp 1.000"));
        drop(service);
        assert!(store.is_empty());
        assert!(!temp.path().join("tabungan.json").exists());
    }

    #[test]
    fn test_add_expense_requires_note() {
        let temp = TempDir::new().unwrap();
        let (mut store, mut ids) = setup(&temp);

        let mut service = RecordService::new(&mut store, &mut ids, Money::from_rupiah(1000));
        let result = service.add_expense(AddExpenseInput {
            kelas: Kelas::Delapan,
            amount: Money::from_rupiah(2000),
            note: "   ".into(),
            date: date(2024, 1, 12),
        });

        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_reset_clears_and_persists() {
        let temp = TempDir::new().unwrap();
        let (mut store, mut ids) = setup(&temp);

        let mut service = RecordService::new(&mut store, &mut ids, Money::from_rupiah(1000));
        service
            .add_savings(AddSavingsInput {
                student_name: "Budi".into(),
                kelas: Kelas::Tujuh,
                amount: Money::from_rupiah(5000),
                date: date(2024, 1, 10),
            })
            .unwrap();
        service.reset().unwrap();
        drop(service);

        assert!(store.is_empty());

        let mut reloaded = RecordStore::new(
            temp.path().join("tabungan.json"),
            temp.path().join("pengeluaran.json"),
        );
        reloaded.load();
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_restore_replaces_collections() {
        let temp = TempDir::new().unwrap();
        let (mut store, mut ids) = setup(&temp);

        let mut service = RecordService::new(&mut store, &mut ids, Money::from_rupiah(1000));
        service
            .add_savings(AddSavingsInput {
                student_name: "Budi".into(),
                kelas: Kelas::Tujuh,
                amount: Money::from_rupiah(5000),
                date: date(2024, 1, 10),
            })
            .unwrap();

        let restored_savings = vec![SavingsEntry::new(
            EntryId::from_millis(99),
            "Siti",
            Kelas::Sembilan,
            Money::from_rupiah(7000),
            date(2024, 2, 1),
        )];
        service.restore(restored_savings, Vec::new()).unwrap();
        drop(service);

        assert_eq!(store.savings().len(), 1);
        assert_eq!(store.savings()[0].student_name, "Siti");
        assert!(store.expenses().is_empty());
    }
}
