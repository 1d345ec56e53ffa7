//! Service layer for tabungan-cli
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, id allocation, and persistence ordering.

pub mod records;

pub use records::{AddExpenseInput, AddSavingsInput, RecordService};
