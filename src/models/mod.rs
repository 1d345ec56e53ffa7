//! Core data models for tabungan-cli
//!
//! This module contains the data structures of the savings domain:
//! entries, class labels, money amounts, ids, and the report filter.

pub mod clock;
pub mod entry;
pub mod filter;
pub mod ids;
pub mod kelas;
pub mod money;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entry::{EntryValidationError, ExpenseEntry, SavingsEntry};
pub use filter::{ClassFilter, FilterState};
pub use ids::{EntryId, FixedIdGenerator, IdGenerator, SystemIdGenerator};
pub use kelas::{Kelas, KelasParseError};
pub use money::Money;
