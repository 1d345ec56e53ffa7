//! Storage layer for tabungan-cli
//!
//! JSON file storage with atomic writes and automatic directory creation.

pub mod file_io;
pub mod records;

pub use file_io::{read_json, write_json_atomic};
pub use records::{LoadOutcome, RecordStore};
