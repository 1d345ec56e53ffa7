//! Export module
//!
//! Spreadsheet export of the full data set, one sheet with savings and
//! expense rows.

pub mod xlsx;

pub use xlsx::{default_export_filename, rekap_rows, write_xlsx, ExportRow, HEADER, SHEET_NAME};
