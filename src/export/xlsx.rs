//! Excel export functionality
//!
//! Exports both collections into a single spreadsheet: savings rows with
//! positive amounts, expense rows with negated amounts.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;

use crate::error::{TabunganError, TabunganResult};
use crate::models::{ExpenseEntry, SavingsEntry};

pub const SHEET_NAME: &str = "Rekap Tabungan";

pub const HEADER: [&str; 5] = ["Jenis", "Kelas", "Nama/Keterangan", "Jumlah", "Tanggal"];

/// One spreadsheet row below the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub jenis: &'static str,
    pub kelas: String,
    pub description: String,
    pub amount: i64,
    pub date: String,
}

/// Build export rows: all savings first, then all expenses, in stored order
pub fn rekap_rows(savings: &[SavingsEntry], expenses: &[ExpenseEntry]) -> Vec<ExportRow> {
    let mut rows = Vec::with_capacity(savings.len() + expenses.len());

    for entry in savings {
        rows.push(ExportRow {
            jenis: "Tabungan",
            kelas: entry.kelas.heading().to_string(),
            description: entry.student_name.clone(),
            amount: entry.amount.rupiah(),
            date: entry.date.to_string(),
        });
    }

    for entry in expenses {
        rows.push(ExportRow {
            jenis: "Pengeluaran",
            kelas: entry.kelas.heading().to_string(),
            description: entry.note.clone(),
            amount: -entry.amount.rupiah(),
            date: entry.date.to_string(),
        });
    }

    rows
}

/// Write both collections to an xlsx file
///
/// The workbook is written to a temporary file first so a failed export
/// never leaves a partial file at the target path.
pub fn write_xlsx(
    path: &Path,
    savings: &[SavingsEntry],
    expenses: &[ExpenseEntry],
) -> TabunganResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| TabunganError::Export(format!("Failed to create directory: {}", e)))?;
        }
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| TabunganError::Export(e.to_string()))?;

    for (col, title) in HEADER.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *title)
            .map_err(|e| TabunganError::Export(e.to_string()))?;
    }

    for (i, row) in rekap_rows(savings, expenses).iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet
            .write_string(r, 0, row.jenis)
            .and_then(|ws| ws.write_string(r, 1, &row.kelas))
            .and_then(|ws| ws.write_string(r, 2, &row.description))
            .and_then(|ws| ws.write_number(r, 3, row.amount as f64))
            .and_then(|ws| ws.write_string(r, 4, &row.date))
            .map_err(|e| TabunganError::Export(e.to_string()))?;
    }

    let tmp_path = path.with_extension("xlsx.tmp");
    workbook
        .save(&tmp_path)
        .map_err(|e| TabunganError::Export(e.to_string()))?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        TabunganError::Export(format!("Failed to finalize export file: {}", e))
    })?;

    Ok(())
}

/// Default export filename for the given day
pub fn default_export_filename(today: NaiveDate) -> String {
    format!("Rekap_Tabungan_{}.xlsx", today.format("%Y-%m-%d"))
}
