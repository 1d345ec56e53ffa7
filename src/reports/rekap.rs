//! Rekap report
//!
//! The per-class recap: filtered entry lists sorted newest first, per-class
//! totals, and the all-class grand section. `format_terminal` renders the
//! same layout the recap view always had, with "+" and "-" markers for
//! money in and out.

use crate::models::{ExpenseEntry, FilterState, Kelas, SavingsEntry};
use crate::storage::RecordStore;

use super::aggregate::{aggregate, AggregateSummary, ClassAggregate};

const SEPARATOR_WIDTH: usize = 60;

/// One class section of the recap
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSection {
    pub kelas: Kelas,
    /// Filtered savings entries, most recent first
    pub savings: Vec<SavingsEntry>,
    /// Filtered expense entries, most recent first
    pub expenses: Vec<ExpenseEntry>,
    pub totals: ClassAggregate,
}

/// The recap report
#[derive(Debug, Clone, PartialEq)]
pub struct RekapReport {
    pub filter: FilterState,
    /// Sections for classes that have entries after filtering, in class order
    pub sections: Vec<ClassSection>,
    /// All-class totals within the date bounds
    pub grand: ClassAggregate,
}

impl RekapReport {
    /// Generate the recap for the current store contents
    pub fn generate(store: &RecordStore, filter: FilterState) -> Self {
        let summary: AggregateSummary = aggregate(store.savings(), store.expenses(), &filter);

        let mut savings: Vec<SavingsEntry> = store
            .savings()
            .iter()
            .filter(|e| filter.matches(e.kelas, e.date))
            .cloned()
            .collect();
        let mut expenses: Vec<ExpenseEntry> = store
            .expenses()
            .iter()
            .filter(|e| filter.matches(e.kelas, e.date))
            .cloned()
            .collect();

        // Newest first; ids are creation-ordered, so they break date ties
        savings.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

        let mut sections = Vec::new();
        for kelas in Kelas::ALL {
            let class_savings: Vec<SavingsEntry> = savings
                .iter()
                .filter(|e| e.kelas == kelas)
                .cloned()
                .collect();
            let class_expenses: Vec<ExpenseEntry> = expenses
                .iter()
                .filter(|e| e.kelas == kelas)
                .cloned()
                .collect();

            if class_savings.is_empty() && class_expenses.is_empty() {
                continue;
            }

            sections.push(ClassSection {
                kelas,
                savings: class_savings,
                expenses: class_expenses,
                totals: summary.class(kelas),
            });
        }

        Self {
            filter,
            sections,
            grand: summary.grand,
        }
    }

    /// Check whether any class section survived filtering
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Format the recap for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Rekap Tabungan\n");
        output.push_str(&"=".repeat(SEPARATOR_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "Kelas: {} | Periode: {}\n",
            describe_kelas(&self.filter),
            describe_periode(&self.filter)
        ));

        if self.is_empty() {
            output.push('\n');
            output.push_str("Tidak ada data untuk filter yang dipilih\n");
            return output;
        }

        for section in &self.sections {
            output.push('\n');
            output.push_str(&format!("{}\n", section.kelas.heading()));
            output.push_str(&"-".repeat(SEPARATOR_WIDTH));
            output.push('\n');

            if !section.savings.is_empty() {
                output.push_str("  Tabungan Masuk\n");
                for entry in &section.savings {
                    output.push_str(&format!(
                        "    + {}: {}  ({})\n",
                        entry.student_name,
                        entry.amount,
                        entry.date.format("%d/%m/%Y")
                    ));
                }
                output.push_str(&format!("  Total: {}\n", section.totals.total_in));
            }

            if !section.expenses.is_empty() {
                output.push_str("  Pengeluaran\n");
                for entry in &section.expenses {
                    output.push_str(&format!(
                        "    - {}: {}  ({})\n",
                        entry.note,
                        entry.amount,
                        entry.date.format("%d/%m/%Y")
                    ));
                }
                output.push_str(&format!("  Total: {}\n", section.totals.total_out));
            }

            output.push_str(&format!("  Saldo Akhir: {}\n", section.totals.balance()));
        }

        if self.filter.kelas.is_all() {
            output.push('\n');
            output.push_str("Total Semua Kelas\n");
            output.push_str(&"-".repeat(SEPARATOR_WIDTH));
            output.push('\n');
            output.push_str(&format!("  Total Pemasukan: {}\n", self.grand.total_in));
            output.push_str(&format!("  Total Pengeluaran: {}\n", self.grand.total_out));
            output.push_str(&format!("  Saldo Akhir: {}\n", self.grand.balance()));
        }

        output
    }
}

fn describe_kelas(filter: &FilterState) -> String {
    if filter.kelas.is_all() {
        "semua".to_string()
    } else {
        filter.kelas.to_string()
    }
}

fn describe_periode(filter: &FilterState) -> String {
    match (filter.start_date, filter.end_date) {
        (Some(start), Some(end)) => format!(
            "{} s/d {}",
            start.format("%d/%m/%Y"),
            end.format("%d/%m/%Y")
        ),
        (Some(start), None) => format!("sejak {}", start.format("%d/%m/%Y")),
        (None, Some(end)) => format!("sampai {}", end.format("%d/%m/%Y")),
        (None, None) => "semua tanggal".to_string(),
    }
}
