//! Chart data builder
//!
//! Turns an aggregate summary into the three series the saldo chart shows:
//! per-class balances, money in, and money out. Emits plain data only; the
//! display layer decides how to draw it (bar or line).

use crate::models::{Kelas, Money};

use super::aggregate::AggregateSummary;

pub const CHART_TITLE: &str = "Saldo Tabungan per Kelas";

/// Column labels, aligned with `Kelas::ALL`
pub const CLASS_LABELS: [&str; 3] = ["Kelas 7", "Kelas 8", "Kelas 9"];

// Per-class accent colors (ANSI), blue / cyan / magenta
const CLASS_COLORS: [&str; 3] = ["\x1b[34m", "\x1b[36m", "\x1b[35m"];
const RED: &str = "\x1b[31m";

/// One chart series: a value and a color per class column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    pub label: &'static str,
    pub values: [Money; 3],
    pub colors: [&'static str; 3],
}

/// Chart-ready view of an aggregate summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartData {
    pub title: &'static str,
    pub labels: [&'static str; 3],
    pub series: [ChartSeries; 3],
}

impl ChartData {
    /// Build the three series from per-class aggregates
    pub fn build(summary: &AggregateSummary) -> Self {
        let mut balances = [Money::zero(); 3];
        let mut totals_in = [Money::zero(); 3];
        let mut totals_out = [Money::zero(); 3];

        for (i, kelas) in Kelas::ALL.into_iter().enumerate() {
            let class = summary.class(kelas);
            balances[i] = class.balance();
            totals_in[i] = class.total_in;
            totals_out[i] = class.total_out;
        }

        Self {
            title: CHART_TITLE,
            labels: CLASS_LABELS,
            series: [
                ChartSeries {
                    label: "Saldo Akhir",
                    values: balances,
                    colors: CLASS_COLORS,
                },
                ChartSeries {
                    label: "Total Masuk",
                    values: totals_in,
                    colors: CLASS_COLORS,
                },
                ChartSeries {
                    label: "Total Keluar",
                    values: totals_out,
                    colors: [RED; 3],
                },
            ],
        }
    }

    /// Largest absolute value across all series, for bar scaling
    pub fn max_abs_rupiah(&self) -> i64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter())
            .map(|v| v.rupiah().abs())
            .max()
            .unwrap_or(0)
    }
}
