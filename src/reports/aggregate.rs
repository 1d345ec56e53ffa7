//! Per-class aggregation
//!
//! Filters both collections and sums them into per-class totals plus an
//! all-class grand total. Aggregates are ephemeral: recomputed on every
//! command, never stored.

use crate::models::{ClassFilter, ExpenseEntry, FilterState, Kelas, Money, SavingsEntry};

/// Totals for one class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassAggregate {
    pub total_in: Money,
    pub total_out: Money,
}

impl ClassAggregate {
    /// Remaining balance (total in minus total out)
    pub fn balance(&self) -> Money {
        self.total_in - self.total_out
    }

    /// Check whether nothing was summed into this aggregate
    pub fn is_zero(&self) -> bool {
        self.total_in.is_zero() && self.total_out.is_zero()
    }
}

/// Aggregated totals for all three classes
///
/// `grand` always covers all classes within the date bounds, even when the
/// filter selects a single class; callers decide whether to render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateSummary {
    per_class: [ClassAggregate; 3],
    pub grand: ClassAggregate,
}

impl AggregateSummary {
    /// Totals for one class
    pub fn class(&self, kelas: Kelas) -> ClassAggregate {
        self.per_class[class_index(kelas)]
    }
}

/// Aggregate both collections under a filter
pub fn aggregate(
    savings: &[SavingsEntry],
    expenses: &[ExpenseEntry],
    filter: &FilterState,
) -> AggregateSummary {
    let mut per_class = [ClassAggregate::default(); 3];
    let mut grand = ClassAggregate::default();

    // Grand ignores the class selector but keeps the date bounds
    let date_only = FilterState {
        kelas: ClassFilter::All,
        ..*filter
    };

    for entry in savings {
        if date_only.matches(entry.kelas, entry.date) {
            grand.total_in += entry.amount;
            if filter.kelas.matches(entry.kelas) {
                per_class[class_index(entry.kelas)].total_in += entry.amount;
            }
        }
    }

    for entry in expenses {
        if date_only.matches(entry.kelas, entry.date) {
            grand.total_out += entry.amount;
            if filter.kelas.matches(entry.kelas) {
                per_class[class_index(entry.kelas)].total_out += entry.amount;
            }
        }
    }

    AggregateSummary { per_class, grand }
}

fn class_index(kelas: Kelas) -> usize {
    match kelas {
        Kelas::Tujuh => 0,
        Kelas::Delapan => 1,
        Kelas::Sembilan => 2,
    }
}
