//! Reports module
//!
//! Aggregation over the savings and expense collections, the per-class
//! recap report, and the chart data built from the same aggregates.

pub mod aggregate;
pub mod chart;
pub mod rekap;

pub use aggregate::{aggregate, AggregateSummary, ClassAggregate};
pub use chart::{ChartData, ChartSeries, CHART_TITLE, CLASS_LABELS};
pub use rekap::{ClassSection, RekapReport};
