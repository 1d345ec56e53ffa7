//! Display formatting for terminal output
//!
//! Chart rendering and colored notice lines. Report text itself is
//! produced by the reports module; this layer only paints.

pub mod chart;
pub mod notice;

pub use chart::render_chart;
pub use notice::{format_notice, NoticeKind};
