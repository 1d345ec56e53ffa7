//! Terminal chart rendering
//!
//! Draws the saldo chart from prepared chart data. Bar style renders one
//! horizontal bar per class and series; line style compresses each series
//! into a sparkline row.

use crate::config::ChartStyle;
use crate::reports::ChartData;

const BAR_WIDTH: usize = 30;
const CHART_WIDTH: usize = 60;

const RESET: &str = "\x1b[0m";
const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render chart data in the requested style
pub fn render_chart(data: &ChartData, style: ChartStyle) -> String {
    match style {
        ChartStyle::Bar => render_bar_chart(data),
        ChartStyle::Line => render_line_chart(data),
    }
}

fn render_bar_chart(data: &ChartData) -> String {
    let max = data.max_abs_rupiah();
    let mut output = chart_header(data);

    for series in &data.series {
        output.push('\n');
        output.push_str(&format!("{}\n", series.label));
        for (i, label) in data.labels.iter().enumerate() {
            let value = series.values[i];
            let bar = format_bar(value.rupiah(), max, BAR_WIDTH);
            output.push_str(&format!(
                "  {}  {}{}{}  {}\n",
                label, series.colors[i], bar, RESET, value
            ));
        }
    }

    output
}

fn render_line_chart(data: &ChartData) -> String {
    let max = data.max_abs_rupiah();
    let mut output = chart_header(data);
    output.push('\n');

    for series in &data.series {
        let mut glyphs = String::new();
        for (i, value) in series.values.iter().enumerate() {
            glyphs.push_str(series.colors[i]);
            glyphs.push(spark_glyph(value.rupiah(), max));
            glyphs.push_str(RESET);
        }
        let values = series
            .values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" / ");
        output.push_str(&format!("{:<13} {}  ({})\n", series.label, glyphs, values));
    }

    output.push('\n');
    output.push_str(&format!("{:<13} {}\n", "", data.labels.join(" | ")));
    output
}

fn chart_header(data: &ChartData) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", data.title));
    output.push_str(&"═".repeat(CHART_WIDTH));
    output.push('\n');
    output
}

/// Horizontal bar scaled against the chart maximum
fn format_bar(value: i64, max_value: i64, width: usize) -> String {
    if max_value <= 0 || value <= 0 {
        return " ".repeat(width);
    }

    let filled = ((value as f64 / max_value as f64) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One sparkline glyph scaled against the chart maximum
fn spark_glyph(value: i64, max_value: i64) -> char {
    if max_value <= 0 || value <= 0 {
        return SPARK_LEVELS[0];
    }

    let level = ((value as f64 / max_value as f64) * 7.0).round() as usize;
    SPARK_LEVELS[level.min(7)]
}
