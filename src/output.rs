use std::fmt::Write;

use crate::layout::{display_width, pad_to, truncate_to_width};
use crate::model::FumenMetric;

pub const DEFAULT_LIMIT: usize = 50;

pub const NO_DATA_MESSAGE: &str =
    "No chart data or qualifying break notes were found in the given directory.";

const COLUMN_SEPARATOR: &str = " | ";

struct Column {
    title: &'static str,
    width: usize,
}

const COLUMNS: [Column; 6] = [
    Column {
        title: "ID",
        width: 8,
    },
    Column {
        title: "Song Title",
        width: 30,
    },
    Column {
        title: "Diff Idx",
        width: 8,
    },
    Column {
        title: "Total Breaks",
        width: 12,
    },
    Column {
        title: "Special Breaks",
        width: 14,
    },
    Column {
        title: "Ratio",
        width: 8,
    },
];

const TITLE_COLUMN: usize = 1;

/// Orders metrics by special break count, highest first. Ties keep input order.
pub fn rank(metrics: &[FumenMetric]) -> Vec<FumenMetric> {
    let mut ranked = metrics.to_vec();
    ranked.sort_by(|a, b| b.special_breaks().cmp(&a.special_breaks()));
    ranked
}

pub fn format_ratio(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

fn render_line(cells: [&str; 6]) -> String {
    cells
        .iter()
        .zip(COLUMNS.iter())
        .map(|(cell, column)| pad_to(cell, column.width))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}

pub fn header_line() -> String {
    render_line(COLUMNS.map(|column| column.title))
}

pub fn format_row(metric: &FumenMetric) -> String {
    let song_id = metric.song_id.to_string();
    let title = truncate_to_width(metric.title_label(), COLUMNS[TITLE_COLUMN].width);
    let difficulty = metric.difficulty_label();
    let total = metric.total_breaks().to_string();
    let special = metric.special_breaks().to_string();
    let ratio = format_ratio(metric.ratio());

    render_line([
        song_id.as_str(),
        title.as_str(),
        difficulty.as_str(),
        total.as_str(),
        special.as_str(),
        ratio.as_str(),
    ])
}

pub fn render_report(metrics: &[FumenMetric], limit: usize) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "--- Chart Analysis Results (Top {}) ---", limit);

    if metrics.is_empty() {
        let _ = writeln!(out, "{}", NO_DATA_MESSAGE);
        return out;
    }

    let header = header_line();
    let _ = writeln!(out, "{}", header);
    let _ = writeln!(out, "{}", "-".repeat(display_width(&header)));

    for metric in rank(metrics).iter().take(limit) {
        let _ = writeln!(out, "{}", format_row(metric));
    }

    out
}
