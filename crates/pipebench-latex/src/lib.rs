//! LaTeX table rows for the macro × pipe result matrix.
//!
//! Output is meant to be pasted into a document body, so these functions
//! return plain strings and leave the surrounding tabular environment to
//! the author. The 18-column pipes axis does not fit a page, so the table
//! is split into two fixed pages of at most [`PAGE_SPLIT`] columns.

use std::fmt::Write as _;

/// Column where the second table page begins.
pub const PAGE_SPLIT: usize = 9;

/// Header row with one `\texttt` cell per pipe count.
///
/// The leading `&` leaves the row-label column empty.
pub fn pipes_row(pipes: &[u32]) -> String {
    let cells: Vec<String> = pipes.iter().map(|p| format!("\\texttt{{{p}}}")).collect();
    format!("& {} \\\\", cells.join(" & "))
}

/// One formatted row per label, windowed to columns `[start, end)`.
///
/// `end = None` means to the end of the row. Values render as math-mode
/// numbers with exactly two digits after the decimal point.
pub fn result_rows(
    labels: &[&str],
    rows: &[Vec<f64>],
    start: usize,
    end: Option<usize>,
) -> Vec<String> {
    labels
        .iter()
        .zip(rows)
        .map(|(label, values)| {
            let stop = end.unwrap_or(values.len()).min(values.len());
            let cells: Vec<String> = values[start.min(stop)..stop]
                .iter()
                .map(|v| format!("${v:.2}$"))
                .collect();
            format!("\\texttt{{{label}}} & {} \\\\", cells.join(" & "))
        })
        .collect()
}

/// Full two-page table source, ready for stdout.
///
/// Mirrors the layout the charts are cited next to: pipes header, `\hline`,
/// result rows, vertical gap, then the remaining columns.
pub fn render_table(pipes: &[u32], labels: &[&str], rows: &[Vec<f64>]) -> String {
    let mut out = String::new();
    let split = PAGE_SPLIT.min(pipes.len());

    let _ = writeln!(out, "{}", pipes_row(&pipes[..split]));
    let _ = writeln!(out, "\\hline");
    for row in result_rows(labels, rows, 0, Some(split)) {
        let _ = writeln!(out, "{row}");
    }

    if split < pipes.len() {
        let _ = writeln!(out, "\\vspace{{0.4cm}} \\\\");
        let _ = writeln!(out, "{}", pipes_row(&pipes[split..]));
        let _ = writeln!(out, "\\hline");
        for row in result_rows(labels, rows, split, None) {
            let _ = writeln!(out, "{row}");
        }
    }

    out
}
