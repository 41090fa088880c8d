//! Report rendering for a finished analysis.
//!
//! Supports a plain-text report (table plus summary sections) and JSON.

use anyhow::Result;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets::UTF8_FULL};
use std::fmt::Write;

use crate::analyzers::types::Analysis;

/// Builds the Name / Score / Grade table in store order.
pub fn build_table(analysis: &Analysis) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![Cell::new("Name"), Cell::new("Score"), Cell::new("Grade")]);

    for r in &analysis.records {
        table.add_row(vec![
            Cell::new(&r.name),
            Cell::new(format!("{:.1}", r.score)),
            Cell::new(r.grade),
        ]);
    }

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    table
}

/// Renders the full text report.
pub fn render_report(analysis: &Analysis) -> String {
    let stats = &analysis.stats;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", build_table(analysis));

    let _ = writeln!(out, "\nSTATISTICAL SUMMARY:");
    let _ = writeln!(out, "Average Score: {:.2}", stats.average);
    let _ = writeln!(out, "Median Score: {:.2}", stats.median);
    let _ = writeln!(out, "Highest Score: {}", format_optional(stats.highest));
    let _ = writeln!(out, "Lowest Score: {}", format_optional(stats.lowest));

    let _ = writeln!(out, "\nGRADE DISTRIBUTION:");
    for (grade, count) in analysis.distribution.iter() {
        let _ = writeln!(out, "{grade}: {count}");
    }

    let _ = writeln!(out, "\nPASS/FAIL SUMMARY:");
    let _ = writeln!(out, "{}", name_list("Passed", &analysis.partition.passed));
    let _ = writeln!(out, "{}", name_list("Failed", &analysis.partition.failed));

    out
}

/// Renders the analysis as pretty-printed JSON.
pub fn render_json(analysis: &Analysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}

fn format_optional(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "undefined".to_string(),
    }
}

fn name_list(label: &str, names: &[String]) -> String {
    let joined = if names.is_empty() {
        "None".to_string()
    } else {
        names.join(", ")
    };
    format!("{label} ({}): {joined}", names.len())
}
