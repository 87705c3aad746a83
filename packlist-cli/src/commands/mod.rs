//! One handler per subcommand, plus shared table printing

pub mod analyze;
pub mod info;
pub mod orders;
pub mod search;
pub mod show;

use std::sync::Arc;

use anyhow::{Context, Result};
use colored::*;
use unicode_width::UnicodeWidthStr;

use crate::config::global_config;
use crate::data::{self, CleanTable, Column, MISSING_VALUE};
use crate::query::Summary;

/// Load the clean table for the configured workbook through the session
/// cache.
pub fn load_table() -> Result<Arc<CleanTable>> {
    let path = global_config().workbook_path.clone();
    data::load_table(&path)
        .with_context(|| format!("Failed to build the clean table from {}", path.display()))
}

/// Print rows as an aligned text table with the canonical headers.
pub fn print_rows(table: &CleanTable, indices: &[usize], limit: Option<usize>) {
    let shown = limit.unwrap_or(indices.len()).min(indices.len());
    let columns = Column::ALL;

    let mut widths: Vec<usize> = columns.iter().map(|c| c.name().width()).collect();
    // first column is the row index within the result set
    let index_width = shown.saturating_sub(1).to_string().len().max(1);
    for &i in &indices[..shown] {
        let row = &table.rows[i];
        for (w, column) in widths.iter_mut().zip(columns) {
            *w = (*w).max(row.field(column).width());
        }
    }

    // colored strings are padded by hand: ANSI escapes confuse format widths
    let pad = |text: &str, w: usize| " ".repeat(w.saturating_sub(text.width()));

    print!("{:>index_width$}  ", "#");
    for (w, column) in widths.iter().zip(columns) {
        print!("{}{}  ", column.name().bold(), pad(column.name(), *w));
    }
    println!();

    for (pos, &i) in indices[..shown].iter().enumerate() {
        let row = &table.rows[i];
        print!("{:>index_width$}  ", pos);
        for (w, column) in widths.iter().zip(columns) {
            let value = row.field(column);
            if value == MISSING_VALUE {
                print!("{}{}  ", value.dimmed(), pad(value, *w));
            } else {
                print!("{}{}  ", value, pad(value, *w));
            }
        }
        println!();
    }

    if shown < indices.len() {
        println!("{}", format!("... {} more rows", indices.len() - shown).dimmed());
    }
}

/// Print the count/net/gross metrics line.
pub fn print_summary(summary: &Summary) {
    println!(
        "{}: {}   {}: {:.2} kg   {}: {:.2} kg",
        "Rows".bold(),
        summary.rows,
        "Net total".bold(),
        summary.net_total,
        "Gross total".bold(),
        summary.gross_total,
    );
}
