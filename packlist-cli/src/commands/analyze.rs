//! `packlist analyze`: the two analysis views as text

use anyhow::Result;
use colored::*;

use crate::query::{gross_by_unit, top_by_gross};

use super::load_table;

const BAR_WIDTH: usize = 40;
const TOP_N: usize = 10;

pub fn run() -> Result<()> {
    let table = load_table()?;

    println!("{}", "Gross weight by unit (kg)".bold());
    let totals = gross_by_unit(&table);
    let unit_width = totals.iter().map(|(u, _)| u.len()).max().unwrap_or(0);
    let max_total = totals.iter().map(|(_, t)| *t).fold(0.0_f64, f64::max);
    for (unit, total) in &totals {
        let bar_len = if max_total > 0.0 {
            ((total / max_total) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        println!(
            "{:<unit_width$}  {:>12.2}  {}",
            unit,
            total,
            "█".repeat(bar_len).cyan()
        );
    }

    println!();
    println!("{}", format!("Top {} by gross weight", TOP_N).bold());
    for (rank, &i) in top_by_gross(&table, TOP_N).iter().enumerate() {
        let row = &table.rows[i];
        println!(
            "{:>2}. {:>12.2} kg  {}  ({}, {})",
            rank + 1,
            row.gross_num.unwrap_or(0.0),
            row.description,
            row.unit,
            row.order_no,
        );
    }

    Ok(())
}
