//! `packlist info`: source workbook and clean table facts

use anyhow::Result;
use chrono::{DateTime, Local};
use colored::*;

use crate::config::global_config;
use crate::data::Fingerprint;
use crate::query::{unique_orders, unique_units};

use super::load_table;

pub fn run() -> Result<()> {
    let path = global_config().workbook_path.clone();
    let table = load_table()?;
    let fingerprint = Fingerprint::of(&path)?;
    let modified: DateTime<Local> = fingerprint.modified.into();

    println!("{}: {}", "Workbook".bold(), fingerprint.path.display());
    println!(
        "{}: {} ({} bytes)",
        "Modified".bold(),
        modified.format("%Y-%m-%d %H:%M:%S"),
        fingerprint.len
    );
    println!("{}: {}", "Rows".bold(), table.len());
    println!("{}: {}", "Units".bold(), unique_units(&table).len());
    println!("{}: {}", "Orders".bold(), unique_orders(&table).len());

    Ok(())
}
