//! `packlist show`: detail card for one row of the filtered set

use anyhow::{bail, Result};
use colored::*;

use crate::options::ShowArgs;
use crate::query::RowFilter;

use super::load_table;

pub fn run(args: ShowArgs) -> Result<()> {
    let table = load_table()?;
    let filter = RowFilter {
        query: args.query,
        unit: args.unit,
        order_no: args.order,
    };
    let indices = filter.apply(&table);

    if indices.is_empty() {
        bail!("No rows match the given filter");
    }
    let Some(&i) = indices.get(args.index) else {
        bail!(
            "Row index {} out of range (filtered set has {} rows)",
            args.index,
            indices.len()
        );
    };
    let row = &table.rows[i];

    println!("{}", row.description.bold().green());
    println!("{}: {}", "Unit".bold(), row.unit);
    println!("{}: {}", "Order No".bold(), row.order_no);
    println!("{}: {}", "Item No".bold(), row.item_no);
    println!("{}: {}", "Package Form".bold(), row.package_form);
    println!("{}: {}", "Quantity".bold(), row.quantity);
    println!("{}: {} kg", "Net Weight".bold(), row.net_weight);
    println!("{}: {} kg", "Gross Weight".bold(), row.gross_weight);
    println!(
        "{}: {} × {} × {}",
        "Dimensions (L×W×H)".bold(),
        row.length,
        row.width,
        row.height
    );
    println!("{}: {}", "Weighing Method".bold(), row.weighing_method);

    Ok(())
}
