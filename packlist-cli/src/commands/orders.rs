//! `packlist orders`

use anyhow::{bail, Result};
use colored::*;

use crate::options::OrdersArgs;
use crate::query::{summarize, unique_orders, RowFilter};

use super::{load_table, print_rows, print_summary};

pub fn run(args: OrdersArgs) -> Result<()> {
    let table = load_table()?;

    let Some(order) = args.order else {
        for order in unique_orders(&table) {
            println!("{}", order);
        }
        return Ok(());
    };

    let filter = RowFilter {
        order_no: Some(order.clone()),
        ..Default::default()
    };
    let indices = filter.apply(&table);
    if indices.is_empty() {
        bail!("No rows for order '{}'", order);
    }

    println!("{}", format!("Order {}", order).bold());
    print_summary(&summarize(&table, &indices));
    println!();
    print_rows(&table, &indices, None);
    Ok(())
}
