//! `packlist search`

use std::io;

use anyhow::{Context, Result};

use crate::data::CleanRow;
use crate::options::{OutputFormat, SearchArgs};
use crate::query::{summarize, RowFilter};

use super::{load_table, print_rows, print_summary};

pub fn run(args: SearchArgs) -> Result<()> {
    let table = load_table()?;
    let filter = RowFilter {
        query: args.query,
        unit: args.unit,
        order_no: args.order,
    };
    let indices = filter.apply(&table);

    match args.format {
        OutputFormat::Table => {
            print_summary(&summarize(&table, &indices));
            println!();
            print_rows(&table, &indices, args.limit);
        }
        OutputFormat::Json => {
            let limit = args.limit.unwrap_or(indices.len()).min(indices.len());
            let rows: Vec<&CleanRow> = indices[..limit].iter().map(|&i| &table.rows[i]).collect();
            serde_json::to_writer_pretty(io::stdout(), &rows)
                .context("Failed to serialize rows to JSON")?;
            println!();
        }
        OutputFormat::Csv => {
            let limit = args.limit.unwrap_or(indices.len()).min(indices.len());
            let mut writer = csv::Writer::from_writer(io::stdout());
            for &i in &indices[..limit] {
                writer
                    .serialize(&table.rows[i])
                    .context("Failed to write CSV row")?;
            }
            writer.flush().context("Failed to flush CSV output")?;
        }
    }

    Ok(())
}
