//! Command-line interface definition

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "packlist",
    about = "Search and summarize equipment packing lists from multi-sheet Excel workbooks",
    version
)]
pub struct Cli {
    /// Workbook to load (overrides the configured path)
    #[arg(long, short = 'f', global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search rows and print them with summary metrics
    Search(SearchArgs),
    /// List order numbers, or show one order's rows and metrics
    Orders(OrdersArgs),
    /// Gross weight by unit and the heaviest rows
    Analyze,
    /// Detail card for a single row of the (filtered) table
    Show(ShowArgs),
    /// Source workbook and clean table facts
    Info,
    /// Interactive dashboard
    Dash,
}

#[derive(clap::Args)]
pub struct SearchArgs {
    /// Free-text search over unit, order no, item no, and description
    pub query: Option<String>,

    /// Only rows with exactly this unit
    #[arg(long)]
    pub unit: Option<String>,

    /// Only rows with exactly this order number
    #[arg(long)]
    pub order: Option<String>,

    /// Print at most this many rows
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(clap::Args)]
pub struct OrdersArgs {
    /// Order number to show; omit to list all order numbers
    pub order: Option<String>,
}

#[derive(clap::Args)]
pub struct ShowArgs {
    /// Row index within the filtered result set (as printed by `search`)
    pub index: usize,

    /// Free-text search over unit, order no, item no, and description
    pub query: Option<String>,

    /// Only rows with exactly this unit
    #[arg(long)]
    pub unit: Option<String>,

    /// Only rows with exactly this order number
    #[arg(long)]
    pub order: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}
