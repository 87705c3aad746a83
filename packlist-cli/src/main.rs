mod commands;
mod config;
mod data;
mod options;
mod query;
mod tui;

use anyhow::Result;
use clap::Parser;

use crate::options::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = config::Config::load()?;
    if let Some(file) = cli.file {
        config.workbook_path = file;
    }
    config::set_global_config(config);

    match cli.command {
        Commands::Search(args) => commands::search::run(args),
        Commands::Orders(args) => commands::orders::run(args),
        Commands::Analyze => commands::analyze::run(),
        Commands::Show(args) => commands::show::run(args),
        Commands::Info => commands::info::run(),
        Commands::Dash => tui::run(commands::load_table()?),
    }
}
