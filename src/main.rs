mod generate;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use menucal_core::{DateRange, MenuCalConfig};

#[derive(Parser)]
#[command(name = "menucal")]
#[command(about = "Build an all-day .ics calendar from a school's Nutrislice lunch menu")]
struct Cli {
    /// TOML file overriding the built-in school configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the calendar (defaults to windsong_lunch.ics)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// First day to include (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    from: Option<String>,

    /// Number of days after the first day to include
    #[arg(long)]
    days: Option<i64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = MenuCalConfig::load(cli.config.as_deref())?;
    if let Some(output) = cli.output {
        config.output_path = output;
    }

    let today = Local::now().date_naive();
    let range = DateRange::from_args(cli.from.as_deref(), cli.days, today, config.window_days)?;

    generate::run(&config, range).await
}
