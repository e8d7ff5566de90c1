use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::render::{Render, pluralize};
use crate::utils::tui::create_spinner;
use menucal_core::collect::WeekStatus;
use menucal_core::ics::generate_ics;
use menucal_core::{DateRange, MenuCalConfig, MenuCollector, NutrisliceClient};

pub async fn run(config: &MenuCalConfig, range: DateRange) -> Result<()> {
    println!("Building menus from {} to {}...", range.start, range.end);

    let collector = MenuCollector::new(NutrisliceClient::new(config)?);

    let spinner = create_spinner("Fetching menus".to_string());
    let collection = collector
        .collect_with_progress(range, |report| match report.status {
            WeekStatus::Fetched { .. } => spinner.set_message(report.render()),
            WeekStatus::Failed { .. } => spinner.suspend(|| println!("{}", report.render())),
        })
        .await;
    spinner.finish_and_clear();

    let days = collection.menus.len();
    println!("Found menus for {} {}.", days, pluralize("day", days));

    let failed = collection.failed_weeks.len();
    if failed > 0 {
        let message = format!("Skipped {} {} that could not be fetched", failed, pluralize("week", failed));
        println!("{}", message.yellow());
    }

    let content = generate_ics(&collection.menus, config);
    write_calendar(&config.output_path, &content)?;

    let size_kb = content.len() as f64 / 1024.0;
    let message = format!("Wrote {} ({:.1} KB).", config.output_path.display(), size_kb);
    println!("{}", message.green());

    Ok(())
}

fn write_calendar(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write calendar to {}", path.display()))
}
