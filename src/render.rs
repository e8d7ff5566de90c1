//! Colored terminal rendering for collection progress.

use menucal_core::collect::{WeekReport, WeekStatus};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for WeekReport {
    fn render(&self) -> String {
        match &self.status {
            WeekStatus::Fetched { days } => {
                let label = format!("({} {})", days, pluralize("day", *days));
                format!("Fetched week of {} {}", self.monday, label.dimmed())
            }
            WeekStatus::Failed { reason } => format!(
                "{} Failed to fetch week for {}: {}",
                "[WARN]".yellow(),
                self.monday,
                reason.red()
            ),
        }
    }
}

pub fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 { word } else { match word {
        "day" => "days",
        "week" => "weeks",
        _ => word,
    }}
}
