//! Week-by-week menu collection.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;

use crate::date_range::DateRange;
use crate::error::FetchError;
use crate::extract::extract_day_items;
use crate::payload::WeekPayload;
use crate::source::MenuSource;

/// Date → ordered, de-duplicated item names.
///
/// A missing date means no data; an empty list means the day was published
/// without items.
pub type MenuMap = BTreeMap<NaiveDate, Vec<String>>;

/// Result of asking the source for one week.
#[derive(Debug)]
pub enum WeekOutcome {
    Fetched(WeekPayload),
    Failed(FetchError),
}

/// What happened to one week, reported to the progress observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekReport {
    pub monday: NaiveDate,
    pub status: WeekStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeekStatus {
    /// Number of in-range days the week contributed.
    Fetched { days: usize },
    /// The week was skipped; carries the error message.
    Failed { reason: String },
}

/// Output of a collection run.
#[derive(Debug, Default)]
pub struct Collection {
    pub menus: MenuMap,
    /// Weeks that were skipped because their fetch failed.
    pub failed_weeks: Vec<WeekReport>,
    pub weeks_fetched: usize,
}

/// Walks a date range one week at a time and builds a [`MenuMap`].
pub struct MenuCollector<S> {
    source: S,
}

impl<S: MenuSource> MenuCollector<S> {
    pub fn new(source: S) -> Self {
        MenuCollector { source }
    }

    #[cfg(test)]
    fn source(&self) -> &S {
        &self.source
    }

    pub async fn collect(&self, range: DateRange) -> Collection {
        self.collect_with_progress(range, |_| {}).await
    }

    /// Collect menus for every date in `range`, calling `on_week` after
    /// each week is processed.
    ///
    /// Each week is requested at most once. A failed week contributes no
    /// dates and does not stop the run.
    pub async fn collect_with_progress<F>(&self, range: DateRange, mut on_week: F) -> Collection
    where
        F: FnMut(&WeekReport),
    {
        let mut collection = Collection::default();
        let mut fetched = HashSet::new();

        for monday in range.weeks() {
            if !fetched.insert(monday) {
                continue;
            }

            let outcome = match self.source.fetch_week(monday).await {
                Ok(payload) => WeekOutcome::Fetched(payload),
                Err(e) => WeekOutcome::Failed(e),
            };

            let report = match outcome {
                WeekOutcome::Fetched(payload) => {
                    collection.weeks_fetched += 1;
                    let days = merge_week(&mut collection.menus, &payload, range);
                    WeekReport {
                        monday,
                        status: WeekStatus::Fetched { days },
                    }
                }
                WeekOutcome::Failed(e) => {
                    let report = WeekReport {
                        monday,
                        status: WeekStatus::Failed {
                            reason: e.to_string(),
                        },
                    };
                    collection.failed_weeks.push(report.clone());
                    report
                }
            };

            on_week(&report);
        }

        collection
    }
}

/// Insert every in-range day of `payload`, replacing earlier entries for the
/// same date. Returns how many days were inserted.
fn merge_week(menus: &mut MenuMap, payload: &WeekPayload, range: DateRange) -> usize {
    let mut inserted = 0;

    for day in &payload.days {
        let Some(date) = day.parsed_date() else {
            continue;
        };
        if !range.contains(date) {
            continue;
        }
        menus.insert(date, extract_day_items(day));
        inserted += 1;
    }

    inserted
}
