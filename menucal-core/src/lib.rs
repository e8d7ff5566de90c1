//! Core types for menucal.
//!
//! This crate turns a school's Nutrislice menu into an iCalendar document:
//! - `source` fetches one week of menu data at a time
//! - `extract` reduces a day record to a list of item names
//! - `collect` walks a date range week by week and builds the `MenuMap`
//! - `ics` serializes the `MenuMap` into a calendar file

pub mod collect;
pub mod config;
pub mod constants;
pub mod date_range;
pub mod error;
pub mod extract;
pub mod ics;
pub mod payload;
pub mod source;

pub use collect::{Collection, MenuCollector, MenuMap, WeekOutcome, WeekReport};
pub use config::MenuCalConfig;
pub use date_range::DateRange;
pub use error::{FetchError, MenuCalError, MenuCalResult};
pub use source::{MenuSource, NutrisliceClient};
