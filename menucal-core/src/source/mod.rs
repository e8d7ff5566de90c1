//! Where weekly menu payloads come from.
//!
//! The collector only depends on [`MenuSource`]; [`NutrisliceClient`] is the
//! HTTP implementation used by the CLI.

mod nutrislice;

use chrono::NaiveDate;

use crate::error::FetchError;
use crate::payload::WeekPayload;

pub use nutrislice::{NutrisliceClient, build_week_url};

/// A provider of one week of menu data per call.
///
/// Implementations make a single attempt; retrying is the caller's decision.
pub trait MenuSource {
    /// Fetch the week anchored at `monday`.
    fn fetch_week(
        &self,
        monday: NaiveDate,
    ) -> impl Future<Output = Result<WeekPayload, FetchError>>;
}
