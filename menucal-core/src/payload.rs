//! Nutrislice weeks-API response types.
//!
//! Upstream deployments are not uniform, so every field is optional and a
//! value of the wrong JSON type is treated as absent instead of failing the
//! whole week.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One week of menu data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeekPayload {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub days: Vec<DayRecord>,
}

/// A single day inside a [`WeekPayload`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DayRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub menu_items: Vec<MenuItemRecord>,
}

impl DayRecord {
    /// The record's date, if present and well-formed.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.date.as_deref()?;
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
    }
}

/// One entry of a day's `menu_items`: a section header, a food, or free text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuItemRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub is_section_title: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub food: Option<Food>,
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Food {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

/// Deserialize `T`, mapping null or a mismatched type to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Deserialize a list, dropping elements that don't fit `T`.
/// Anything other than an array becomes an empty list.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(values) => Ok(values
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}
