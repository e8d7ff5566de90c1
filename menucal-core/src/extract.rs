//! Day record → list of menu item names.

use std::collections::HashSet;

use crate::payload::{DayRecord, MenuItemRecord};

/// Extract the item names of one day, in menu order, without duplicates.
///
/// Section titles are skipped. A food name wins over free text; blank
/// values count as missing. Later duplicates (exact match) are dropped.
pub fn extract_day_items(day: &DayRecord) -> Vec<String> {
    let mut seen = HashSet::new();

    day.menu_items
        .iter()
        .filter_map(item_name)
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

fn item_name(item: &MenuItemRecord) -> Option<String> {
    if item.is_section_title == Some(true) {
        return None;
    }

    let food_name = item.food.as_ref().and_then(|food| non_blank(food.name.as_deref()));
    food_name
        .or_else(|| non_blank(item.text.as_deref()))
        .map(str::to_string)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
