//! ICS generation.
//!
//! Documents are built with the icalendar crate, then re-folded so no
//! physical line exceeds 70 octets.

mod generate;
mod text;

pub use generate::{generate_ics, generate_ics_at};
pub use text::fold_line;
