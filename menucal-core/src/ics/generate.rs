//! Menu map → .ics document.

use chrono::{DateTime, NaiveDate, Utc};
use icalendar::parser::unfold;
use icalendar::{Calendar, Component, EventLike, Property, ValueType};

use super::text::fold_line;
use crate::collect::MenuMap;
use crate::config::MenuCalConfig;

const NO_ITEMS_DESCRIPTION: &str = "No lunch menu items were listed for this date.";
const NO_MENU_SUFFIX: &str = " (No Menu Listed)";

/// Generate the calendar, stamping every event with the current time.
pub fn generate_ics(menus: &MenuMap, config: &MenuCalConfig) -> String {
    generate_ics_at(menus, config, Utc::now())
}

/// Generate the calendar with an explicit DTSTAMP.
///
/// One all-day VEVENT per entry of `menus`, in date order. Output is fully
/// determined by the arguments.
pub fn generate_ics_at(menus: &MenuMap, config: &MenuCalConfig, now: DateTime<Utc>) -> String {
    let dtstamp = now.format("%Y%m%dT%H%M%SZ").to_string();

    let mut cal = Calendar::new();
    cal.append_property(Property::new("METHOD", "PUBLISH"));
    cal.append_property(Property::new("X-WR-CALNAME", &config.calendar_name));

    for (date, items) in menus {
        cal.push(build_event(config, &dtstamp, *date, items));
    }

    let cal = cal.done();

    finish_ics(&cal.to_string(), &config.product_id)
}

fn build_event(
    config: &MenuCalConfig,
    dtstamp: &str,
    date: NaiveDate,
    items: &[String],
) -> icalendar::Event {
    let ymd = date.format("%Y%m%d").to_string();

    let mut summary = format!("{} – {}", config.event_title, date.format("%b %d"));
    let description = if items.is_empty() {
        summary.push_str(NO_MENU_SUFFIX);
        NO_ITEMS_DESCRIPTION.to_string()
    } else {
        let bullets: Vec<String> = items.iter().map(|item| format!("- {}", item)).collect();
        format!("Menu:\n{}", bullets.join("\n"))
    };

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&config.event_uid(&ymd));
    ics_event.add_property("DTSTAMP", dtstamp);

    // All-day: DTEND is the exclusive next day
    add_date_property(&mut ics_event, "DTSTART", date);
    add_date_property(&mut ics_event, "DTEND", date.succ_opt().unwrap_or(date));

    // The crate escapes TEXT values, newlines become a literal \n
    ics_event.summary(&summary);
    ics_event.description(&description);

    ics_event.done()
}

fn add_date_property(ics_event: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with the configured product identifier
/// - Re-fold every content line at 70 octets (the crate folds at 75)
fn finish_ics(ics: &str, product_id: &str) -> String {
    let unfolded = unfold(ics);
    let mut result = String::with_capacity(unfolded.len() + unfolded.len() / 20);

    for line in unfolded.lines() {
        if line.is_empty() {
            continue;
        }

        if line.starts_with("PRODID:") {
            result.push_str(&fold_line(&format!("PRODID:{}", product_id)));
        } else {
            result.push_str(&fold_line(line));
        }
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use icalendar::parser::read_calendar;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 8, 30, 14, 5, 9).unwrap()
    }

    fn sample_menus() -> MenuMap {
        let mut menus = MenuMap::new();
        menus.insert(date(2024, 9, 2), vec!["Pizza".to_string(), "Milk".to_string()]);
        menus.insert(date(2024, 9, 3), vec![]);
        menus
    }

    fn events(ics: &str) -> Vec<&str> {
        ics.split("BEGIN:VEVENT").skip(1).collect()
    }

    #[test]
    fn test_generate_ics_two_day_calendar() {
        let ics = generate_ics_at(&sample_menus(), &MenuCalConfig::default(), fixed_now());

        let events = events(&ics);
        assert_eq!(events.len(), 2, "ICS:\n{}", ics);

        let first = events[0];
        assert!(first.contains("\r\nSUMMARY:Windsong Lunch – Sep 02\r\n"), "ICS:\n{}", ics);
        assert!(first.contains("\r\nDESCRIPTION:Menu:\\n- Pizza\\n- Milk\r\n"), "ICS:\n{}", ics);
        assert!(first.contains("\r\nDTSTART;VALUE=DATE:20240902\r\n"));
        assert!(first.contains("\r\nDTEND;VALUE=DATE:20240903\r\n"));
        assert!(first.contains(
            "\r\nUID:windsong-elementary-lunch-20240902@prosperisd.nutrislice\r\n"
        ));
        assert!(first.contains("\r\nDTSTAMP:20240830T140509Z\r\n"));

        let second = events[1];
        assert!(second.contains("\r\nSUMMARY:Windsong Lunch – Sep 03 (No Menu Listed)\r\n"));
        assert!(second.contains(
            "\r\nDESCRIPTION:No lunch menu items were listed for this date.\r\n"
        ));
        assert!(second.contains("\r\nDTEND;VALUE=DATE:20240904\r\n"));
    }

    #[test]
    fn test_generate_ics_header_and_footer() {
        let ics = generate_ics_at(&sample_menus(), &MenuCalConfig::default(), fixed_now());

        assert!(ics.starts_with(
            "BEGIN:VCALENDAR\r\n\
             VERSION:2.0\r\n\
             PRODID:-//LeetFamily//Windsong Lunch//EN\r\n\
             CALSCALE:GREGORIAN\r\n\
             METHOD:PUBLISH\r\n\
             X-WR-CALNAME:Windsong ES Lunch\r\n"
        ));
        assert!(ics.ends_with("END:VEVENT\r\nEND:VCALENDAR\r\n"));
    }

    #[test]
    fn test_generate_ics_every_line_ends_with_crlf() {
        let ics = generate_ics_at(&sample_menus(), &MenuCalConfig::default(), fixed_now());
        let stripped = ics.replace("\r\n", "");
        assert!(!stripped.contains('\n'));
        assert!(!stripped.contains('\r'));
    }

    #[test]
    fn test_generate_ics_is_deterministic() {
        let config = MenuCalConfig::default();
        let a = generate_ics_at(&sample_menus(), &config, fixed_now());
        let b = generate_ics_at(&sample_menus(), &config, fixed_now());
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_ics_empty_map() {
        let ics = generate_ics_at(&MenuMap::new(), &MenuCalConfig::default(), fixed_now());

        assert!(!ics.contains("BEGIN:VEVENT"));
        assert!(ics.ends_with("X-WR-CALNAME:Windsong ES Lunch\r\nEND:VCALENDAR\r\n"));
        assert!(read_calendar(&unfold(&ics)).is_ok(), "ICS:\n{}", ics);
    }

    #[test]
    fn test_generate_ics_events_sorted_by_date() {
        let mut menus = MenuMap::new();
        for day in [20, 3, 11] {
            menus.insert(date(2024, 9, day), vec!["Soup".to_string()]);
        }

        let ics = generate_ics_at(&menus, &MenuCalConfig::default(), fixed_now());
        let starts: Vec<&str> = ics
            .lines()
            .filter_map(|l| l.strip_prefix("DTSTART;VALUE=DATE:"))
            .collect();
        assert_eq!(starts, vec!["20240903", "20240911", "20240920"]);
    }

    #[test]
    fn test_generate_ics_folds_long_description() {
        let items: Vec<String> = (1..=12).map(|n| format!("Menu item number {}", n)).collect();
        let mut menus = MenuMap::new();
        menus.insert(date(2024, 9, 2), items);

        let ics = generate_ics_at(&menus, &MenuCalConfig::default(), fixed_now());

        assert!(ics.split("\r\n").all(|l| l.len() <= 70), "ICS:\n{}", ics);
        let unfolded = ics.replace("\r\n ", "");
        assert!(unfolded.contains("\\n- Menu item number 7\\n- Menu item number 8\\n"));
    }

    #[test]
    fn test_generate_ics_escapes_item_text() {
        let mut menus = MenuMap::new();
        menus.insert(date(2024, 9, 2), vec!["Chips, Salsa; Queso".to_string()]);

        let ics = generate_ics_at(&menus, &MenuCalConfig::default(), fixed_now());
        assert!(ics.contains("DESCRIPTION:Menu:\\n- Chips\\, Salsa\\; Queso\r\n"), "ICS:\n{}", ics);
    }

    #[test]
    fn test_generate_ics_parses_back() {
        let ics = generate_ics_at(&sample_menus(), &MenuCalConfig::default(), fixed_now());

        let unfolded = unfold(&ics);
        let calendar = read_calendar(&unfolded).expect("generated ICS should parse");
        let vevents: Vec<_> = calendar
            .components
            .iter()
            .filter(|c| c.name == "VEVENT")
            .collect();
        assert_eq!(vevents.len(), 2);

        let uid = vevents[1].find_prop("UID").map(|p| p.val.to_string());
        assert_eq!(
            uid.as_deref(),
            Some("windsong-elementary-lunch-20240903@prosperisd.nutrislice")
        );
    }
}
