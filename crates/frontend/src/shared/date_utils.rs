/// Utilities for date formatting
///
/// Provides consistent date formatting for the order form
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};

/// Calendar date of `now` in its own time zone
pub fn date_in<Tz: TimeZone>(now: &DateTime<Tz>) -> NaiveDate {
    now.date_naive()
}

/// Today in the browser's local time zone
pub fn local_today() -> NaiveDate {
    date_in(&Local::now())
}

/// Format a date the long way, e.g. 2026-10-15 -> "October 15th, 2026"
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Format a date the way `<input type="date">` expects (yyyy-mm-dd)
pub fn to_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse the value of `<input type="date">`. Empty or partial input gives `None`.
pub fn parse_input_value(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date(date(2026, 10, 15)), "October 15th, 2026");
        assert_eq!(format_long_date(date(2024, 3, 1)), "March 1st, 2024");
        assert_eq!(format_long_date(date(2024, 3, 22)), "March 22nd, 2024");
        assert_eq!(format_long_date(date(2024, 3, 23)), "March 23rd, 2024");
    }

    #[test]
    fn test_teens_use_th() {
        assert_eq!(format_long_date(date(2024, 12, 11)), "December 11th, 2024");
        assert_eq!(format_long_date(date(2024, 12, 12)), "December 12th, 2024");
        assert_eq!(format_long_date(date(2024, 12, 13)), "December 13th, 2024");
    }

    #[test]
    fn test_date_in_uses_local_offset() {
        use chrono::{FixedOffset, Utc};

        // 20:30 UTC on the 15th is already 02:00 on the 16th in IST
        let utc = Utc.with_ymd_and_hms(2026, 10, 15, 20, 30, 0).unwrap();
        let ist = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        assert_eq!(date_in(&utc), date(2026, 10, 15));
        assert_eq!(date_in(&utc.with_timezone(&ist)), date(2026, 10, 16));
    }

    #[test]
    fn test_input_value() {
        assert_eq!(to_input_value(date(2026, 1, 5)), "2026-01-05");
        assert_eq!(parse_input_value("2026-01-05"), Some(date(2026, 1, 5)));
        assert_eq!(parse_input_value(""), None);
        assert_eq!(parse_input_value("2026-13-01"), None);
    }
}
