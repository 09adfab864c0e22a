/// Utilities for date and time formatting
///
/// Dates are shown en-US style, as on the rest of the storefront
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Format a date as M/D/YYYY
/// Example: 2024-02-14 -> "2/14/2024"
pub fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Format a timestamp as "Mon D, YYYY, HH:MM AM"
/// Example: 2024-01-10T10:30:00 -> "Jan 10, 2024, 10:30 AM"
pub fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Value for the `min` attribute of a date input
pub fn date_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
        assert_eq!(format_date(date), "2/14/2024");
        assert_eq!(date_input_value(date), "2024-02-14");
    }

    #[test]
    fn test_format_datetime() {
        let dt = NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .and_hms_opt(14, 15, 0)
            .unwrap();
        assert_eq!(format_datetime(dt), "Jan 10, 2024, 02:15 PM");
    }
}
