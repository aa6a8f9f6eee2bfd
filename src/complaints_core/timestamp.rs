//! Lenient timestamp parsing for complaint dates and range bounds

use super::error::ComplaintError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: [&str; 7] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    // 311 export format
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Parse a timestamp in any of the accepted shapes.
///
/// Returns `None` for empty or unrecognised input; callers treat that as the
/// null marker. Offsets are normalised to UTC and then dropped. A bare date
/// resolves to midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Parse a range bound given on the command line. Unlike row dates, a bad
/// bound aborts the run.
pub fn parse_bound(raw: &str) -> Result<NaiveDateTime, ComplaintError> {
    parse_timestamp(raw).ok_or_else(|| ComplaintError::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_iso_date_is_midnight() {
        assert_eq!(parse_timestamp("2020-01-05"), Some(at(2020, 1, 5, 0, 0, 0)));
        assert_eq!(parse_timestamp("  2020-01-05 "), Some(at(2020, 1, 5, 0, 0, 0)));
    }

    #[test]
    fn test_parse_iso_datetime_variants() {
        assert_eq!(
            parse_timestamp("2020-01-05T13:45:10"),
            Some(at(2020, 1, 5, 13, 45, 10))
        );
        assert_eq!(
            parse_timestamp("2020-01-05 13:45:10.250"),
            Some(at(2020, 1, 5, 13, 45, 10) + chrono::Duration::milliseconds(250))
        );
        assert_eq!(
            parse_timestamp("2020-01-05 13:45"),
            Some(at(2020, 1, 5, 13, 45, 0))
        );
    }

    #[test]
    fn test_parse_rfc3339_normalises_to_utc() {
        assert_eq!(
            parse_timestamp("2020-01-05T08:00:00-05:00"),
            Some(at(2020, 1, 5, 13, 0, 0))
        );
    }

    #[test]
    fn test_parse_export_format() {
        assert_eq!(
            parse_timestamp("01/05/2020 12:00:00 AM"),
            Some(at(2020, 1, 5, 0, 0, 0))
        );
        assert_eq!(
            parse_timestamp("01/05/2020 02:30:00 PM"),
            Some(at(2020, 1, 5, 14, 30, 0))
        );
        assert_eq!(parse_timestamp("01/05/2020"), Some(at(2020, 1, 5, 0, 0, 0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("   "), None);
        assert_eq!(parse_timestamp("not-a-date"), None);
        assert_eq!(parse_timestamp("2020-13-45"), None);
        assert_eq!(parse_timestamp("CreatedDate"), None);
    }

    #[test]
    fn test_parse_bound_error() {
        assert!(parse_bound("2020-01-01").is_ok());
        match parse_bound("yesterday") {
            Err(ComplaintError::InvalidDate(raw)) => assert_eq!(raw, "yesterday"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
