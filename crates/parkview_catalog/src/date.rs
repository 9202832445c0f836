//! Long-form date formatting
//!
//! `operating_since` values are usually ISO `YYYY-MM-DD`, but the catalog is
//! hand-edited and sometimes carries other date-like text. Anything that
//! can't be read as a date is shown as written.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const LONG_FORMAT: &str = "%B %-d, %Y";

const DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%d %b %Y"];

const MONTH_FORMATS: &[&str] = &["%B %Y", "%b %Y"];

/// Format `value` as "January 5, 2015", or return it unchanged if unparsable
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format(LONG_FORMAT).to_string(),
        None => {
            tracing::trace!(value, "date left as written");
            value.to_string()
        }
    }
}

/// Format an optional field; absent and empty values produce nothing
pub fn format_optional_date(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(format_date)
}

/// Best-effort reading of a date-like string
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    parse_iso_triple(value)
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        })
        .or_else(|| parse_month(value))
        .or_else(|| parse_year(value))
}

fn parse_iso_triple(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// `YYYY-MM` or `Month YYYY`, pinned to the first of the month
fn parse_month(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d") {
        return Some(date);
    }
    let padded = format!("1 {value}");
    MONTH_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&padded, &format!("%d {fmt}")).ok())
}

/// Bare four-digit year, pinned to January 1
fn parse_year(value: &str) -> Option<NaiveDate> {
    if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(value.parse().ok()?, 1, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_dates() {
        assert_eq!(format_date("1989-05-27"), "May 27, 1989");
        assert_eq!(format_date("2015-01-05"), "January 5, 2015");
    }

    #[test]
    fn test_unparsable_passes_through() {
        assert_eq!(format_date("unknown"), "unknown");
        assert_eq!(format_date("2015-02-30"), "2015-02-30");
        assert_eq!(format_date("Summer '99"), "Summer '99");
    }

    #[test]
    fn test_other_date_shapes() {
        assert_eq!(format_date("2001-09-08T10:00:00Z"), "September 8, 2001");
        assert_eq!(format_date("2001-09-08T10:00:00"), "September 8, 2001");
        assert_eq!(format_date("07/04/1976"), "July 4, 1976");
        assert_eq!(format_date("1976/07/04"), "July 4, 1976");
        assert_eq!(format_date("March 5, 2015"), "March 5, 2015");
        assert_eq!(format_date("Mar 5, 2015"), "March 5, 2015");
        assert_eq!(format_date("5 March 2015"), "March 5, 2015");
        assert_eq!(format_date("May 1975"), "May 1, 1975");
        assert_eq!(format_date("1975-06"), "June 1, 1975");
        assert_eq!(format_date("1980"), "January 1, 1980");
    }

    #[test]
    fn test_optional_dates() {
        assert_eq!(format_optional_date(None), None);
        assert_eq!(format_optional_date(Some("")), None);
        assert_eq!(format_optional_date(Some("1989-05-27")).as_deref(), Some("May 27, 1989"));
    }
}
