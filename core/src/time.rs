use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{PipError, Result};

pub const ACCEPTED_FORMATS_HINT: &str =
    "Examples: 2019-12-02, 2/12/2019 1800, 2/12/2019 6:15pm, 2019-12-02T18:00";

const ISO_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

// Slash patterns are tried before dash patterns; the two never overlap.
const DATE_FORMATS: [&str; 2] = ["%d/%m/%Y", "%d-%m-%Y"];

// In priority order: HHmm, H:mm, h:mma. The bare-hour "ha" form is handled in `parse_time`.
const TIME_FORMATS: [&str; 3] = ["%H%M", "%H:%M", "%I:%M%p"];

/// Parses user-supplied date/time text into a local instant.
///
/// Tries strict ISO date-time, then ISO date (midnight), then
/// `d/M/yyyy` / `d-M-yyyy` with an optional `HHmm`, `H:mm`, `h:mma` or `ha`
/// time. The whole input has to be consumed by one pattern.
pub fn parse_date_time(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return Err(invalid(input));
    }

    if let Some(dt) = parse_iso(input) {
        return Ok(dt);
    }

    // Exactly one space separates the date from the time.
    let (date_part, time_part) = match input.split_once(' ') {
        Some((date, time)) => (date, Some(time)),
        None => (input, None),
    };
    if time_part.is_some_and(|t| t.starts_with(char::is_whitespace)) {
        return Err(invalid(input));
    }
    if !has_full_year(date_part) {
        return Err(invalid(input));
    }

    for date_format in DATE_FORMATS {
        let Ok(date) = NaiveDate::parse_from_str(date_part, date_format) else {
            continue;
        };
        return match time_part {
            None => Ok(date.and_time(NaiveTime::MIN)),
            Some(time) => parse_time(time)
                .map(|t| date.and_time(t))
                .ok_or_else(|| invalid(input)),
        };
    }

    Err(invalid(input))
}

/// Display form: `Dec 2 2019` at midnight, `Dec 2 2019, 6:00 PM` otherwise.
pub fn format_date_time(dt: &NaiveDateTime) -> String {
    if dt.time() == NaiveTime::MIN {
        dt.format("%b %-d %Y").to_string()
    } else {
        dt.format("%b %-d %Y, %-I:%M %p").to_string()
    }
}

/// Storage form, ISO-8601 without a zone. Seconds are only written when non-zero.
pub fn to_iso_string(dt: &NaiveDateTime) -> String {
    if dt.nanosecond() != 0 {
        dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
    } else if dt.second() != 0 {
        dt.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        dt.format("%Y-%m-%dT%H:%M").to_string()
    }
}

fn parse_iso(input: &str) -> Option<NaiveDateTime> {
    for format in ISO_DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(input, ISO_DATE_FORMAT)
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

// `%Y` alone would read "19" as the year 0019.
fn has_full_year(date_part: &str) -> bool {
    date_part
        .rsplit(['/', '-'])
        .next()
        .is_some_and(|year| year.len() >= 4 && year.chars().all(|c| c.is_ascii_digit()))
}

fn parse_time(input: &str) -> Option<NaiveTime> {
    for format in TIME_FORMATS {
        if let Ok(t) = NaiveTime::parse_from_str(input, format) {
            return Some(t);
        }
    }
    parse_bare_hour(input)
}

// "6pm", "12AM"
fn parse_bare_hour(input: &str) -> Option<NaiveTime> {
    let split = input.find(|c: char| !c.is_ascii_digit())?;
    let (hour, marker) = input.split_at(split);
    if hour.is_empty() || hour.len() > 2 {
        return None;
    }
    NaiveTime::parse_from_str(&format!("{}:00{}", hour, marker), "%I:%M%p").ok()
}

fn invalid(input: &str) -> PipError {
    PipError::InvalidDateTime {
        input: input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_slash_pattern_matches_iso() {
        let a = parse_date_time("2/12/2019 1800").unwrap();
        let b = parse_date_time("2019-12-02T18:00").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, at(2019, 12, 2, 18, 0));
    }

    #[test]
    fn test_iso_date_is_midnight() {
        assert_eq!(parse_date_time("2019-12-02").unwrap(), at(2019, 12, 2, 0, 0));
    }

    #[test]
    fn test_iso_with_seconds() {
        let dt = parse_date_time("2019-12-02T18:00:30").unwrap();
        assert_eq!(dt.second(), 30);
    }

    #[test]
    fn test_time_variants() {
        let expected = at(2019, 12, 2, 18, 15);
        assert_eq!(parse_date_time("2/12/2019 18:15").unwrap(), expected);
        assert_eq!(parse_date_time("2/12/2019 6:15pm").unwrap(), expected);
        assert_eq!(parse_date_time("2/12/2019 6:15PM").unwrap(), expected);
        assert_eq!(parse_date_time("2-12-2019 1815").unwrap(), expected);
        assert_eq!(parse_date_time("2/12/2019 6pm").unwrap(), at(2019, 12, 2, 18, 0));
        assert_eq!(parse_date_time("2/12/2019 12AM").unwrap(), at(2019, 12, 2, 0, 0));
    }

    #[test]
    fn test_date_only_patterns() {
        assert_eq!(parse_date_time("2/12/2019").unwrap(), at(2019, 12, 2, 0, 0));
        assert_eq!(parse_date_time("02-12-2019").unwrap(), at(2019, 12, 2, 0, 0));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            parse_date_time("not a date"),
            Err(PipError::InvalidDateTime { .. })
        ));
        assert!(parse_date_time("").is_err());
        assert!(parse_date_time("2/12/2019 1800 extra").is_err());
        assert!(parse_date_time("2/12/2019 25pm").is_err());
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert!(parse_date_time("31/2/2019").is_err());
        assert!(parse_date_time("1/13/2019").is_err());
        assert!(parse_date_time("2019-02-30").is_err());
    }

    #[test]
    fn test_rejects_short_year() {
        assert!(matches!(
            parse_date_time("2/12/19 1800"),
            Err(PipError::InvalidDateTime { .. })
        ));
        assert!(parse_date_time("2-12-19").is_err());
        assert_eq!(parse_date_time("2/12/0019").unwrap(), at(19, 12, 2, 0, 0));
    }

    #[test]
    fn test_rejects_extra_spacing() {
        assert!(parse_date_time("2/12/2019   1800").is_err());
        assert!(parse_date_time("2/12/2019\t1800").is_err());
        assert!(parse_date_time("2/12/2019 1800").is_ok());
    }

    #[test]
    fn test_error_lists_examples() {
        let err = parse_date_time("someday").unwrap_err();
        assert!(err.to_string().contains("2/12/2019 1800"));
    }

    #[test]
    fn test_format_midnight_and_time() {
        assert_eq!(format_date_time(&at(2019, 12, 2, 0, 0)), "Dec 2 2019");
        assert_eq!(format_date_time(&at(2019, 12, 2, 18, 0)), "Dec 2 2019, 6:00 PM");
        assert_eq!(format_date_time(&at(2019, 1, 15, 9, 5)), "Jan 15 2019, 9:05 AM");
    }

    #[test]
    fn test_iso_string() {
        assert_eq!(to_iso_string(&at(2019, 12, 2, 18, 0)), "2019-12-02T18:00");
        let with_seconds = parse_date_time("2019-12-02T18:00:30").unwrap();
        assert_eq!(to_iso_string(&with_seconds), "2019-12-02T18:00:30");
    }
}
