//! Lenient date parsing for user-entered record fields.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Point in time used by the layout engine. Date-only input is midnight.
pub type Instant = NaiveDateTime;

static DATE_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d{4})-(\d{1,2})-(\d{1,2})(?:[T ](\d{1,2}):(\d{2})(?::(\d{2}))?)?")
        .expect("valid date prefix regex")
});

/// Parses `YYYY-M-D` with an optional `T`/space separated `HH:MM[:SS]`.
///
/// Anything after the recognised prefix (fractional seconds, zone suffix)
/// is ignored. Returns `None` for empty or invalid calendar values.
pub fn parse_instant(raw: &str) -> Option<Instant> {
    let caps = DATE_PREFIX_RE.captures(raw)?;
    let field = |idx: usize| caps.get(idx).and_then(|m| m.as_str().parse::<u32>().ok());

    let year = caps.get(1)?.as_str().parse::<i32>().ok()?;
    let date = NaiveDate::from_ymd_opt(year, field(2)?, field(3)?)?;
    let time = match field(4) {
        Some(hour) => NaiveTime::from_hms_opt(hour, field(5)?, field(6).unwrap_or(0))?,
        None => NaiveTime::MIN,
    };
    Some(date.and_time(time))
}

/// Parses an optional raw field, treating `None` and blanks alike.
pub fn parse_optional(raw: Option<&str>) -> Option<Instant> {
    raw.and_then(parse_instant)
}
