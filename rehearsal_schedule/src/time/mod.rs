//! Reference-date resolution and whole-day arithmetic on canonical dates.
//!
//! All comparisons elsewhere in the crate operate on canonical `YYYY-MM-DD`
//! strings. This module is where those strings meet the calendar: resolving
//! "today" in the program's timezone and counting days between two dates for
//! the countdown panel.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// Timezone the schedule is anchored to unless configured otherwise.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Bogota;

/// Format string for canonical dates.
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns the current date in `tz` as a canonical `YYYY-MM-DD` string.
///
/// Resolving the date in the schedule's own timezone avoids off-by-one-day
/// drift for hosts running in UTC.
pub fn today_in(tz: Tz) -> String {
    Utc::now()
        .with_timezone(&tz)
        .date_naive()
        .format(CANONICAL_DATE_FORMAT)
        .to_string()
}

/// Parses a canonical date string.
///
/// Returns `None` for empty input or anything that is not a real calendar
/// date in `YYYY-MM-DD` form.
pub fn parse_canonical(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, CANONICAL_DATE_FORMAT).ok()
}

/// Formats a date in canonical form.
pub fn to_canonical(date: NaiveDate) -> String {
    date.format(CANONICAL_DATE_FORMAT).to_string()
}

/// Signed number of whole days from `from` to `to`.
///
/// # Examples
///
/// ```
/// use rehearsal_schedule::time::days_between;
///
/// assert_eq!(days_between("2025-09-15", "2025-09-20"), Some(5));
/// assert_eq!(days_between("2025-09-20", "2025-09-15"), Some(-5));
/// assert_eq!(days_between("2025-09-15", ""), None);
/// ```
pub fn days_between(from: &str, to: &str) -> Option<i64> {
    let from = parse_canonical(from)?;
    let to = parse_canonical(to)?;
    Some((to - from).num_days())
}
