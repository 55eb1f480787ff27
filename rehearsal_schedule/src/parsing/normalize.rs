//! Field normalizers shared by both record adapters.
//!
//! These are pure functions turning raw source text into the canonical forms
//! stored on [`Event`](crate::core::domain::Event). None of them fail: input
//! they cannot interpret is passed through (trimmed) for display code to flag.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::domain::Status;

/// Separator placed between the start and end of a time range.
pub const RANGE_SEPARATOR: &str = "–";

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid ISO date regex"));

static THREE_PART_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})[/\-]([0-9]{1,2})[/\-]([0-9]{2}|[0-9]{4})$")
        .expect("Invalid three-part date regex")
});

const CONFIRMED_STEMS: &[&str] = &["confirmad", "confirmed"];
const PENDING_STEMS: &[&str] = &["pendient", "pending"];
const SCHEDULED_STEMS: &[&str] = &["programad", "agendad", "scheduled"];

/// Normalizes a raw date into canonical `YYYY-MM-DD` form.
///
/// Accepts ISO dates unchanged and three-part dates separated by `/` or `-`
/// (`DD/MM/YYYY`, `MM/DD/YYYY`, two-digit years). The day/month order is
/// resolved by whichever component exceeds 12; when both are 12 or less the
/// date is read day-first. Two-digit years below 50 are 20xx, the rest 19xx.
///
/// The result is not checked against the calendar: `31/02/2025` becomes
/// `2025-02-31`. Unrecognized input is returned trimmed.
///
/// # Examples
///
/// ```
/// use rehearsal_schedule::parsing::normalize::normalize_date;
///
/// assert_eq!(normalize_date("13/05/2025"), "2025-05-13");
/// assert_eq!(normalize_date("05/13/2025"), "2025-05-13");
/// assert_eq!(normalize_date("05/03/2025"), "2025-03-05");
/// assert_eq!(normalize_date("1-2-49"), "2049-02-01");
/// assert_eq!(normalize_date("2025-09-20"), "2025-09-20");
/// assert_eq!(normalize_date(" next week "), "next week");
/// ```
pub fn normalize_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || ISO_DATE.is_match(trimmed) {
        return trimmed.to_string();
    }

    let Some(caps) = THREE_PART_DATE.captures(trimmed) else {
        return trimmed.to_string();
    };

    // The pattern guarantees short ASCII digit runs, so these parses cannot fail.
    let a: u32 = caps[1].parse().unwrap_or_default();
    let b: u32 = caps[2].parse().unwrap_or_default();
    let year_text = &caps[3];
    let mut year: u32 = year_text.parse().unwrap_or_default();
    if year_text.len() == 2 {
        year += if year < 50 { 2000 } else { 1900 };
    }

    let (day, month) = if a > 12 && b <= 12 {
        (a, b)
    } else if b > 12 && a <= 12 {
        (b, a)
    } else {
        // Ambiguous: day-first.
        (a, b)
    };

    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Maps a raw status onto its canonical value.
///
/// Matching is a case-insensitive substring test against Spanish and English
/// stems, checked in the order confirmed, pending, scheduled. Anything else
/// is returned lower-cased as [`Status::Other`].
///
/// # Examples
///
/// ```
/// use rehearsal_schedule::core::domain::Status;
/// use rehearsal_schedule::parsing::normalize::normalize_status;
///
/// assert_eq!(normalize_status("Confirmado"), Status::Confirmed);
/// assert_eq!(normalize_status("PENDIENTE de sala"), Status::Pending);
/// assert_eq!(normalize_status("agendada"), Status::Scheduled);
/// assert_eq!(normalize_status("Cancelado"), Status::Other("cancelado".into()));
/// ```
pub fn normalize_status(raw: &str) -> Status {
    let value = raw.to_lowercase();
    let contains_any = |stems: &[&str]| stems.iter().any(|stem| value.contains(stem));

    if contains_any(CONFIRMED_STEMS) {
        Status::Confirmed
    } else if contains_any(PENDING_STEMS) {
        Status::Pending
    } else if contains_any(SCHEDULED_STEMS) {
        Status::Scheduled
    } else {
        Status::Other(value)
    }
}

/// Builds the event's time text from either a single time field or a
/// start/end pair.
///
/// A non-empty `single` wins; its first `--` and then its first remaining
/// `-` become [`RANGE_SEPARATOR`]. Otherwise `start` and `end` are joined,
/// or whichever one is present is returned alone.
///
/// # Examples
///
/// ```
/// use rehearsal_schedule::parsing::normalize::join_time_range;
///
/// assert_eq!(join_time_range("14:00-16:00", "", ""), "14:00–16:00");
/// assert_eq!(join_time_range("", " 9:00 ", "10:30"), "9:00–10:30");
/// assert_eq!(join_time_range("", "", "18:00"), "18:00");
/// assert_eq!(join_time_range(" ", "", ""), "");
/// ```
pub fn join_time_range(single: &str, start: &str, end: &str) -> String {
    let single = single.trim();
    if !single.is_empty() {
        return single
            .replacen("--", RANGE_SEPARATOR, 1)
            .replacen('-', RANGE_SEPARATOR, 1);
    }

    match (start.trim(), end.trim()) {
        ("", "") => String::new(),
        (start, "") => start.to_string(),
        ("", end) => end.to_string(),
        (start, end) => format!("{}{}{}", start, RANGE_SEPARATOR, end),
    }
}

/// Splits a delimited attendee string on `,` or `;`.
///
/// Pieces are trimmed, empty pieces dropped, order and duplicates kept.
///
/// # Examples
///
/// ```
/// use rehearsal_schedule::parsing::normalize::split_attendees;
///
/// assert_eq!(
///     split_attendees("Juan P., María L.; Sofía R."),
///     vec!["Juan P.", "María L.", "Sofía R."]
/// );
/// ```
pub fn split_attendees(raw: &str) -> Vec<String> {
    clean_attendees(raw.split([',', ';']))
}

/// Normalizes an attendee list that already arrives as separate items.
pub fn clean_attendees<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| item.as_ref().trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_with_whitespace_is_trimmed() {
        assert_eq!(normalize_date("  2025-09-20\t"), "2025-09-20");
        assert_eq!(normalize_date(""), "");
        assert_eq!(normalize_date("   "), "");
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(normalize_date("20-09/2025"), "2025-09-20");
    }

    #[test]
    fn test_time_range_double_hyphen() {
        assert_eq!(join_time_range("14:00--16:00", "", ""), "14:00–16:00");
    }

    #[test]
    fn test_clean_attendees_from_list() {
        let items = vec![" Ana ", "", "Luis", "Ana"];
        assert_eq!(clean_attendees(items), vec!["Ana", "Luis", "Ana"]);
    }
}
