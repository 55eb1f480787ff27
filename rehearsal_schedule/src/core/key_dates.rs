//! Milestone dates (general rehearsals, the final performance) and the
//! countdown figures derived from them.
//!
//! Key dates are a small fixed list, independent of the per-venue
//! [`Schedule`](crate::core::domain::Schedule). Unlike events, a key date
//! without a date sorts *last*: it is unscheduled, not early.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::domain::Status;
use crate::time::days_between;

/// Kind of milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyDateKind {
    Rehearsal,
    Performance,
}

/// A milestone entry shown in the key-dates panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDate {
    pub kind: KeyDateKind,
    pub title: String,
    /// Canonical date, `None` while still unscheduled.
    pub date: Option<String>,
    pub status: Status,
}

impl KeyDate {
    pub fn new(kind: KeyDateKind, title: &str, date: Option<&str>, status: Status) -> Self {
        Self {
            kind,
            title: title.to_string(),
            date: date.map(str::to_string),
            status,
        }
    }
}

/// The built-in milestone list.
pub fn default_key_dates() -> Vec<KeyDate> {
    vec![
        KeyDate::new(
            KeyDateKind::Rehearsal,
            "Ensayo General 1",
            Some("2025-09-20"),
            Status::Confirmed,
        ),
        KeyDate::new(
            KeyDateKind::Rehearsal,
            "Ensayo General 2",
            Some("2025-10-18"),
            Status::Confirmed,
        ),
        KeyDate::new(KeyDateKind::Rehearsal, "Ensayo General 3", None, Status::Pending),
        KeyDate::new(
            KeyDateKind::Performance,
            "Obra AlegreMente 2025",
            Some("2025-10-29"),
            Status::Confirmed,
        ),
    ]
}

/// Orders key dates ascending by date, with missing dates last.
pub fn compare_key_dates(a: &KeyDate, b: &KeyDate) -> Ordering {
    match (&a.date, &b.date) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => x.cmp(y),
    }
}

/// Returns a sorted copy of `key_dates` (stable, missing dates last).
///
/// # Examples
///
/// ```
/// use rehearsal_schedule::core::key_dates::{default_key_dates, sort_key_dates};
///
/// let sorted = sort_key_dates(&default_key_dates());
/// assert_eq!(sorted.first().unwrap().date.as_deref(), Some("2025-09-20"));
/// assert!(sorted.last().unwrap().date.is_none());
/// ```
pub fn sort_key_dates(key_dates: &[KeyDate]) -> Vec<KeyDate> {
    let mut sorted = key_dates.to_vec();
    sorted.sort_by(compare_key_dates);
    sorted
}

/// Countdown label for a single key date relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Countdown {
    /// Date is today or later; days left (0 on the day itself).
    DaysRemaining(i64),
    /// Date already passed; days elapsed since.
    DaysAgo(i64),
    /// No usable date yet.
    DatePending,
}

impl Countdown {
    pub fn for_date(date: Option<&str>, today: &str) -> Self {
        let Some(date) = date else {
            return Countdown::DatePending;
        };
        match days_between(today, date) {
            Some(days) if date >= today => Countdown::DaysRemaining(days),
            Some(days) => Countdown::DaysAgo(days.abs()),
            None => Countdown::DatePending,
        }
    }
}

/// Figures shown in the key-dates panel.
#[derive(Debug, Clone, Serialize)]
pub struct KeyDateSummary {
    pub confirmed: usize,
    pub pending: usize,
    pub performance: Option<KeyDate>,
    /// Days until the performance, floored at zero; `None` when it has no date.
    pub days_until_performance: Option<i64>,
    /// Earliest dated key date on or after today.
    pub next_upcoming: Option<KeyDate>,
    /// Sorted key dates paired with their countdown.
    pub entries: Vec<(KeyDate, Countdown)>,
}

impl KeyDateSummary {
    pub fn compute(key_dates: &[KeyDate], today: &str) -> Self {
        let sorted = sort_key_dates(key_dates);

        let confirmed = sorted
            .iter()
            .filter(|k| k.status == Status::Confirmed)
            .count();
        let pending = sorted
            .iter()
            .filter(|k| k.status == Status::Pending)
            .count();

        let performance = key_dates
            .iter()
            .find(|k| k.kind == KeyDateKind::Performance)
            .cloned();
        let days_until_performance = performance
            .as_ref()
            .and_then(|p| p.date.as_deref())
            .and_then(|d| days_between(today, d))
            .map(|days| days.max(0));

        let next_upcoming = sorted
            .iter()
            .find(|k| k.date.as_deref().is_some_and(|d| d >= today))
            .cloned();

        let entries = sorted
            .into_iter()
            .map(|k| {
                let countdown = Countdown::for_date(k.date.as_deref(), today);
                (k, countdown)
            })
            .collect();

        Self {
            confirmed,
            pending,
            performance,
            days_until_performance,
            next_upcoming,
            entries,
        }
    }
}

/// A key date's position on the today-to-performance timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineMark {
    pub title: String,
    pub date: String,
    /// Fraction in `[0, 1]`; 0 is today, 1 is the performance.
    pub position: f64,
}

/// Places every dated key date on the timeline running from today to the
/// performance. Past dates pin to 0 and dates beyond the performance pin to 1.
pub fn timeline_marks(key_dates: &[KeyDate], today: &str) -> Vec<TimelineMark> {
    let span = key_dates
        .iter()
        .find(|k| k.kind == KeyDateKind::Performance)
        .and_then(|p| p.date.as_deref())
        .and_then(|d| days_between(today, d))
        .unwrap_or(1)
        .max(1) as f64;

    key_dates
        .iter()
        .filter_map(|k| {
            let date = k.date.as_deref()?;
            let offset = days_between(today, date)? as f64;
            Some(TimelineMark {
                title: k.title.clone(),
                date: date.to_string(),
                position: (offset / span).clamp(0.0, 1.0),
            })
        })
        .collect()
}
