use std::cmp::Ordering;

use crate::core::domain::{Event, Status};

/// Conjunctive filter over schedule events.
///
/// Every field is optional; an unset or empty value imposes no constraint.
/// Dates are canonical `YYYY-MM-DD` strings and are compared as plain strings,
/// so an event with no date sorts before any real date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryCriteria {
    pub center: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub status: Option<Status>,
    pub area: Option<String>,
    pub only_upcoming: bool,
}

impl QueryCriteria {
    /// No constraints at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default table view: only events dated today or later.
    pub fn upcoming() -> Self {
        Self {
            only_upcoming: true,
            ..Self::default()
        }
    }

    /// Upcoming events on a single day, as applied by a calendar click.
    pub fn for_day(date: impl Into<String>) -> Self {
        let date = date.into();
        Self::upcoming().between(date.clone(), date)
    }

    pub fn with_center(mut self, center: impl Into<String>) -> Self {
        self.center = Some(center.into());
        self
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Inclusive date window.
    pub fn between(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.date_from = Some(from.into());
        self.date_to = Some(to.into());
        self
    }

    pub fn only_upcoming(mut self, only_upcoming: bool) -> Self {
        self.only_upcoming = only_upcoming;
        self
    }

    /// Returns `true` if `event` satisfies every set criterion.
    ///
    /// # Arguments
    /// * `event` - Event to test
    /// * `today` - Reference date for `only_upcoming`, canonical form
    pub fn matches(&self, event: &Event, today: &str) -> bool {
        if self.only_upcoming && event.date.as_str() < today {
            return false;
        }
        if let Some(center) = non_empty(&self.center) {
            if event.center != center {
                return false;
            }
        }
        if let Some(status) = self.status.as_ref().filter(|s| !s.is_empty()) {
            if &event.status != status {
                return false;
            }
        }
        if let Some(area) = non_empty(&self.area) {
            if event.area != area {
                return false;
            }
        }
        if let Some(from) = non_empty(&self.date_from) {
            if event.date.as_str() < from {
                return false;
            }
        }
        if let Some(to) = non_empty(&self.date_to) {
            if event.date.as_str() > to {
                return false;
            }
        }
        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Display order: ascending date, then ascending center. Empty values first.
pub fn compare_events(a: &Event, b: &Event) -> Ordering {
    a.date
        .cmp(&b.date)
        .then_with(|| a.center.cmp(&b.center))
}

/// Filter events by criteria and return them in display order.
///
/// Pure transform: the input is left untouched and a new vector is returned.
///
/// # Arguments
/// * `events` - Current schedule contents
/// * `criteria` - Conjunctive filter
/// * `today` - Reference date (`YYYY-MM-DD`) for upcoming comparisons
///
/// # Example
///
/// ```
/// use rehearsal_schedule::core::domain::Schedule;
/// use rehearsal_schedule::transformations::filtering::{filter_events, QueryCriteria};
///
/// let schedule = Schedule::fallback();
/// let rows = filter_events(schedule.events(), &QueryCriteria::upcoming(), "2025-09-11");
/// let centers: Vec<_> = rows.iter().map(|e| e.center.as_str()).collect();
/// assert_eq!(centers, vec!["Lucero", "Jerusalén"]);
/// ```
pub fn filter_events(events: &[Event], criteria: &QueryCriteria, today: &str) -> Vec<Event> {
    let mut rows: Vec<Event> = events
        .iter()
        .filter(|event| criteria.matches(event, today))
        .cloned()
        .collect();
    rows.sort_by(compare_events);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::Schedule;

    fn event(center: &str, date: &str, area: &str, status: Status) -> Event {
        Event {
            center: center.to_string(),
            date: date.to_string(),
            area: area.to_string(),
            status,
            ..Event::default()
        }
    }

    fn sample() -> Vec<Event> {
        vec![
            event("Lucero", "2025-09-20", "Danza", Status::Pending),
            event("Arroyo", "2025-09-10", "Música", Status::Scheduled),
            event("Lucero", "2025-09-12", "Música", Status::Confirmed),
            event("Arroyo", "", "Danza", Status::Pending),
            event("Lucero", "2025-09-18", "Danza", Status::Confirmed),
            event("Jerusalén", "2025-09-20", "Teatro", Status::Confirmed),
        ]
    }

    fn dates(rows: &[Event]) -> Vec<&str> {
        rows.iter().map(|e| e.date.as_str()).collect()
    }

    #[test]
    fn test_only_upcoming_uses_reference_date() {
        let rows = filter_events(&sample(), &QueryCriteria::upcoming(), "2025-09-15");

        assert_eq!(dates(&rows), vec!["2025-09-18", "2025-09-20", "2025-09-20"]);
        assert!(rows.iter().all(|e| !e.date.is_empty()));
    }

    #[test]
    fn test_conjunctive_center_and_area() {
        let criteria = QueryCriteria::new().with_center("Lucero").with_area("Danza");
        let rows = filter_events(&sample(), &criteria, "2025-09-15");

        assert_eq!(dates(&rows), vec!["2025-09-18", "2025-09-20"]);
        assert!(rows.iter().all(|e| e.center == "Lucero" && e.area == "Danza"));
    }

    #[test]
    fn test_empty_criteria_impose_nothing() {
        let criteria = QueryCriteria {
            center: Some(String::new()),
            area: Some(String::new()),
            status: Some(Status::default()),
            ..QueryCriteria::default()
        };
        let rows = filter_events(&sample(), &criteria, "2025-09-15");
        assert_eq!(rows.len(), 6);
    }

    #[test]
    fn test_sort_empty_date_first_then_center() {
        let rows = filter_events(&sample(), &QueryCriteria::new(), "2025-09-15");

        assert_eq!(rows[0].date, "");
        let last_two: Vec<_> = rows[4..].iter().map(|e| e.center.as_str()).collect();
        assert_eq!(last_two, vec!["Jerusalén", "Lucero"]);
    }

    #[test]
    fn test_date_window_is_inclusive() {
        let criteria = QueryCriteria::new().between("2025-09-12", "2025-09-18");
        let rows = filter_events(&sample(), &criteria, "2025-09-01");
        assert_eq!(dates(&rows), vec!["2025-09-12", "2025-09-18"]);
    }

    #[test]
    fn test_status_filter() {
        let criteria = QueryCriteria::upcoming().with_status(Status::Confirmed);
        let rows = filter_events(&sample(), &criteria, "2025-09-15");
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|e| e.status == Status::Confirmed));
    }

    #[test]
    fn test_for_day_selects_single_date() {
        let rows = filter_events(&sample(), &QueryCriteria::for_day("2025-09-20"), "2025-09-15");
        assert_eq!(rows.len(), 2);

        // A past day is hidden by the upcoming restriction.
        let past = filter_events(&sample(), &QueryCriteria::for_day("2025-09-12"), "2025-09-15");
        assert!(past.is_empty());
    }

    #[test]
    fn test_input_is_not_modified() {
        let schedule = Schedule::fallback();
        let before = schedule.clone();
        let _ = filter_events(schedule.events(), &QueryCriteria::upcoming(), "2030-01-01");
        assert_eq!(schedule, before);
    }
}
