//! Domain models for the rehearsal schedule.
//!
//! This module provides the core data structures that represent a normalized
//! schedule: individual [`Event`] entries, their canonical [`Status`], and the
//! ordered [`Schedule`] collection handed to queries and presentation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Canonical status of a scheduled event.
///
/// Raw source values are mapped onto the three recognized states by
/// [`normalize_status`](crate::parsing::normalize::normalize_status). Anything
/// unrecognized is kept verbatim (lower-cased) in [`Status::Other`], and an
/// empty status is `Other("")`.
///
/// # Examples
///
/// ```
/// use rehearsal_schedule::core::domain::Status;
///
/// assert_eq!(Status::Confirmed.as_str(), "confirmed");
/// assert_eq!(Status::Other("cancelado".into()).as_str(), "cancelado");
/// assert!(Status::default().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    Confirmed,
    Pending,
    Scheduled,
    Other(String),
}

impl Status {
    /// Returns the canonical string form of this status.
    pub fn as_str(&self) -> &str {
        match self {
            Status::Confirmed => "confirmed",
            Status::Pending => "pending",
            Status::Scheduled => "scheduled",
            Status::Other(raw) => raw.as_str(),
        }
    }

    /// Returns `true` when no status was provided by the source.
    pub fn is_empty(&self) -> bool {
        matches!(self, Status::Other(raw) if raw.is_empty())
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Other(String::new())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(crate::parsing::normalize::normalize_status(&raw))
    }
}

/// A single normalized schedule entry.
///
/// # Fields
///
/// * `center` - Venue or group running the session (may be empty)
/// * `date` - Canonical `YYYY-MM-DD` date, or empty when the date is pending
/// * `time_range` - Free-text time, typically `HH:MM–HH:MM` (may be empty)
/// * `responsible` - Person in charge (may be empty)
/// * `status` - Canonical status
/// * `shift` - Morning/afternoon token (may be empty)
/// * `area` - Category label such as music or dance (may be empty)
/// * `attendees` - Trimmed, non-empty attendee names in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub center: String,
    pub date: String,
    pub time_range: String,
    pub responsible: String,
    pub status: Status,
    pub shift: String,
    pub area: String,
    pub attendees: Vec<String>,
}

impl Event {
    /// Returns `true` if this row carries no center, date or time.
    ///
    /// Such rows are artifacts of blank lines in the source and never enter a
    /// [`Schedule`], regardless of what the remaining fields hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use rehearsal_schedule::core::domain::Event;
    ///
    /// let mut event = Event::default();
    /// event.responsible = "Erika López".to_string();
    /// assert!(event.is_blank());
    ///
    /// event.center = "Arroyo".to_string();
    /// assert!(!event.is_blank());
    /// ```
    pub fn is_blank(&self) -> bool {
        self.center.is_empty() && self.date.is_empty() && self.time_range.is_empty()
    }

    /// Returns `true` when the event has no date yet.
    pub fn is_date_pending(&self) -> bool {
        self.date.is_empty()
    }
}

/// Ordered collection of events, replaced wholesale on every successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    events: Vec<Event>,
}

impl Schedule {
    /// Builds a schedule from adapted events, preserving their order.
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// The hardcoded schedule used until a source loads successfully.
    pub fn fallback() -> Self {
        #[allow(clippy::too_many_arguments)]
        fn event(
            center: &str,
            date: &str,
            time_range: &str,
            responsible: &str,
            attendees: &[&str],
            status: Status,
            shift: &str,
            area: &str,
        ) -> Event {
            Event {
                center: center.to_string(),
                date: date.to_string(),
                time_range: time_range.to_string(),
                responsible: responsible.to_string(),
                status,
                shift: shift.to_string(),
                area: area.to_string(),
                attendees: attendees.iter().map(|s| s.to_string()).collect(),
            }
        }

        Self::new(vec![
            event(
                "Arroyo",
                "2025-09-10",
                "14:00–16:00",
                "Erika López",
                &["Juan P.", "María L.", "Sofía R.", "Nicolás G."],
                Status::Scheduled,
                "Tarde",
                "Música",
            ),
            event(
                "Lucero",
                "2025-09-12",
                "09:00–10:30",
                "S. Gutiérrez",
                &["Laura C.", "Mateo Q."],
                Status::Pending,
                "Mañana",
                "Danza",
            ),
            event(
                "Jerusalén",
                "2025-09-13",
                "10:00–12:00",
                "T. Sarmiento",
                &["Samuel D.", "Valentina H.", "Kevin T."],
                Status::Confirmed,
                "Mañana",
                "Teatro",
            ),
        ])
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }
}

impl From<Vec<Event>> for Schedule {
    fn from(events: Vec<Event>) -> Self {
        Self::new(events)
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_schedule_contents() {
        let schedule = Schedule::fallback();
        assert_eq!(schedule.len(), 3);

        let centers: Vec<&str> = schedule.iter().map(|e| e.center.as_str()).collect();
        assert_eq!(centers, vec!["Arroyo", "Lucero", "Jerusalén"]);
        assert_eq!(schedule.events()[1].status, Status::Pending);
        assert_eq!(schedule.events()[0].attendees.len(), 4);
    }

    #[test]
    fn test_status_serializes_as_canonical_string() {
        let json = serde_json::to_string(&Status::Scheduled).unwrap();
        assert_eq!(json, "\"scheduled\"");

        let parsed: Status = serde_json::from_str("\"Confirmado\"").unwrap();
        assert_eq!(parsed, Status::Confirmed);
    }

    #[test]
    fn test_event_roundtrips_through_json() {
        let event = Schedule::fallback().events()[2].clone();
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["status"], "confirmed");
        assert_eq!(json["time_range"], "10:00–12:00");

        let back: Event = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_blank_row_detection_ignores_other_fields() {
        let event = Event {
            responsible: "Docente".into(),
            area: "Danza".into(),
            attendees: vec!["Ana".into()],
            ..Default::default()
        };
        assert!(event.is_blank());

        let dated = Event {
            date: "2025-09-10".into(),
            ..Default::default()
        };
        assert!(!dated.is_blank());
        assert!(!dated.is_date_pending());
    }
}
