//! Owned holder for the current [`Schedule`].
//!
//! The store starts out with [`Schedule::fallback`] and is only ever changed by
//! replacing the whole snapshot. Readers borrow the snapshot; the single writer
//! is whoever holds `&mut ScheduleStore` (in practice, the startup load step).

use std::fmt;

use crate::core::domain::Schedule;

/// Where the schedule currently held by a store came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleOrigin {
    /// The built-in list; no source has loaded yet.
    Fallback,
    /// Loaded from a source, identified by its description.
    Loaded(String),
}

impl fmt::Display for ScheduleOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleOrigin::Fallback => write!(f, "built-in fallback"),
            ScheduleOrigin::Loaded(source) => write!(f, "{}", source),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScheduleStore {
    current: Schedule,
    origin: ScheduleOrigin,
}

impl ScheduleStore {
    /// Creates a store holding the fallback schedule.
    pub fn new() -> Self {
        Self::with_fallback(Schedule::fallback())
    }

    /// Creates a store preloaded with a custom fallback schedule.
    pub fn with_fallback(fallback: Schedule) -> Self {
        Self {
            current: fallback,
            origin: ScheduleOrigin::Fallback,
        }
    }

    /// The current snapshot.
    pub fn schedule(&self) -> &Schedule {
        &self.current
    }

    pub fn origin(&self) -> &ScheduleOrigin {
        &self.origin
    }

    /// Replaces the snapshot wholesale. There is no merge.
    pub fn replace(&mut self, schedule: Schedule, source: impl Into<String>) {
        self.current = schedule;
        self.origin = ScheduleOrigin::Loaded(source.into());
    }
}

impl Default for ScheduleStore {
    fn default() -> Self {
        Self::new()
    }
}
