//! Core domain models for the rehearsal schedule.
//!
//! This module defines the data structures shared by every other layer:
//! normalized events and schedules, milestone key dates, and the owned store
//! that holds the current schedule snapshot.

pub mod domain;
pub mod key_dates;
pub mod store;

pub use domain::{Event, Schedule, Status};
pub use key_dates::{KeyDate, KeyDateKind, KeyDateSummary};
pub use store::{ScheduleOrigin, ScheduleStore};
