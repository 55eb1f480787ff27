//! Rehearsal schedule ingestion and normalization.
//!
//! Schedules arrive from a structured JSON document or from a published
//! tab-separated sheet, with loosely named columns and free-form values. This
//! crate adapts both into one canonical [`Event`](core::Event) shape, keeps
//! the current [`Schedule`](core::Schedule) in an owned store seeded with a
//! built-in fallback, and answers the read-side queries a schedule view needs.
//!
//! # Modules
//!
//! - [`core`]: Events, schedules, key dates and the schedule store
//! - [`parsing`]: Header matching, field normalizers and the two row adapters
//! - [`io`]: Sources and the JSON → TSV fallback loader
//! - [`transformations`]: Filtering, ordering, facets and center colors
//! - [`calendar`]: Month grid model
//! - [`time`]: Reference date resolution
//! - [`config`]: TOML configuration
//! - [`error`]: Load and configuration errors
//!
//! # Example
//!
//! ```
//! use rehearsal_schedule::core::ScheduleStore;
//! use rehearsal_schedule::transformations::{filter_events, QueryCriteria};
//!
//! let store = ScheduleStore::new();
//! let rows = filter_events(store.schedule().events(), &QueryCriteria::upcoming(), "2025-09-12");
//! assert_eq!(rows.len(), 2);
//! ```

pub mod calendar;
pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod parsing;
pub mod time;
pub mod transformations;

pub use config::ScheduleConfig;
pub use error::{ConfigError, LoadError, LoadResult};
