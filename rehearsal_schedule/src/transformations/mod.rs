//! Read-side transformations over a loaded schedule.
//!
//! Everything here is a pure, synchronous transform over events already held
//! in memory.
//!
//! # Modules
//!
//! - [`filtering`]: Conjunctive criteria and display ordering
//! - [`facets`]: Filter option lists and the per-center color palette
//!
//! # Example
//!
//! ```
//! use rehearsal_schedule::core::domain::Schedule;
//! use rehearsal_schedule::transformations::{filter_events, QueryCriteria};
//!
//! let schedule = Schedule::fallback();
//! let criteria = QueryCriteria::new().with_center("Lucero");
//! let rows = filter_events(schedule.events(), &criteria, "2025-09-01");
//! assert_eq!(rows.len(), 1);
//! ```

pub mod facets;
pub mod filtering;

pub use facets::{areas, centers, CenterPalette, BASE_COLORS};
pub use filtering::{compare_events, filter_events, QueryCriteria};
