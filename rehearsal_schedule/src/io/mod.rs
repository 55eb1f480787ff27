//! Schedule acquisition.
//!
//! Sources produce raw bodies; the loader pairs each source with a format and
//! runs them as an ordered fallback chain, handing the first non-empty result
//! to a [`ScheduleStore`](crate::core::store::ScheduleStore).
//!
//! # Modules
//!
//! - [`sources`]: The [`ScheduleSource`] trait plus file, HTTP and in-memory sources
//! - [`loaders`]: The [`ScheduleLoader`] fallback chain
//!
//! # Example
//!
//! ```no_run
//! use rehearsal_schedule::core::store::ScheduleStore;
//! use rehearsal_schedule::io::{FileSource, ScheduleLoader, ScheduleSourceType};
//!
//! # async fn run() {
//! let loader = ScheduleLoader::new()
//!     .with_source(ScheduleSourceType::Json, FileSource::new("data.json"))
//!     .with_source(ScheduleSourceType::Tsv, FileSource::new("schedule.tsv"));
//!
//! let mut store = ScheduleStore::new();
//! let failures = loader.load_into(&mut store).await;
//! println!("{} sources skipped, showing {}", failures.len(), store.origin());
//! # }
//! ```

pub mod loaders;
pub mod sources;


pub use loaders::{
    LoadOutcome, ScheduleLoadResult, ScheduleLoader, ScheduleSourceType, SourceFailure,
};
#[cfg(feature = "http")]
pub use sources::HttpSource;
pub use sources::{source_for_location, FileSource, ScheduleSource, StaticSource};
