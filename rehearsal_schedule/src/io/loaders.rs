use log::{debug, info, warn};

use crate::core::domain::{Event, Schedule};
use crate::core::store::ScheduleStore;
use crate::error::{LoadError, LoadResult};
use crate::io::sources::ScheduleSource;
use crate::parsing::{json_parser, tsv_parser};

/// Represents the format of a schedule source body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleSourceType {
    /// Structured document: a list of row objects, bare or under `data`.
    Json,
    /// Tab-separated export with a header row.
    Tsv,
}

impl ScheduleSourceType {
    /// Parse a fetched body in this format.
    pub fn parse(self, body: &str) -> LoadResult<Vec<Event>> {
        match self {
            ScheduleSourceType::Json => json_parser::parse_events_json_str(body),
            ScheduleSourceType::Tsv => tsv_parser::parse_events_tsv(body),
        }
    }
}

/// Result of a successful source attempt
#[derive(Debug)]
pub struct ScheduleLoadResult {
    pub schedule: Schedule,
    pub source_type: ScheduleSourceType,
    pub source: String,
    pub num_events: usize,
}

impl ScheduleLoadResult {
    pub fn new(schedule: Schedule, source_type: ScheduleSourceType, source: String) -> Self {
        let num_events = schedule.len();
        Self {
            schedule,
            source_type,
            source,
            num_events,
        }
    }
}

/// A source attempt that was skipped, kept for diagnostics
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFailure {
    pub source: String,
    pub source_type: ScheduleSourceType,
    pub error: LoadError,
}

/// Everything a load pass produced: at most one winning schedule plus the
/// failures of the sources tried before it.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub loaded: Option<ScheduleLoadResult>,
    pub failures: Vec<SourceFailure>,
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// Hand the winning schedule to `store`, replacing its snapshot.
    ///
    /// When nothing loaded the store keeps what it had (normally the fallback
    /// list). Returns whether the store changed.
    pub fn apply_to(self, store: &mut ScheduleStore) -> bool {
        match self.loaded {
            Some(result) => {
                store.replace(result.schedule, result.source);
                true
            }
            None => false,
        }
    }
}

struct SourceAttempt {
    source_type: ScheduleSourceType,
    source: Box<dyn ScheduleSource>,
}

/// Ordered fallback chain over schedule sources.
///
/// Sources are tried strictly in order, one attempt each. The first one that
/// fetches, parses and yields at least one non-blank event wins; every other
/// outcome is recorded as a [`SourceFailure`] and the chain moves on.
///
/// # Example
///
/// ```
/// use rehearsal_schedule::core::store::ScheduleStore;
/// use rehearsal_schedule::error::LoadError;
/// use rehearsal_schedule::io::{ScheduleLoader, ScheduleSourceType, StaticSource};
///
/// # tokio_test_block(async {
/// let loader = ScheduleLoader::new()
///     .with_source(
///         ScheduleSourceType::Json,
///         StaticSource::failing("data.json", LoadError::Transport("404".into())),
///     )
///     .with_source(
///         ScheduleSourceType::Tsv,
///         StaticSource::new("sheet", "Centro\tFecha\nLucero\t12/09/2025\n"),
///     );
///
/// let mut store = ScheduleStore::new();
/// let failures = loader.load_into(&mut store).await;
/// assert_eq!(failures.len(), 1);
/// assert_eq!(store.schedule().events()[0].center, "Lucero");
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
#[derive(Default)]
pub struct ScheduleLoader {
    attempts: Vec<SourceAttempt>,
}

impl ScheduleLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source to the end of the chain.
    pub fn with_source(
        self,
        source_type: ScheduleSourceType,
        source: impl ScheduleSource + 'static,
    ) -> Self {
        self.with_boxed_source(source_type, Box::new(source))
    }

    /// Append an already boxed source to the end of the chain.
    pub fn with_boxed_source(
        mut self,
        source_type: ScheduleSourceType,
        source: Box<dyn ScheduleSource>,
    ) -> Self {
        self.attempts.push(SourceAttempt {
            source_type,
            source,
        });
        self
    }

    /// Number of sources in the chain.
    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    /// Fetch and adapt a single source.
    ///
    /// # Returns
    /// * `Ok(ScheduleLoadResult)` - at least one event survived adaptation
    /// * `Err(LoadError::Transport)` - the fetch failed
    /// * `Err(LoadError::Format)` - the body has the wrong shape
    /// * `Err(LoadError::EmptyResult)` - nothing usable in the body
    pub async fn load_source(
        source_type: ScheduleSourceType,
        source: &dyn ScheduleSource,
    ) -> LoadResult<ScheduleLoadResult> {
        let body = source.fetch().await?;
        debug!("Fetched {} bytes from {}", body.len(), source.describe());

        let events = source_type.parse(&body)?;
        if events.is_empty() {
            return Err(LoadError::EmptyResult(
                "no rows left after discarding blank rows".to_string(),
            ));
        }

        Ok(ScheduleLoadResult::new(
            Schedule::new(events),
            source_type,
            source.describe(),
        ))
    }

    /// Run the chain, stopping at the first source that yields events.
    ///
    /// Never fails: if every source fails the outcome carries no schedule and
    /// the caller keeps the one it already has.
    pub async fn load(&self) -> LoadOutcome {
        let mut outcome = LoadOutcome::default();

        for attempt in &self.attempts {
            let description = attempt.source.describe();
            info!(
                "Loading schedule from {} ({:?})",
                description, attempt.source_type
            );

            match Self::load_source(attempt.source_type, attempt.source.as_ref()).await {
                Ok(result) => {
                    info!(
                        "Loaded {} events from {}",
                        result.num_events, result.source
                    );
                    outcome.loaded = Some(result);
                    break;
                }
                Err(error) => {
                    warn!(
                        "Schedule source {} skipped ({}): {}",
                        description,
                        error.kind(),
                        error
                    );
                    outcome.failures.push(SourceFailure {
                        source: description,
                        source_type: attempt.source_type,
                        error,
                    });
                }
            }
        }

        if !outcome.is_loaded() {
            warn!(
                "No schedule source produced events ({} tried); keeping the current schedule",
                self.attempts.len()
            );
        }

        outcome
    }

    /// Run the chain and apply the result to `store`.
    ///
    /// Returns the failures collected along the way.
    pub async fn load_into(&self, store: &mut ScheduleStore) -> Vec<SourceFailure> {
        let mut outcome = self.load().await;
        let failures = std::mem::take(&mut outcome.failures);
        outcome.apply_to(store);
        failures
    }
}
