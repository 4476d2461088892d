//! Sequential fetch-and-display runs
//!
//! A run fetches a character, the first page of starships and planets, the
//! film list, and (while the cursor is within bounds) a vehicle, strictly one
//! after another. Each successful fetch is measured and displayed before the
//! next one starts. The first failure aborts the rest of the run.
//!
//! Runs are serialized: the cursor lives behind an async mutex that a run holds
//! from start to finish, so two runs triggered at once never interleave.

use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::data::{FetchError, SwapiClient};
use crate::display::{self, DisplaySink, Section};
use crate::stats::{CounterSnapshot, RunCounters};

/// Fixed first page of starships
pub const STARSHIPS_PATH: &str = "starships/?page=1";

/// Fixed first page of planets
pub const PLANETS_PATH: &str = "planets/?page=1";

/// Complete film list
pub const FILMS_PATH: &str = "films/";

/// Cursor value the first run uses
pub const INITIAL_CURSOR: u32 = 1;

/// Highest cursor value a vehicle is fetched for
pub const VEHICLE_CURSOR_LIMIT: u32 = 4;

/// A fetch that aborted a run
#[derive(Debug, Error)]
#[error("{section} step failed for '{path}': {source}")]
pub struct StepError {
    pub section: Section,
    pub path: String,
    #[source]
    pub source: FetchError,
}

/// Drives runs against a client and shows results on a sink
pub struct Orchestrator {
    client: SwapiClient,
    counters: Arc<RunCounters>,
    sink: Arc<dyn DisplaySink>,
    debug: bool,
    /// Character/vehicle cursor; held for the whole run
    cursor: Mutex<u32>,
}

impl Orchestrator {
    /// Creates an orchestrator starting at `INITIAL_CURSOR`
    ///
    /// `counters` should be the same counters the client records errors on.
    pub fn new(
        client: SwapiClient,
        counters: Arc<RunCounters>,
        sink: Arc<dyn DisplaySink>,
        debug: bool,
    ) -> Self {
        Self {
            client,
            counters,
            sink,
            debug,
            cursor: Mutex::new(INITIAL_CURSOR),
        }
    }

    /// Starts the cursor somewhere other than `INITIAL_CURSOR`
    pub fn with_cursor(mut self, cursor: u32) -> Self {
        self.cursor = Mutex::new(cursor);
        self
    }

    pub fn client(&self) -> &SwapiClient {
        &self.client
    }

    pub fn counters(&self) -> CounterSnapshot {
        self.counters.snapshot()
    }

    /// Current cursor value; waits for an in-progress run to finish
    pub async fn cursor(&self) -> u32 {
        *self.cursor.lock().await
    }

    /// Performs one run
    ///
    /// Never fails: an aborted run is logged and counted as an error on top of
    /// the error the client already recorded for the failed fetch.
    pub async fn run(&self) {
        let mut cursor = self.cursor.lock().await;
        let run = self.counters.record_run();
        info!(run, cursor = *cursor, "Run started");

        match self.run_steps(&mut cursor).await {
            Ok(()) => {
                info!(run, "Run complete");
                if self.debug {
                    self.log_summary();
                }
            }
            Err(e) => {
                self.counters.record_error();
                error!(run, section = %e.section, path = %e.path, "Run aborted: {}", e.source);
            }
        }
    }

    async fn run_steps(&self, cursor: &mut u32) -> Result<(), StepError> {
        self.step(Section::Character, &format!("people/{}", cursor)).await?;
        self.step(Section::Starships, STARSHIPS_PATH).await?;
        self.step(Section::Planets, PLANETS_PATH).await?;
        self.step(Section::Films, FILMS_PATH).await?;

        if *cursor <= VEHICLE_CURSOR_LIMIT {
            self.step(Section::Vehicle, &format!("vehicles/{}", cursor)).await?;
            *cursor += 1;
        } else {
            debug!(cursor = *cursor, "Cursor past vehicle limit, skipping vehicle");
        }

        Ok(())
    }

    /// Fetches one resource, records its size, and displays it
    async fn step(&self, section: Section, path: &str) -> Result<(), StepError> {
        let payload = self.client.fetch(path).await.map_err(|source| StepError {
            section,
            path: path.to_string(),
            source,
        })?;

        self.counters.record_bytes(serialized_len(&payload));

        match display::render(section, &payload) {
            Ok(lines) => self.sink.show(section, &lines),
            Err(e) => warn!(%section, path, "Unexpected payload shape: {}", e),
        }

        Ok(())
    }

    fn log_summary(&self) {
        let snapshot = self.counters.snapshot();
        info!(
            runs = snapshot.runs,
            cache_entries = self.client.cache().len(),
            bytes = snapshot.bytes,
            errors = snapshot.errors,
            "Run summary"
        );
    }
}

/// Length of the compact JSON serialization of `value`
fn serialized_len(value: &Value) -> u64 {
    // Serializing a `Value` to a string cannot fail.
    serde_json::to_string(value).map_or(0, |s| s.len() as u64)
}
