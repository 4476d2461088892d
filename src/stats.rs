//! Process-wide run counters
//!
//! Counters only ever grow. They are shared between the API client (which
//! records fetch failures) and the orchestrator (which records runs, payload
//! bytes, and aborted runs).

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counters for orchestration runs
#[derive(Debug, Default)]
pub struct RunCounters {
    runs: AtomicU64,
    bytes: AtomicU64,
    errors: AtomicU64,
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterSnapshot {
    /// Number of runs started
    pub runs: u64,
    /// Cumulative serialized size of fetched payloads in bytes
    pub bytes: u64,
    /// Number of errors observed
    pub errors: u64,
}

impl RunCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the start of a run, returning its 1-based sequence number
    pub fn record_run(&self) -> u64 {
        self.runs.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn record_bytes(&self, bytes: u64) {
        self.bytes.fetch_add(bytes, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            runs: self.runs.load(Ordering::Relaxed),
            bytes: self.bytes.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}
