//! Cache manager for parsed API responses
//!
//! Provides a `CacheManager` that maps resource paths to shared JSON values.
//! Clones share the same underlying map.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared, unbounded map from resource path to parsed response
#[derive(Debug, Clone, Default)]
pub struct CacheManager {
    entries: Arc<Mutex<HashMap<String, Arc<Value>>>>,
}

impl CacheManager {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<Value>>> {
        // A poisoned map still holds complete entries; keep serving them.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Reads the cached value for a resource path
    ///
    /// Returns the same shared instance that was written, so repeated reads of
    /// one path are pointer-equal.
    pub fn read(&self, path: &str) -> Option<Arc<Value>> {
        self.lock().get(path).cloned()
    }

    /// Stores a value under a resource path and returns the shared handle
    ///
    /// If the path is already present the existing entry wins and is returned,
    /// so a cached value is never replaced.
    pub fn write(&self, path: &str, value: Value) -> Arc<Value> {
        self.lock()
            .entry(path.to_string())
            .or_insert_with(|| Arc::new(value))
            .clone()
    }

    /// Number of cached resource paths
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
