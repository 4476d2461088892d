//! In-memory response cache
//!
//! Stores parsed API responses keyed by resource path for the lifetime of the
//! process. Entries are never evicted or invalidated; the set of resource paths
//! the demo touches is small and fixed.

mod manager;

pub use manager::CacheManager;
