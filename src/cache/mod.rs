//! Local cache for API responses
//!
//! GET responses are kept for a short TTL in a session-scoped store and dropped
//! by tag after mutations. Designed to cut repeat requests while browsing.

pub mod storage;
pub mod ttl;

// Re-export main types
pub use storage::{CacheBackend, CacheEntry, CacheMap, MemoryBackend, StoreBackend};
pub use ttl::{CacheStats, ClearStats, DEFAULT_TTL, TtlCache};
