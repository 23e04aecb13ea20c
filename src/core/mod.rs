//! Cross-cutting utilities.
//!
//! - `cache`: process-wide LRU memoization of storage queries

pub mod cache;

pub use cache::{CacheManager, MemoryCache, GLOBAL_CACHE};
