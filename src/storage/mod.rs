//! Storage layer: the local match cache.
//!
//! A thin abstraction over SQLite, organized the same way regardless of
//! caller:
//! - `models`: data structures
//! - `schema`: connection and schema management
//! - `queries`: upserts and filtered reads

pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

pub use models::{MatchFilter, MatchRecord};
pub use schema::MatchDatabase;
