//! Football home-field advantage pipeline
//!
//! Fetches finished match results from two third-party football data APIs,
//! caches them in a local SQLite store, and computes period-comparison
//! statistics (Pre-COVID, During-COVID, Post-COVID) for home-field-advantage
//! analysis.
//!
//! ## Pipeline
//!
//! Commands check the cache first; on a miss they call the providers
//! (football-data.org, falling back to api-football), upsert the results
//! keyed by match id, and aggregate on demand:
//!
//! - **Cache Store** ([`storage`]): SQLite table keyed by match id with
//!   idempotent upserts and filtered range queries.
//! - **API Client** ([`providers`]): two typed provider parsers mapped into
//!   one record shape, with retry/backoff and provider fallback.
//! - **Data Processor** ([`processor`]): period classification by fixed
//!   cutoff dates and descriptive aggregation (win rates, goal differential,
//!   attendance correlation).
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FOOTBALL_DATA_API_KEY=...   # football-data.org
//! export API_FOOTBALL_KEY=...        # api-football (either key suffices)
//! export FOOTY_HFA_PRE_COVID_END=2020-03-01   # optional cutoff overrides
//! export FOOTY_HFA_COVID_END=2021-07-31
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod processor;
pub mod providers;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{DateRange, GroupBy, League, MatchId, Period, SeasonLabel};
pub use config::{Config, PeriodCutoffs};
pub use error::{HfaError, Result};
pub use storage::{MatchDatabase, MatchFilter, MatchRecord};
