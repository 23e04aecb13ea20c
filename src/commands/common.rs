//! Common utilities and helper functions shared across commands.

use crate::cli::CommonFilters;
use crate::config::Config;
use crate::error::Result;
use crate::providers;
use crate::storage::{MatchDatabase, MatchRecord};
use reqwest::Client;

/// Context containing the resources every command needs.
pub struct CommandContext {
    pub config: Config,
    pub db: MatchDatabase,
    pub client: Client,
}

impl CommandContext {
    pub fn new(verbose: bool) -> Result<Self> {
        let config = Config::from_env()?;
        if verbose {
            println!("Opening match cache...");
        }
        let db = MatchDatabase::new(&config)?;
        let client = providers::build_client()?;
        Ok(Self { config, db, client })
    }
}

/// Cache-first load: query the local store, and on a miss (or `refresh`)
/// fetch from the providers, write through, and re-query so the caller
/// always sees the canonical cached shape.
pub async fn load_matches(
    ctx: &mut CommandContext,
    filters: &CommonFilters,
    refresh: bool,
    verbose: bool,
) -> Result<Vec<MatchRecord>> {
    let match_filter = filters.to_match_filter();
    let cutoffs = ctx.config.cutoffs;

    if !refresh {
        let cached = ctx.db.query_matches(&match_filter, cutoffs)?;
        if !cached.is_empty() {
            if verbose {
                println!("✓ {} matches loaded from cache", cached.len());
            }
            return Ok(cached);
        }
    }

    if verbose {
        println!(
            "Fetching {} matches for {} season(s)...",
            filters.league,
            filters.seasons_or_all().len()
        );
    }
    let fetched = providers::fetch_matches(
        &ctx.client,
        &ctx.config,
        filters.league,
        &filters.seasons_or_all(),
        filters.date_range(),
        filters.team.as_deref(),
    )
    .await?;

    let written = ctx.db.upsert_matches(&fetched)?;
    if verbose {
        println!("✓ {written} matches fetched and cached");
    }

    ctx.db.query_matches(&match_filter, cutoffs)
}

/// `--` for absent values, fraction rendered as a percentage otherwise.
pub fn fmt_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => "--".to_string(),
    }
}

pub fn fmt_num(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "--".to_string(),
    }
}
