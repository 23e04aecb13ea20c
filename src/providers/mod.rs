//! API client: two external data providers behind one fetch contract.
//!
//! football-data.org is tried first, api-football second. A provider without
//! a configured key is skipped; a provider failing transiently (after the
//! retry budget) falls through to the next. Only when every configured
//! provider has failed does the caller see an error.

pub mod api_football;
pub mod football_data;
pub mod http;

#[cfg(test)]
mod tests;

use crate::cli::types::{DateRange, League, SeasonLabel};
use crate::config::{Config, API_FOOTBALL_KEY_VAR, FOOTBALL_DATA_KEY_VAR};
use crate::error::{HfaError, Result};
use crate::storage::models::MatchRecord;
use reqwest::Client;

pub use http::build_client;

/// Finished matches for a league over the given seasons, from whichever
/// provider answers first. Records are filtered to the date range and
/// optional team before returning; an empty result is not an error.
pub async fn fetch_matches(
    client: &Client,
    config: &Config,
    league: League,
    seasons: &[SeasonLabel],
    date_range: DateRange,
    team: Option<&str>,
) -> Result<Vec<MatchRecord>> {
    let mut records = Vec::new();
    for &season in seasons {
        records.extend(fetch_season(client, config, league, season).await?);
    }

    records.retain(|m| date_range.contains(m.date));
    if let Some(team) = team {
        records.retain(|m| m.home_team == team || m.away_team == team);
    }
    Ok(records)
}

async fn fetch_season(
    client: &Client,
    config: &Config,
    league: League,
    season: SeasonLabel,
) -> Result<Vec<MatchRecord>> {
    let mut failures: Vec<(&'static str, HfaError)> = Vec::new();

    if let Some(key) = &config.football_data_key {
        match football_data::fetch_matches(client, key, league, season, config.cutoffs).await {
            Ok(records) => return Ok(records),
            Err(e) => failures.push((football_data::SOURCE, e)),
        }
    }
    if let Some(key) = &config.api_football_key {
        match api_football::fetch_matches(client, key, league, season, config.cutoffs).await {
            Ok(records) => return Ok(records),
            Err(e) => failures.push((api_football::SOURCE, e)),
        }
    }

    Err(classify_failure(failures))
}

/// Team names for a league, with the same provider fallback.
pub async fn fetch_teams(
    client: &Client,
    config: &Config,
    league: League,
) -> Result<Vec<String>> {
    let mut failures: Vec<(&'static str, HfaError)> = Vec::new();

    if let Some(key) = &config.football_data_key {
        match football_data::fetch_teams(client, key, league).await {
            Ok(teams) => return Ok(teams),
            Err(e) => failures.push((football_data::SOURCE, e)),
        }
    }
    if let Some(key) = &config.api_football_key {
        match api_football::fetch_teams(client, key, league).await {
            Ok(teams) => return Ok(teams),
            Err(e) => failures.push((api_football::SOURCE, e)),
        }
    }

    Err(classify_failure(failures))
}

/// Collapse per-provider failures into the error the user should see.
///
/// No provider attempted (no keys) or every failure auth-shaped: a
/// configuration problem. Any transient failure in the mix: the data is
/// temporarily unavailable, not misconfigured.
pub(crate) fn classify_failure(failures: Vec<(&'static str, HfaError)>) -> HfaError {
    let env_vars = format!("{FOOTBALL_DATA_KEY_VAR} and/or {API_FOOTBALL_KEY_VAR}");
    if failures.is_empty() {
        return HfaError::Auth { env_vars };
    }
    if failures.iter().all(|(_, e)| !e.is_transient()) {
        return HfaError::Auth { env_vars };
    }
    let reason = failures
        .iter()
        .map(|(source, e)| format!("{source}: {e}"))
        .collect::<Vec<_>>()
        .join("; ");
    HfaError::Upstream { reason }
}
