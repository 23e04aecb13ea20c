//! football-data.org: the primary provider.
//!
//! Auth rides in the `X-Auth-Token` header; matches come from
//! `/competitions/{id}/matches?season=YYYY` and are only usable once their
//! status is `FINISHED`. The payload carries no attendance figures.

use crate::cli::types::{League, MatchId, SeasonLabel};
use crate::config::PeriodCutoffs;
use crate::error::{HfaError, Result};
use crate::processor::classify_period;
use crate::providers::http::get_json;
use crate::storage::models::MatchRecord;
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use serde::Deserialize;

pub const SOURCE: &str = "football-data";
pub const BASE_URL: &str = "https://api.football-data.org/v4";

#[derive(Debug, Deserialize)]
pub struct MatchesResponse {
    #[serde(default)]
    pub matches: Vec<ApiMatch>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMatch {
    pub id: u64,
    pub utc_date: String,
    pub status: String,
    pub home_team: TeamRef,
    pub away_team: TeamRef,
    pub score: Score,
}

#[derive(Debug, Deserialize)]
pub struct TeamRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub full_time: Option<FullTime>,
}

#[derive(Debug, Deserialize)]
pub struct FullTime {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Vec<TeamEntry>,
}

#[derive(Debug, Deserialize)]
pub struct TeamEntry {
    pub name: String,
}

fn auth_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert("X-Auth-Token", HeaderValue::from_str(api_key)?);
    Ok(headers)
}

/// Fetch one league season's finished matches.
pub async fn fetch_matches(
    client: &Client,
    api_key: &str,
    league: League,
    season: SeasonLabel,
    cutoffs: PeriodCutoffs,
) -> Result<Vec<MatchRecord>> {
    let url = format!(
        "{BASE_URL}/competitions/{}/matches",
        league.football_data_id()
    );
    let query = [("season", season.start_year().to_string())];
    let payload: MatchesResponse = get_json(client, &url, auth_headers(api_key)?, &query).await?;
    parse_matches(payload, league, season, cutoffs)
}

/// Fetch the league's current team names.
pub async fn fetch_teams(client: &Client, api_key: &str, league: League) -> Result<Vec<String>> {
    let url = format!("{BASE_URL}/competitions/{}/teams", league.football_data_id());
    let payload: TeamsResponse = get_json(client, &url, auth_headers(api_key)?, &[]).await?;
    Ok(payload.teams.into_iter().map(|t| t.name).collect())
}

/// Map the provider payload into the unified record shape. Matches that are
/// not finished, or that lack a full-time score, are skipped.
pub fn parse_matches(
    payload: MatchesResponse,
    league: League,
    season: SeasonLabel,
    cutoffs: PeriodCutoffs,
) -> Result<Vec<MatchRecord>> {
    let mut records = Vec::with_capacity(payload.matches.len());
    for m in payload.matches {
        if m.status != "FINISHED" {
            continue;
        }
        let Some(full_time) = m.score.full_time else {
            continue;
        };
        let (Some(home_goals), Some(away_goals)) = (full_time.home, full_time.away) else {
            continue;
        };
        let date = parse_utc_date(&m.utc_date)?;
        records.push(MatchRecord {
            match_id: MatchId::new(SOURCE, m.id),
            date,
            season,
            league,
            home_team: m.home_team.name,
            away_team: m.away_team.name,
            home_goals,
            away_goals,
            attendance: None,
            period: classify_period(date, cutoffs),
        });
    }
    Ok(records)
}

/// Dates arrive as RFC 3339 timestamps; only the calendar date matters here.
pub(crate) fn parse_utc_date(raw: &str) -> Result<NaiveDate> {
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| HfaError::InvalidDate {
        input: raw.to_string(),
    })
}
