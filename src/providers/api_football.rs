//! api-football (v3.football.api-sports.io): the fallback provider.
//!
//! Auth rides in the `x-apisports-key` header; fixtures come from
//! `/fixtures?league={id}&season=YYYY` and are only usable once their status
//! short code is `FT`. Unlike football-data.org, fixtures can carry an
//! attendance figure.

use crate::cli::types::{League, MatchId, SeasonLabel};
use crate::config::PeriodCutoffs;
use crate::error::Result;
use crate::processor::classify_period;
use crate::providers::football_data::parse_utc_date;
use crate::providers::http::get_json;
use crate::storage::models::MatchRecord;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use serde::Deserialize;

pub const SOURCE: &str = "api-football";
pub const BASE_URL: &str = "https://v3.football.api-sports.io";

#[derive(Debug, Deserialize)]
pub struct FixturesResponse {
    #[serde(default)]
    pub response: Vec<FixtureWrapper>,
}

#[derive(Debug, Deserialize)]
pub struct FixtureWrapper {
    pub fixture: Fixture,
    pub teams: FixtureTeams,
    pub goals: Goals,
}

#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub id: u64,
    pub date: String,
    pub status: FixtureStatus,
    #[serde(default)]
    pub attendance: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct FixtureStatus {
    pub short: String,
}

#[derive(Debug, Deserialize)]
pub struct FixtureTeams {
    pub home: TeamRef,
    pub away: TeamRef,
}

#[derive(Debug, Deserialize)]
pub struct TeamRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct Goals {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub response: Vec<TeamWrapper>,
}

#[derive(Debug, Deserialize)]
pub struct TeamWrapper {
    pub team: TeamRef,
}

fn auth_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert("x-apisports-key", HeaderValue::from_str(api_key)?);
    Ok(headers)
}

/// Fetch one league season's finished fixtures.
pub async fn fetch_matches(
    client: &Client,
    api_key: &str,
    league: League,
    season: SeasonLabel,
    cutoffs: PeriodCutoffs,
) -> Result<Vec<MatchRecord>> {
    let url = format!("{BASE_URL}/fixtures");
    let query = [
        ("league", league.api_football_id().to_string()),
        ("season", season.start_year().to_string()),
    ];
    let payload: FixturesResponse = get_json(client, &url, auth_headers(api_key)?, &query).await?;
    parse_matches(payload, league, season, cutoffs)
}

/// Fetch the league's current team names.
pub async fn fetch_teams(client: &Client, api_key: &str, league: League) -> Result<Vec<String>> {
    let url = format!("{BASE_URL}/teams");
    let query = [
        ("league", league.api_football_id().to_string()),
        ("season", crate::cli::types::LAST_SEASON.to_string()),
    ];
    let payload: TeamsResponse = get_json(client, &url, auth_headers(api_key)?, &query).await?;
    Ok(payload.response.into_iter().map(|w| w.team.name).collect())
}

/// Map the provider payload into the unified record shape. Fixtures that are
/// not full-time, or with a missing goal count, are skipped.
pub fn parse_matches(
    payload: FixturesResponse,
    league: League,
    season: SeasonLabel,
    cutoffs: PeriodCutoffs,
) -> Result<Vec<MatchRecord>> {
    let mut records = Vec::with_capacity(payload.response.len());
    for w in payload.response {
        if w.fixture.status.short != "FT" {
            continue;
        }
        let (Some(home_goals), Some(away_goals)) = (w.goals.home, w.goals.away) else {
            continue;
        };
        let date = parse_utc_date(&w.fixture.date)?;
        records.push(MatchRecord {
            match_id: MatchId::new(SOURCE, w.fixture.id),
            date,
            season,
            league,
            home_team: w.teams.home.name,
            away_team: w.teams.away.name,
            home_goals,
            away_goals,
            attendance: w.fixture.attendance,
            period: classify_period(date, cutoffs),
        });
    }
    Ok(records)
}
