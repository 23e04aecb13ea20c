//! Type-safe wrappers and enums shared across the CLI and pipeline.

use crate::error::{HfaError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The leagues the two data providers are mapped for.
///
/// Each league carries a fixed numeric id per provider; the mapping is a
/// property of the providers' catalogues, not of this crate.
///
/// # Examples
///
/// ```rust
/// use footy_hfa::League;
///
/// let league: League = "Premier League".parse().unwrap();
/// assert_eq!(league.football_data_id(), 2021);
/// assert_eq!(league.api_football_id(), 39);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum League {
    /// English Premier League
    PremierLeague,
    /// Spanish La Liga
    LaLiga,
    /// German Bundesliga
    Bundesliga,
    /// Italian Serie A
    SerieA,
    /// French Ligue 1
    Ligue1,
}

impl League {
    pub const ALL: [League; 5] = [
        League::PremierLeague,
        League::LaLiga,
        League::Bundesliga,
        League::SerieA,
        League::Ligue1,
    ];

    /// Competition id on football-data.org.
    pub fn football_data_id(&self) -> u32 {
        match self {
            League::PremierLeague => 2021,
            League::LaLiga => 2014,
            League::Bundesliga => 2002,
            League::SerieA => 2019,
            League::Ligue1 => 2015,
        }
    }

    /// League id on api-football.
    pub fn api_football_id(&self) -> u32 {
        match self {
            League::PremierLeague => 39,
            League::LaLiga => 140,
            League::Bundesliga => 78,
            League::SerieA => 135,
            League::Ligue1 => 61,
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            League::PremierLeague => "Premier League",
            League::LaLiga => "La Liga",
            League::Bundesliga => "Bundesliga",
            League::SerieA => "Serie A",
            League::Ligue1 => "Ligue 1",
        };
        write!(f, "{name}")
    }
}

impl FromStr for League {
    type Err = HfaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "premier league" | "premier-league" | "epl" => Ok(League::PremierLeague),
            "la liga" | "la-liga" | "laliga" => Ok(League::LaLiga),
            "bundesliga" => Ok(League::Bundesliga),
            "serie a" | "serie-a" | "seriea" => Ok(League::SerieA),
            "ligue 1" | "ligue-1" | "ligue1" => Ok(League::Ligue1),
            _ => Err(HfaError::UnknownLeague {
                name: s.to_string(),
            }),
        }
    }
}

/// First season both providers cover.
pub const FIRST_SEASON: u16 = 2017;
/// Last season in the provider mapping.
pub const LAST_SEASON: u16 = 2023;

/// A season identified by its start year, displayed as `2019/2020`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonLabel(pub u16);

impl SeasonLabel {
    pub fn new(start_year: u16) -> Self {
        Self(start_year)
    }

    /// Start year, which is what both provider APIs key seasons by.
    pub fn start_year(&self) -> u16 {
        self.0
    }

    /// Every season both providers are mapped for, oldest first.
    pub fn all() -> Vec<SeasonLabel> {
        (FIRST_SEASON..=LAST_SEASON).map(SeasonLabel).collect()
    }
}

impl Default for SeasonLabel {
    fn default() -> Self {
        Self(LAST_SEASON)
    }
}

impl fmt::Display for SeasonLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, self.0 + 1)
    }
}

impl FromStr for SeasonLabel {
    type Err = HfaError;

    fn from_str(s: &str) -> Result<Self> {
        let bad = || HfaError::UnknownSeason {
            label: s.to_string(),
        };
        let start = match s.split_once('/') {
            Some((start, end)) => {
                let start: u16 = start.trim().parse().map_err(|_| bad())?;
                let end: u16 = end.trim().parse().map_err(|_| bad())?;
                if end != start + 1 {
                    return Err(bad());
                }
                start
            }
            None => s.trim().parse().map_err(|_| bad())?,
        };
        if !(FIRST_SEASON..=LAST_SEASON).contains(&start) {
            return Err(bad());
        }
        Ok(Self(start))
    }
}

/// COVID period a match falls into, derived from its date.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Period {
    /// Before the shutdown of attended matches
    PreCovid,
    /// Matches behind closed doors or at reduced capacity
    DuringCovid,
    /// After crowds returned
    PostCovid,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::PreCovid, Period::DuringCovid, Period::PostCovid];
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Period::PreCovid => "Pre-COVID",
            Period::DuringCovid => "During-COVID",
            Period::PostCovid => "Post-COVID",
        };
        write!(f, "{label}")
    }
}

impl FromStr for Period {
    type Err = HfaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pre-covid" | "pre" | "precovid" => Ok(Period::PreCovid),
            "during-covid" | "during" | "duringcovid" => Ok(Period::DuringCovid),
            "post-covid" | "post" | "postcovid" => Ok(Period::PostCovid),
            _ => Err(HfaError::UnknownPeriod {
                label: s.to_string(),
            }),
        }
    }
}

/// Natural key for a cached match: `{source}:{provider_match_id}`.
///
/// Provider ids live in disjoint namespaces, so prefixing with the source
/// keeps ids collision-free without inventing a surrogate key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchId(pub String);

impl MatchId {
    pub fn new(source: &str, provider_id: impl fmt::Display) -> Self {
        Self(format!("{source}:{provider_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive date window used by CLI filters and storage queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Dimension to group aggregates by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum GroupBy {
    /// One aggregate per home team and period
    Team,
    /// One aggregate per league and period
    League,
    /// One aggregate per period across all teams
    Period,
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GroupBy::Team => "team",
            GroupBy::League => "league",
            GroupBy::Period => "period",
        };
        write!(f, "{label}")
    }
}
