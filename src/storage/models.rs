//! Data models for the storage layer

use crate::cli::types::{DateRange, League, MatchId, Period, SeasonLabel};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single finished match as cached locally.
///
/// Immutable once fetched; `period` is a pure function of `date` and the
/// configured cutoffs, re-derived whenever the record is read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub match_id: MatchId,
    pub date: NaiveDate,
    pub season: SeasonLabel,
    pub league: League,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
    pub attendance: Option<u32>,
    pub period: Period,
}

impl MatchRecord {
    pub fn home_win(&self) -> bool {
        self.home_goals > self.away_goals
    }

    pub fn draw(&self) -> bool {
        self.home_goals == self.away_goals
    }

    pub fn away_win(&self) -> bool {
        self.home_goals < self.away_goals
    }

    /// Home goals minus away goals.
    pub fn goal_diff(&self) -> i64 {
        self.home_goals as i64 - self.away_goals as i64
    }
}

/// Optional filters for querying cached matches. All present filters are
/// ANDed; `team` matches either side of the fixture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MatchFilter {
    pub league: Option<League>,
    pub seasons: Option<Vec<SeasonLabel>>,
    pub team: Option<String>,
    pub period: Option<Period>,
    pub date_range: DateRange,
}

impl MatchFilter {
    pub fn for_league(league: League) -> Self {
        Self {
            league: Some(league),
            ..Self::default()
        }
    }
}
