//! CLI argument definitions and parsing structures.

use super::types::{DateRange, GroupBy, League, Period, SeasonLabel};
use crate::storage::models::MatchFilter;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Common filtering arguments shared between commands
#[derive(Debug, Args)]
pub struct CommonFilters {
    /// League to analyze.
    #[clap(long, short, value_enum, default_value_t = League::PremierLeague)]
    pub league: League,

    /// Season like `2019/2020` or `2019` - repeatable: `-s 2019/2020 -s 2020/2021`.
    /// All mapped seasons when omitted.
    #[clap(long, short)]
    pub season: Option<Vec<SeasonLabel>>,

    /// Keep only matches involving this team.
    #[clap(long, short)]
    pub team: Option<String>,

    /// Keep only matches in this COVID period.
    #[clap(long, short, value_enum)]
    pub period: Option<Period>,

    /// Earliest match date, inclusive (YYYY-MM-DD).
    #[clap(long)]
    pub from_date: Option<NaiveDate>,

    /// Latest match date, inclusive (YYYY-MM-DD).
    #[clap(long)]
    pub to_date: Option<NaiveDate>,
}

impl CommonFilters {
    /// The storage-layer filter these arguments describe.
    pub fn to_match_filter(&self) -> MatchFilter {
        MatchFilter {
            league: Some(self.league),
            seasons: self.season.clone(),
            team: self.team.clone(),
            period: self.period,
            date_range: self.date_range(),
        }
    }

    pub fn date_range(&self) -> DateRange {
        DateRange {
            from: self.from_date,
            to: self.to_date,
        }
    }

    /// Requested seasons, or every mapped season.
    pub fn seasons_or_all(&self) -> Vec<SeasonLabel> {
        self.season.clone().unwrap_or_else(SeasonLabel::all)
    }
}

#[derive(Debug, Parser)]
#[clap(
    name = "footy-hfa",
    about = "Football home-field advantage across COVID periods"
)]
pub struct Hfa {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch, cache, and report on match data.
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Cached match records for a league and season range.
    ///
    /// Reads the local cache first; on a miss (or with --refresh) fetches
    /// from the configured providers and writes the cache through.
    MatchData {
        #[clap(flatten)]
        filters: CommonFilters,

        /// Force a provider fetch even when the cache has data.
        #[clap(long)]
        refresh: bool,

        /// Drop every cached match before fetching.
        #[clap(long)]
        clear_db: bool,

        /// Emit JSON instead of a table.
        #[clap(long)]
        json: bool,

        /// Print fetch and cache progress.
        #[clap(long, short)]
        verbose: bool,
    },

    /// Team names for a league (cached, fetched on miss).
    Teams {
        /// League to list teams for.
        #[clap(long, short, value_enum, default_value_t = League::PremierLeague)]
        league: League,

        /// Force a provider fetch even when the cache has teams.
        #[clap(long)]
        refresh: bool,

        /// Emit JSON instead of a list.
        #[clap(long)]
        json: bool,

        /// Print fetch and cache progress.
        #[clap(long, short)]
        verbose: bool,
    },

    /// Per-period home-field advantage summary.
    HomeAdvantage {
        #[clap(flatten)]
        filters: CommonFilters,

        /// Also break the aggregate down by this dimension.
        #[clap(long, value_enum)]
        group_by: Option<GroupBy>,

        /// Force a provider fetch even when the cache has data.
        #[clap(long)]
        refresh: bool,

        /// Emit JSON instead of a table.
        #[clap(long)]
        json: bool,

        /// Print fetch and cache progress.
        #[clap(long, short)]
        verbose: bool,
    },

    /// One team's home/away record per period.
    TeamPerformance {
        #[clap(flatten)]
        filters: CommonFilters,

        /// Team to report on.
        #[clap(long, short = 'T')]
        name: String,

        /// Force a provider fetch even when the cache has data.
        #[clap(long)]
        refresh: bool,

        /// Emit JSON instead of a table.
        #[clap(long)]
        json: bool,

        /// Print fetch and cache progress.
        #[clap(long, short)]
        verbose: bool,
    },

    /// Attendance distribution per period and its link to home wins.
    Attendance {
        #[clap(flatten)]
        filters: CommonFilters,

        /// Force a provider fetch even when the cache has data.
        #[clap(long)]
        refresh: bool,

        /// Emit JSON instead of a table.
        #[clap(long)]
        json: bool,

        /// Print fetch and cache progress.
        #[clap(long, short)]
        verbose: bool,
    },
}
