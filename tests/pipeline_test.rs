//! End-to-end pipeline tests: cache a synthetic multi-period dataset, query
//! it back through the storage filters, and aggregate.

use chrono::NaiveDate;
use footy_hfa::processor::{
    aggregate, attendance_by_period, classify_period, home_advantage_by_period,
};
use footy_hfa::{
    GroupBy, League, MatchDatabase, MatchFilter, MatchId, MatchRecord, Period, PeriodCutoffs,
    SeasonLabel,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(
    id: u32,
    on: NaiveDate,
    season: u16,
    home: &str,
    away: &str,
    score: (u32, u32),
    attendance: Option<u32>,
) -> MatchRecord {
    MatchRecord {
        match_id: MatchId::new("football-data", id),
        date: on,
        season: SeasonLabel::new(season),
        league: League::PremierLeague,
        home_team: home.to_string(),
        away_team: away.to_string(),
        home_goals: score.0,
        away_goals: score.1,
        attendance,
        period: classify_period(on, PeriodCutoffs::default()),
    }
}

/// Two home wins with crowds before COVID, one away win behind closed doors,
/// one draw after crowds returned.
fn seed() -> Vec<MatchRecord> {
    vec![
        record(1, date(2019, 9, 14), 2019, "Liverpool FC", "Newcastle", (3, 1), Some(53_000)),
        record(2, date(2020, 1, 2), 2019, "Arsenal FC", "Man Utd", (2, 0), Some(60_000)),
        record(3, date(2020, 6, 17), 2019, "Man City", "Arsenal FC", (0, 1), Some(0)),
        record(4, date(2021, 8, 14), 2021, "Brentford", "Arsenal FC", (1, 1), Some(16_000)),
    ]
}

#[test]
fn fetch_cache_aggregate_path() {
    let mut db = MatchDatabase::open_in_memory().unwrap();
    db.upsert_matches(&seed()).unwrap();

    let all = db
        .query_matches(&MatchFilter::default(), PeriodCutoffs::default())
        .unwrap();
    assert_eq!(all.len(), 4);

    let summary = home_advantage_by_period(&all);
    let pre = summary.iter().find(|s| s.period == Period::PreCovid).unwrap();
    assert_eq!(pre.total_matches, 2);
    assert_eq!(pre.home_win_pct, Some(1.0));
    assert_eq!(pre.home_advantage, Some(1.0));

    let during = summary
        .iter()
        .find(|s| s.period == Period::DuringCovid)
        .unwrap();
    assert_eq!(during.total_matches, 1);
    assert_eq!(during.home_win_pct, Some(0.0));
    assert_eq!(during.home_advantage, Some(-1.0));

    let post = summary.iter().find(|s| s.period == Period::PostCovid).unwrap();
    assert_eq!(post.draws, 1);
    assert_eq!(post.home_advantage, Some(0.0));
}

#[test]
fn period_filter_flows_through_storage() {
    let mut db = MatchDatabase::open_in_memory().unwrap();
    db.upsert_matches(&seed()).unwrap();

    let filter = MatchFilter {
        period: Some(Period::DuringCovid),
        ..MatchFilter::default()
    };
    let rows = db.query_matches(&filter, PeriodCutoffs::default()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].home_team, "Man City");
}

#[test]
fn team_filter_then_aggregate_by_period() {
    let mut db = MatchDatabase::open_in_memory().unwrap();
    db.upsert_matches(&seed()).unwrap();

    let filter = MatchFilter {
        team: Some("Arsenal FC".to_string()),
        ..MatchFilter::default()
    };
    let arsenal = db.query_matches(&filter, PeriodCutoffs::default()).unwrap();
    assert_eq!(arsenal.len(), 3);

    let rows = aggregate(&arsenal, GroupBy::Period);
    assert_eq!(rows.len(), 3);
    let pre = rows.iter().find(|r| r.period == Period::PreCovid).unwrap();
    assert_eq!(pre.sample_size, 1);
    assert_eq!(pre.home_win_pct, Some(1.0));
}

#[test]
fn attendance_collapse_shows_up_per_period() {
    let mut db = MatchDatabase::open_in_memory().unwrap();
    db.upsert_matches(&seed()).unwrap();

    let all = db
        .query_matches(&MatchFilter::default(), PeriodCutoffs::default())
        .unwrap();
    let stats = attendance_by_period(&all);

    let pre = stats.iter().find(|s| s.period == Period::PreCovid).unwrap();
    assert_eq!(pre.sample_size, 2);
    assert_eq!(pre.mean, Some(56_500.0));

    let during = stats
        .iter()
        .find(|s| s.period == Period::DuringCovid)
        .unwrap();
    assert_eq!(during.mean, Some(0.0));
    // single match: no spread, no correlation
    assert_eq!(during.std_dev, None);
    assert_eq!(during.home_win_correlation, None);
}

#[test]
fn seasons_filter_narrows_the_query() {
    let mut db = MatchDatabase::open_in_memory().unwrap();
    db.upsert_matches(&seed()).unwrap();

    let filter = MatchFilter {
        seasons: Some(vec![SeasonLabel::new(2021)]),
        ..MatchFilter::default()
    };
    let rows = db.query_matches(&filter, PeriodCutoffs::default()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].home_team, "Brentford");
}
