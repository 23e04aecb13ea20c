//! Unit tests for storage functionality

use super::*;
use crate::cli::types::{DateRange, League, MatchId, Period, SeasonLabel};
use crate::config::PeriodCutoffs;
use crate::processor::classify_period;
use chrono::NaiveDate;

fn create_test_db() -> MatchDatabase {
    MatchDatabase::open_in_memory().unwrap()
}

fn test_match(id: u32, y: i32, m: u32, d: u32) -> MatchRecord {
    let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
    MatchRecord {
        match_id: MatchId::new("football-data", id),
        date,
        season: SeasonLabel::new(2019),
        league: League::PremierLeague,
        home_team: "Liverpool FC".to_string(),
        away_team: "Everton FC".to_string(),
        home_goals: 2,
        away_goals: 1,
        attendance: Some(52_000),
        period: classify_period(date, PeriodCutoffs::default()),
    }
}

#[test]
fn upsert_and_query_round_trip() {
    let mut db = create_test_db();
    let record = test_match(1, 2019, 12, 4);
    db.upsert_match(&record).unwrap();

    let filter = MatchFilter {
        league: Some(League::PremierLeague),
        seasons: Some(vec![SeasonLabel::new(2019)]),
        team: Some("Liverpool FC".to_string()),
        period: None,
        date_range: DateRange::default(),
    };
    let rows = db.query_matches(&filter, PeriodCutoffs::default()).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], record);
}

#[test]
fn upsert_is_idempotent_and_keeps_latest_values() {
    let mut db = create_test_db();
    let record = test_match(1, 2019, 12, 4);
    db.upsert_match(&record).unwrap();

    let mut updated = record.clone();
    updated.home_goals = 3;
    updated.attendance = Some(53_000);
    db.upsert_match(&updated).unwrap();

    assert_eq!(db.match_count().unwrap(), 1);
    let rows = db
        .query_matches(&MatchFilter::default(), PeriodCutoffs::default())
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].home_goals, 3);
    assert_eq!(rows[0].attendance, Some(53_000));
}

#[test]
fn query_filters_by_team_on_either_side() {
    let mut db = create_test_db();
    let mut home = test_match(1, 2019, 9, 1);
    home.home_team = "Arsenal FC".to_string();
    home.away_team = "Chelsea FC".to_string();
    let mut away = test_match(2, 2019, 9, 8);
    away.home_team = "Chelsea FC".to_string();
    away.away_team = "Arsenal FC".to_string();
    let other = test_match(3, 2019, 9, 15);
    db.upsert_matches(&[home, away, other]).unwrap();

    let filter = MatchFilter {
        team: Some("Arsenal FC".to_string()),
        ..MatchFilter::default()
    };
    let rows = db.query_matches(&filter, PeriodCutoffs::default()).unwrap();
    assert_eq!(rows.len(), 2);
}

#[test]
fn query_filters_by_date_range_inclusive() {
    let mut db = create_test_db();
    db.upsert_matches(&[
        test_match(1, 2019, 9, 1),
        test_match(2, 2019, 10, 1),
        test_match(3, 2019, 11, 1),
    ])
    .unwrap();

    let filter = MatchFilter {
        date_range: DateRange {
            from: Some(NaiveDate::from_ymd_opt(2019, 10, 1).unwrap()),
            to: Some(NaiveDate::from_ymd_opt(2019, 10, 31).unwrap()),
        },
        ..MatchFilter::default()
    };
    let rows = db.query_matches(&filter, PeriodCutoffs::default()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2019, 10, 1).unwrap());
}

#[test]
fn query_rederives_periods_with_the_given_cutoffs() {
    let mut db = create_test_db();
    db.upsert_match(&test_match(1, 2019, 12, 4)).unwrap();

    // With shifted cutoffs the same stored date lands in a different period
    let shifted = PeriodCutoffs {
        pre_covid_end: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
        during_covid_end: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
    };
    let rows = db.query_matches(&MatchFilter::default(), shifted).unwrap();
    assert_eq!(rows[0].period, Period::DuringCovid);

    let filter = MatchFilter {
        period: Some(Period::PreCovid),
        ..MatchFilter::default()
    };
    assert!(db.query_matches(&filter, shifted).unwrap().is_empty());
}

#[test]
fn query_orders_by_date() {
    let mut db = create_test_db();
    db.upsert_matches(&[
        test_match(2, 2019, 10, 1),
        test_match(1, 2019, 9, 1),
        test_match(3, 2019, 11, 1),
    ])
    .unwrap();

    let rows = db
        .query_matches(&MatchFilter::default(), PeriodCutoffs::default())
        .unwrap();
    let dates: Vec<_> = rows.iter().map(|r| r.date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[test]
fn teams_upsert_ignores_duplicates() {
    let mut db = create_test_db();
    let names = vec!["Arsenal FC".to_string(), "Chelsea FC".to_string()];
    assert_eq!(db.upsert_teams(&names, League::PremierLeague).unwrap(), 2);
    assert_eq!(db.upsert_teams(&names, League::PremierLeague).unwrap(), 0);

    let teams = db.get_teams(League::PremierLeague).unwrap();
    assert_eq!(teams, names);

    // Same name in another league is a separate row
    assert_eq!(db.upsert_teams(&names[..1], League::LaLiga).unwrap(), 1);
}

#[test]
fn clear_matches_empties_the_table() {
    let mut db = create_test_db();
    db.upsert_matches(&[test_match(1, 2019, 9, 1), test_match(2, 2019, 9, 8)])
        .unwrap();
    assert_eq!(db.clear_matches().unwrap(), 2);
    assert_eq!(db.match_count().unwrap(), 0);
}
