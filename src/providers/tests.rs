//! Unit tests for provider payload parsing and failure classification

use super::*;
use crate::cli::types::Period;
use crate::config::PeriodCutoffs;
use serde_json::json;

fn season() -> SeasonLabel {
    SeasonLabel::new(2019)
}

#[test]
fn football_data_payload_maps_to_match_records() {
    let payload: football_data::MatchesResponse = serde_json::from_value(json!({
        "matches": [
            {
                "id": 327117,
                "utcDate": "2019-08-09T19:00:00Z",
                "status": "FINISHED",
                "homeTeam": { "name": "Liverpool FC" },
                "awayTeam": { "name": "Norwich City FC" },
                "score": { "fullTime": { "home": 4, "away": 1 } }
            },
            {
                "id": 327118,
                "utcDate": "2020-05-01T14:00:00Z",
                "status": "POSTPONED",
                "homeTeam": { "name": "Arsenal FC" },
                "awayTeam": { "name": "Chelsea FC" },
                "score": { "fullTime": null }
            }
        ]
    }))
    .unwrap();

    let records = football_data::parse_matches(
        payload,
        League::PremierLeague,
        season(),
        PeriodCutoffs::default(),
    )
    .unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.match_id.as_str(), "football-data:327117");
    assert_eq!(record.home_team, "Liverpool FC");
    assert_eq!(record.home_goals, 4);
    assert_eq!(record.away_goals, 1);
    assert_eq!(record.attendance, None);
    assert_eq!(record.period, Period::PreCovid);
    assert!(record.home_win());
}

#[test]
fn api_football_payload_maps_to_match_records() {
    let payload: api_football::FixturesResponse = serde_json::from_value(json!({
        "response": [
            {
                "fixture": {
                    "id": 157015,
                    "date": "2020-06-17T17:00:00+00:00",
                    "status": { "short": "FT" },
                    "attendance": 0
                },
                "teams": {
                    "home": { "name": "Aston Villa" },
                    "away": { "name": "Sheffield Utd" }
                },
                "goals": { "home": 0, "away": 0 }
            },
            {
                "fixture": {
                    "id": 157016,
                    "date": "2020-06-18T17:00:00+00:00",
                    "status": { "short": "NS" }
                },
                "teams": {
                    "home": { "name": "Manchester City" },
                    "away": { "name": "Arsenal" }
                },
                "goals": { "home": null, "away": null }
            }
        ]
    }))
    .unwrap();

    let records = api_football::parse_matches(
        payload,
        League::PremierLeague,
        season(),
        PeriodCutoffs::default(),
    )
    .unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.match_id.as_str(), "api-football:157015");
    assert_eq!(record.attendance, Some(0));
    assert_eq!(record.period, Period::DuringCovid);
    assert!(record.draw());
}

#[test]
fn both_providers_produce_the_same_record_shape() {
    let fd: football_data::MatchesResponse = serde_json::from_value(json!({
        "matches": [{
            "id": 1,
            "utcDate": "2021-09-11T14:00:00Z",
            "status": "FINISHED",
            "homeTeam": { "name": "Crystal Palace" },
            "awayTeam": { "name": "Tottenham" },
            "score": { "fullTime": { "home": 3, "away": 0 } }
        }]
    }))
    .unwrap();
    let af: api_football::FixturesResponse = serde_json::from_value(json!({
        "response": [{
            "fixture": {
                "id": 1,
                "date": "2021-09-11T14:00:00+00:00",
                "status": { "short": "FT" },
                "attendance": 24_000
            },
            "teams": {
                "home": { "name": "Crystal Palace" },
                "away": { "name": "Tottenham" }
            },
            "goals": { "home": 3, "away": 0 }
        }]
    }))
    .unwrap();

    let from_fd = football_data::parse_matches(
        fd,
        League::PremierLeague,
        SeasonLabel::new(2021),
        PeriodCutoffs::default(),
    )
    .unwrap();
    let from_af = api_football::parse_matches(
        af,
        League::PremierLeague,
        SeasonLabel::new(2021),
        PeriodCutoffs::default(),
    )
    .unwrap();

    let a = &from_fd[0];
    let b = &from_af[0];
    assert_eq!(a.date, b.date);
    assert_eq!(a.home_team, b.home_team);
    assert_eq!(a.home_goals, b.home_goals);
    assert_eq!(a.period, b.period);
    // Only the natural keys and attendance coverage differ
    assert_ne!(a.match_id, b.match_id);
    assert_eq!(a.attendance, None);
    assert_eq!(b.attendance, Some(24_000));
}

#[test]
fn malformed_date_is_rejected() {
    let payload: football_data::MatchesResponse = serde_json::from_value(json!({
        "matches": [{
            "id": 2,
            "utcDate": "not-a-date",
            "status": "FINISHED",
            "homeTeam": { "name": "A" },
            "awayTeam": { "name": "B" },
            "score": { "fullTime": { "home": 1, "away": 0 } }
        }]
    }))
    .unwrap();

    let result = football_data::parse_matches(
        payload,
        League::PremierLeague,
        season(),
        PeriodCutoffs::default(),
    );
    assert!(matches!(result, Err(HfaError::InvalidDate { .. })));
}

#[test]
fn no_configured_provider_is_an_auth_failure() {
    let err = classify_failure(vec![]);
    assert!(matches!(err, HfaError::Auth { .. }));
}

#[test]
fn transient_failure_in_the_mix_is_upstream() {
    let failures = vec![
        (
            "football-data",
            HfaError::Upstream {
                reason: "503".to_string(),
            },
        ),
        (
            "api-football",
            HfaError::Upstream {
                reason: "timeout".to_string(),
            },
        ),
    ];
    let err = classify_failure(failures);
    match err {
        HfaError::Upstream { reason } => {
            assert!(reason.contains("football-data"));
            assert!(reason.contains("api-football"));
        }
        other => panic!("expected Upstream, got {other:?}"),
    }
}

#[test]
fn all_auth_shaped_failures_surface_as_auth() {
    let failures = vec![(
        "football-data",
        HfaError::Auth {
            env_vars: "FOOTBALL_DATA_API_KEY".to_string(),
        },
    )];
    let err = classify_failure(failures);
    match err {
        HfaError::Auth { env_vars } => {
            assert!(env_vars.contains("FOOTBALL_DATA_API_KEY"));
            assert!(env_vars.contains("API_FOOTBALL_KEY"));
        }
        other => panic!("expected Auth, got {other:?}"),
    }
}

#[test]
fn upstream_errors_are_transient_and_auth_errors_are_not() {
    assert!(HfaError::Upstream {
        reason: "x".to_string()
    }
    .is_transient());
    assert!(!HfaError::Auth {
        env_vars: "x".to_string()
    }
    .is_transient());
}
