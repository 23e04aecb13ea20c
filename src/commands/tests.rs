//! Unit tests for command helpers

use super::common::{fmt_num, fmt_pct};
use crate::cli::types::{League, Period, SeasonLabel, FIRST_SEASON, LAST_SEASON};
use crate::cli::CommonFilters;
use chrono::NaiveDate;

fn filters() -> CommonFilters {
    CommonFilters {
        league: League::PremierLeague,
        season: None,
        team: None,
        period: None,
        from_date: None,
        to_date: None,
    }
}

#[test]
fn fmt_pct_renders_fraction_or_placeholder() {
    assert_eq!(fmt_pct(Some(0.5)), "50.0%");
    assert_eq!(fmt_pct(Some(1.0 / 3.0)), "33.3%");
    assert_eq!(fmt_pct(None), "--");
}

#[test]
fn fmt_num_renders_two_decimals() {
    assert_eq!(fmt_num(Some(1.5)), "1.50");
    assert_eq!(fmt_num(None), "--");
}

#[test]
fn filters_default_to_every_mapped_season() {
    let seasons = filters().seasons_or_all();
    assert_eq!(seasons.len(), (LAST_SEASON - FIRST_SEASON + 1) as usize);
}

#[test]
fn filters_map_onto_the_storage_filter() {
    let mut f = filters();
    f.season = Some(vec![SeasonLabel::new(2019)]);
    f.team = Some("Arsenal FC".to_string());
    f.period = Some(Period::DuringCovid);
    f.from_date = NaiveDate::from_ymd_opt(2020, 6, 1);

    let match_filter = f.to_match_filter();
    assert_eq!(match_filter.league, Some(League::PremierLeague));
    assert_eq!(match_filter.seasons, Some(vec![SeasonLabel::new(2019)]));
    assert_eq!(match_filter.team.as_deref(), Some("Arsenal FC"));
    assert_eq!(match_filter.period, Some(Period::DuringCovid));
    assert_eq!(match_filter.date_range.from, f.from_date);
    assert_eq!(match_filter.date_range.to, None);
}
