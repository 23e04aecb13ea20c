//! Data processor: period classification and descriptive aggregation.
//!
//! Pure functions over slices of cached match records. Nothing here talks to
//! the network or the database; callers fetch, then aggregate on demand.

use crate::cli::types::{GroupBy, League, Period};
use crate::config::PeriodCutoffs;
use crate::storage::models::MatchRecord;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;


/// Assign a date to its COVID period.
///
/// Half-open bins: a date equal to a cutoff belongs to the later period, so
/// every date lands in exactly one period and both boundary instants are
/// deterministic.
pub fn classify_period(date: NaiveDate, cutoffs: PeriodCutoffs) -> Period {
    if date < cutoffs.pre_covid_end {
        Period::PreCovid
    } else if date < cutoffs.during_covid_end {
        Period::DuringCovid
    } else {
        Period::PostCovid
    }
}

/// Aggregate view over one group of matches. Recomputed on demand, never
/// persisted. Percentage fields are `None` exactly when `sample_size == 0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamAggregate {
    pub team: Option<String>,
    pub league: Option<League>,
    pub period: Period,
    pub home_win_pct: Option<f64>,
    pub avg_goal_diff: Option<f64>,
    pub sample_size: u32,
}

impl TeamAggregate {
    fn empty(team: Option<String>, league: Option<League>, period: Period) -> Self {
        Self {
            team,
            league,
            period,
            home_win_pct: None,
            avg_goal_diff: None,
            sample_size: 0,
        }
    }
}

/// Group matches by the requested dimension (crossed with period) and compute
/// home-side win rate and average goal differential per group.
///
/// `GroupBy::Period` always yields one row per period, zero-filled where the
/// group is empty; team and league groups exist only where matches do.
pub fn aggregate(matches: &[MatchRecord], group_by: GroupBy) -> Vec<TeamAggregate> {
    match group_by {
        GroupBy::Period => Period::ALL
            .iter()
            .map(|&period| {
                let group: Vec<&MatchRecord> =
                    matches.iter().filter(|m| m.period == period).collect();
                fill_aggregate(None, None, period, &group)
            })
            .collect(),
        GroupBy::Team => {
            let mut groups: BTreeMap<(String, Period), Vec<&MatchRecord>> = BTreeMap::new();
            for m in matches {
                groups
                    .entry((m.home_team.clone(), m.period))
                    .or_default()
                    .push(m);
            }
            groups
                .into_iter()
                .map(|((team, period), group)| {
                    let league = uniform_league(&group);
                    fill_aggregate(Some(team), league, period, &group)
                })
                .collect()
        }
        GroupBy::League => {
            let mut groups: BTreeMap<(String, Period), (League, Vec<&MatchRecord>)> =
                BTreeMap::new();
            for m in matches {
                groups
                    .entry((m.league.to_string(), m.period))
                    .or_insert_with(|| (m.league, Vec::new()))
                    .1
                    .push(m);
            }
            groups
                .into_values()
                .map(|(league, group)| {
                    let period = group[0].period;
                    fill_aggregate(None, Some(league), period, &group)
                })
                .collect()
        }
    }
}

fn fill_aggregate(
    team: Option<String>,
    league: Option<League>,
    period: Period,
    group: &[&MatchRecord],
) -> TeamAggregate {
    if group.is_empty() {
        return TeamAggregate::empty(team, league, period);
    }
    let n = group.len() as f64;
    let home_wins = group.iter().filter(|m| m.home_win()).count() as f64;
    let goal_diff_sum: i64 = group.iter().map(|m| m.goal_diff()).sum();
    TeamAggregate {
        team,
        league,
        period,
        home_win_pct: Some(home_wins / n),
        avg_goal_diff: Some(goal_diff_sum as f64 / n),
        sample_size: group.len() as u32,
    }
}

fn uniform_league(group: &[&MatchRecord]) -> Option<League> {
    let first = group.first()?.league;
    group.iter().all(|m| m.league == first).then_some(first)
}

/// Per-period home-field advantage summary across all matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeAdvantageSummary {
    pub period: Period,
    pub total_matches: u32,
    pub home_wins: u32,
    pub draws: u32,
    pub away_wins: u32,
    pub home_win_pct: Option<f64>,
    pub draw_pct: Option<f64>,
    pub away_win_pct: Option<f64>,
    pub avg_home_goals: Option<f64>,
    pub avg_away_goals: Option<f64>,
    /// Mean points per match for the home side (3 for a win, 1 for a draw).
    pub home_points_avg: Option<f64>,
    pub away_points_avg: Option<f64>,
    /// home_win_pct minus away_win_pct, the headline number.
    pub home_advantage: Option<f64>,
}

/// One summary row per period; empty periods are zero rows with `None`
/// percentages rather than an error.
pub fn home_advantage_by_period(matches: &[MatchRecord]) -> Vec<HomeAdvantageSummary> {
    Period::ALL
        .iter()
        .map(|&period| {
            let group: Vec<&MatchRecord> =
                matches.iter().filter(|m| m.period == period).collect();
            summarize_period(period, &group)
        })
        .collect()
}

fn summarize_period(period: Period, group: &[&MatchRecord]) -> HomeAdvantageSummary {
    let total = group.len() as u32;
    let home_wins = group.iter().filter(|m| m.home_win()).count() as u32;
    let draws = group.iter().filter(|m| m.draw()).count() as u32;
    let away_wins = group.iter().filter(|m| m.away_win()).count() as u32;

    let frac = |count: u32| (total > 0).then(|| count as f64 / total as f64);
    let home_win_pct = frac(home_wins);
    let away_win_pct = frac(away_wins);

    HomeAdvantageSummary {
        period,
        total_matches: total,
        home_wins,
        draws,
        away_wins,
        home_win_pct,
        draw_pct: frac(draws),
        away_win_pct,
        avg_home_goals: mean(group.iter().map(|m| m.home_goals as f64)),
        avg_away_goals: mean(group.iter().map(|m| m.away_goals as f64)),
        home_points_avg: frac(home_wins * 3 + draws),
        away_points_avg: frac(away_wins * 3 + draws),
        home_advantage: match (home_win_pct, away_win_pct) {
            (Some(h), Some(a)) => Some(h - a),
            _ => None,
        },
    }
}

/// Attendance distribution per period, with its relationship to home wins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceStats {
    pub period: Period,
    /// Matches that actually carried an attendance figure.
    pub sample_size: u32,
    pub mean: Option<f64>,
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub std_dev: Option<f64>,
    /// Pearson correlation between attendance and the home-win indicator.
    pub home_win_correlation: Option<f64>,
    /// Spearman (rank) correlation between attendance and the home-win indicator.
    pub home_win_rank_correlation: Option<f64>,
}

/// One attendance row per period. Matches without an attendance figure are
/// excluded from the sample; an empty sample yields `None` everywhere.
pub fn attendance_by_period(matches: &[MatchRecord]) -> Vec<AttendanceStats> {
    Period::ALL
        .iter()
        .map(|&period| {
            let sample: Vec<(f64, f64)> = matches
                .iter()
                .filter(|m| m.period == period)
                .filter_map(|m| {
                    m.attendance
                        .map(|a| (a as f64, if m.home_win() { 1.0 } else { 0.0 }))
                })
                .collect();
            let attendances: Vec<f64> = sample.iter().map(|(a, _)| *a).collect();
            let outcomes: Vec<f64> = sample.iter().map(|(_, w)| *w).collect();
            AttendanceStats {
                period,
                sample_size: sample.len() as u32,
                mean: mean(attendances.iter().copied()),
                min: attendances.iter().map(|&a| a as u32).min(),
                max: attendances.iter().map(|&a| a as u32).max(),
                std_dev: std_dev(&attendances),
                home_win_correlation: pearson(&attendances, &outcomes),
                home_win_rank_correlation: spearman(&attendances, &outcomes),
            }
        })
        .collect()
}

/// One side (home or away) of a team's record within a period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamPerformance {
    pub period: Period,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub win_pct: Option<f64>,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
    pub points_per_game: Option<f64>,
    pub goal_diff_per_game: Option<f64>,
}

/// A team's per-period record, split into (home, away). Each side always has
/// one row per period, zero-filled where the team did not play.
pub fn team_performance(
    matches: &[MatchRecord],
    team: &str,
) -> (Vec<TeamPerformance>, Vec<TeamPerformance>) {
    let home = Period::ALL
        .iter()
        .map(|&period| {
            let rows: Vec<(u32, u32)> = matches
                .iter()
                .filter(|m| m.period == period && m.home_team == team)
                .map(|m| (m.home_goals, m.away_goals))
                .collect();
            side_performance(period, &rows)
        })
        .collect();
    let away = Period::ALL
        .iter()
        .map(|&period| {
            let rows: Vec<(u32, u32)> = matches
                .iter()
                .filter(|m| m.period == period && m.away_team == team)
                .map(|m| (m.away_goals, m.home_goals))
                .collect();
            side_performance(period, &rows)
        })
        .collect();
    (home, away)
}

/// `rows` are (goals for, goals against) from the side's own point of view.
fn side_performance(period: Period, rows: &[(u32, u32)]) -> TeamPerformance {
    let played = rows.len() as u32;
    let wins = rows.iter().filter(|(gf, ga)| gf > ga).count() as u32;
    let draws = rows.iter().filter(|(gf, ga)| gf == ga).count() as u32;
    let losses = played - wins - draws;
    let goals_for: u32 = rows.iter().map(|(gf, _)| gf).sum();
    let goals_against: u32 = rows.iter().map(|(_, ga)| ga).sum();
    let points = wins * 3 + draws;
    let per_game = |v: f64| (played > 0).then(|| v / played as f64);
    TeamPerformance {
        period,
        played,
        wins,
        draws,
        losses,
        win_pct: per_game(wins as f64),
        goals_for,
        goals_against,
        points,
        points_per_game: per_game(points as f64),
        goal_diff_per_game: per_game(goals_for as f64 - goals_against as f64),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0u32), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Sample standard deviation (n-1 denominator); `None` below 2 samples.
fn std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values.iter().copied())?;
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(var.sqrt())
}

/// Pearson correlation coefficient; `None` below 2 samples or at zero
/// variance in either vector.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let n = xs.len() as f64;
    let mx = xs.iter().sum::<f64>() / n;
    let my = ys.iter().sum::<f64>() / n;
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        cov += (x - mx) * (y - my);
        var_x += (x - mx).powi(2);
        var_y += (y - my).powi(2);
    }
    let denom = (var_x * var_y).sqrt();
    (denom > 0.0).then(|| cov / denom)
}

/// Spearman rank correlation: Pearson over average ranks (ties share the
/// mean of the rank positions they occupy).
pub fn spearman(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    pearson(&average_ranks(xs), &average_ranks(ys))
}

fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap_or(std::cmp::Ordering::Equal));

    let mut ranks = vec![0.0; values.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        // 1-based ranks; tied values share the mean rank of their span
        let avg_rank = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            ranks[idx] = avg_rank;
        }
        i = j + 1;
    }
    ranks
}
