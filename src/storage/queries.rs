//! Basic database query operations

use super::{models::*, schema::MatchDatabase};
use crate::cli::types::{League, MatchId, Period, SeasonLabel};
use crate::config::PeriodCutoffs;
use crate::core::cache::{MatchQueryKey, GLOBAL_CACHE};
use crate::error::{HfaError, Result};
use crate::processor::classify_period;
use chrono::NaiveDate;
use rusqlite::{params, params_from_iter, types::Value};
use std::time::{SystemTime, UNIX_EPOCH};

/// Raw row as stored, before typed conversion.
type RawMatchRow = (
    String,         // match_id
    String,         // date
    String,         // season
    String,         // league
    String,         // home_team
    String,         // away_team
    u32,            // home_goals
    u32,            // away_goals
    Option<u32>,    // attendance
);

impl MatchDatabase {
    /// Insert or update a cached match. Idempotent: a second upsert of the
    /// same match_id leaves one row carrying the later values and a fresh
    /// fetch timestamp.
    pub fn upsert_match(&mut self, record: &MatchRecord) -> Result<()> {
        let now = unix_now()?;
        // match ids are "{source}:{provider_id}"
        let source = record.match_id.as_str().split(':').next().unwrap_or("unknown");
        self.conn.execute(
            "INSERT INTO matches
             (match_id, date, season, league, home_team, away_team,
              home_goals, away_goals, attendance, period, source, fetched_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(match_id) DO UPDATE SET
                date = excluded.date,
                season = excluded.season,
                league = excluded.league,
                home_team = excluded.home_team,
                away_team = excluded.away_team,
                home_goals = excluded.home_goals,
                away_goals = excluded.away_goals,
                attendance = excluded.attendance,
                period = excluded.period,
                source = excluded.source,
                fetched_at = excluded.fetched_at",
            params![
                record.match_id.as_str(),
                record.date.to_string(),
                record.season.to_string(),
                record.league.to_string(),
                record.home_team,
                record.away_team,
                record.home_goals,
                record.away_goals,
                record.attendance,
                record.period.to_string(),
                source,
                now
            ],
        )?;
        GLOBAL_CACHE.clear();
        Ok(())
    }

    /// Upsert a batch, returning how many records were written.
    pub fn upsert_matches(&mut self, records: &[MatchRecord]) -> Result<usize> {
        for record in records {
            self.upsert_match(record)?;
        }
        Ok(records.len())
    }

    /// Query cached matches, re-deriving each record's period from its date
    /// with the given cutoffs. Results are ordered by date and memoized in
    /// the process-wide LRU cache.
    pub fn query_matches(
        &self,
        filter: &MatchFilter,
        cutoffs: PeriodCutoffs,
    ) -> Result<Vec<MatchRecord>> {
        let cache_key = MatchQueryKey {
            db_id: self.db_id,
            filter: filter.clone(),
            cutoffs,
        };
        if let Some(cached) = GLOBAL_CACHE.get_matches(&cache_key) {
            return Ok(cached);
        }

        let mut sql = String::from(
            "SELECT match_id, date, season, league, home_team, away_team,
                    home_goals, away_goals, attendance
             FROM matches",
        );
        let mut clauses: Vec<String> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(league) = filter.league {
            clauses.push("league = ?".to_string());
            values.push(Value::from(league.to_string()));
        }
        if let Some(seasons) = &filter.seasons {
            if !seasons.is_empty() {
                let placeholders = vec!["?"; seasons.len()].join(",");
                clauses.push(format!("season IN ({placeholders})"));
                for season in seasons {
                    values.push(Value::from(season.to_string()));
                }
            }
        }
        if let Some(team) = &filter.team {
            clauses.push("(home_team = ? OR away_team = ?)".to_string());
            values.push(Value::from(team.clone()));
            values.push(Value::from(team.clone()));
        }
        if let Some(from) = filter.date_range.from {
            clauses.push("date >= ?".to_string());
            values.push(Value::from(from.to_string()));
        }
        if let Some(to) = filter.date_range.to {
            clauses.push("date <= ?".to_string());
            values.push(Value::from(to.to_string()));
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY date, match_id");

        let mut stmt = self.conn.prepare(&sql)?;
        let raw_rows = stmt
            .query_map(params_from_iter(values), |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, u32>(6)?,
                    row.get::<_, u32>(7)?,
                    row.get::<_, Option<u32>>(8)?,
                ))
            })?
            .collect::<rusqlite::Result<Vec<RawMatchRow>>>()?;

        let mut records = Vec::with_capacity(raw_rows.len());
        for raw in raw_rows {
            let record = raw_to_record(raw, cutoffs)?;
            // Period filtering happens here rather than in SQL so the filter
            // always sees the re-derived period, not the stored snapshot.
            if filter.period.map_or(true, |p| record.period == p) {
                records.push(record);
            }
        }

        GLOBAL_CACHE.put_matches(cache_key, records.clone());
        Ok(records)
    }

    /// Cached team names for a league, alphabetical.
    pub fn get_teams(&self, league: League) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM teams WHERE league = ? ORDER BY name")?;
        let teams = stmt
            .query_map(params![league.to_string()], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(teams)
    }

    /// Remember team names for a league; already-known names are kept.
    pub fn upsert_teams(&mut self, names: &[String], league: League) -> Result<usize> {
        let now = unix_now()?;
        let mut inserted = 0;
        for name in names {
            inserted += self.conn.execute(
                "INSERT OR IGNORE INTO teams (name, league, fetched_at) VALUES (?, ?, ?)",
                params![name, league.to_string(), now],
            )?;
        }
        Ok(inserted)
    }

    /// Total cached matches.
    pub fn match_count(&self) -> Result<u64> {
        let count: u64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM matches", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Drop every cached match. The cache normally only grows; this is the
    /// manual escape hatch.
    pub fn clear_matches(&mut self) -> Result<usize> {
        let removed = self.conn.execute("DELETE FROM matches", [])?;
        GLOBAL_CACHE.clear();
        Ok(removed)
    }
}

fn raw_to_record(raw: RawMatchRow, cutoffs: PeriodCutoffs) -> Result<MatchRecord> {
    let (match_id, date, season, league, home_team, away_team, home_goals, away_goals, attendance) =
        raw;
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| HfaError::InvalidDate { input: date.clone() })?;
    let season: SeasonLabel = season.parse()?;
    let league: League = league.parse()?;
    let period: Period = classify_period(date, cutoffs);
    Ok(MatchRecord {
        match_id: MatchId(match_id),
        date,
        season,
        league,
        home_team,
        away_team,
        home_goals,
        away_goals,
        attendance,
        period,
    })
}

fn unix_now() -> Result<u64> {
    Ok(SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| HfaError::Cache {
            message: format!("system clock before unix epoch: {e}"),
        })?
        .as_secs())
}
