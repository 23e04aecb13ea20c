//! Database schema and connection management

use crate::config::Config;
use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_DB_ID: AtomicU64 = AtomicU64::new(0);

/// Connection manager for the local match cache.
pub struct MatchDatabase {
    pub(crate) conn: Connection,
    /// Distinguishes this connection's entries in the process-wide query
    /// cache from those of any other open database.
    pub(crate) db_id: u64,
}

impl MatchDatabase {
    /// Open (or create) the cache database resolved from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let db_path = config.database_path()?;
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::open(&db_path)
    }

    /// Open (or create) a cache database at an explicit path.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let mut db = Self {
            conn,
            db_id: NEXT_DB_ID.fetch_add(1, Ordering::Relaxed),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self {
            conn,
            db_id: NEXT_DB_ID.fetch_add(1, Ordering::Relaxed),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS matches (
                match_id TEXT PRIMARY KEY,
                date TEXT NOT NULL,
                season TEXT NOT NULL,
                league TEXT NOT NULL,
                home_team TEXT NOT NULL,
                away_team TEXT NOT NULL,
                home_goals INTEGER NOT NULL,
                away_goals INTEGER NOT NULL,
                attendance INTEGER,
                period TEXT NOT NULL,
                source TEXT NOT NULL,
                fetched_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS teams (
                name TEXT NOT NULL,
                league TEXT NOT NULL,
                fetched_at INTEGER NOT NULL,
                UNIQUE(name, league)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_matches_league_season
             ON matches(league, season)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_matches_teams
             ON matches(home_team, away_team)",
            [],
        )?;

        Ok(())
    }
}
