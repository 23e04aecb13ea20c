//! Environment-backed configuration.
//!
//! Everything the pipeline needs from the outside world lives here: the two
//! provider API keys, the COVID period cutoff dates, and the cache database
//! path. The struct is built once at startup and passed explicitly to the
//! provider and storage constructors.

use crate::error::{HfaError, Result};
use chrono::NaiveDate;
use std::env;
use std::path::PathBuf;

/// Env var holding the football-data.org API key.
pub const FOOTBALL_DATA_KEY_VAR: &str = "FOOTBALL_DATA_API_KEY";
/// Env var holding the api-football key.
pub const API_FOOTBALL_KEY_VAR: &str = "API_FOOTBALL_KEY";
/// Optional override for the end of the pre-COVID period (ISO date).
pub const PRE_COVID_END_VAR: &str = "FOOTY_HFA_PRE_COVID_END";
/// Optional override for the end of the during-COVID period (ISO date).
pub const DURING_COVID_END_VAR: &str = "FOOTY_HFA_COVID_END";
/// Optional override for the cache database path.
pub const DB_PATH_VAR: &str = "FOOTY_HFA_DB";

/// Boundary dates separating the three COVID periods.
///
/// Half-open: a date equal to a cutoff belongs to the later period. The
/// defaults are the commonly used shutdown and reopening dates for European
/// football; they are a product decision, so both can be overridden from the
/// environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeriodCutoffs {
    pub pre_covid_end: NaiveDate,
    pub during_covid_end: NaiveDate,
}

impl Default for PeriodCutoffs {
    fn default() -> Self {
        Self {
            pre_covid_end: NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
            during_covid_end: NaiveDate::from_ymd_opt(2021, 7, 31).unwrap(),
        }
    }
}

/// Process-lifetime configuration for providers and storage.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub football_data_key: Option<String>,
    pub api_football_key: Option<String>,
    pub cutoffs: PeriodCutoffs,
    pub db_path: Option<PathBuf>,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// Missing API keys are not an error here: a missing key degrades that
    /// provider's fetch path, and only having neither key is fatal (when a
    /// fetch is actually attempted).
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            football_data_key: non_empty_var(FOOTBALL_DATA_KEY_VAR),
            api_football_key: non_empty_var(API_FOOTBALL_KEY_VAR),
            cutoffs: PeriodCutoffs {
                pre_covid_end: date_var(PRE_COVID_END_VAR)?
                    .unwrap_or(PeriodCutoffs::default().pre_covid_end),
                during_covid_end: date_var(DURING_COVID_END_VAR)?
                    .unwrap_or(PeriodCutoffs::default().during_covid_end),
            },
            db_path: env::var(DB_PATH_VAR).ok().map(PathBuf::from),
        })
    }

    /// True when at least one provider has credentials.
    pub fn has_any_key(&self) -> bool {
        self.football_data_key.is_some() || self.api_football_key.is_some()
    }

    /// Resolved database path: the env override or
    /// `<cache_dir>/footy-hfa/matches.db`.
    pub fn database_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.db_path {
            return Ok(path.clone());
        }
        let cache_dir = dirs::cache_dir().ok_or_else(|| HfaError::Cache {
            message: "could not determine cache directory".to_string(),
        })?;
        Ok(cache_dir.join("footy-hfa").join("matches.db"))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn date_var(name: &str) -> Result<Option<NaiveDate>> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => {
            let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|_| HfaError::InvalidDate { input: raw.clone() })?;
            Ok(Some(date))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cutoffs_match_shutdown_and_reopening() {
        let cutoffs = PeriodCutoffs::default();
        assert_eq!(cutoffs.pre_covid_end, NaiveDate::from_ymd_opt(2020, 3, 1).unwrap());
        assert_eq!(
            cutoffs.during_covid_end,
            NaiveDate::from_ymd_opt(2021, 7, 31).unwrap()
        );
    }

    #[test]
    fn has_any_key_requires_one_provider() {
        let mut config = Config::default();
        assert!(!config.has_any_key());

        config.api_football_key = Some("k".to_string());
        assert!(config.has_any_key());
    }

    #[test]
    fn explicit_db_path_wins_over_cache_dir() {
        let config = Config {
            db_path: Some(PathBuf::from("/tmp/test.db")),
            ..Config::default()
        };
        assert_eq!(config.database_path().unwrap(), PathBuf::from("/tmp/test.db"));
    }
}
