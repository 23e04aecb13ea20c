//! Error types for the football home-advantage pipeline

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HfaError>;

#[derive(Error, Debug)]
pub enum HfaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("no usable API key: set {env_vars}")]
    Auth { env_vars: String },

    #[error("data temporarily unavailable: {reason}")]
    Upstream { reason: String },

    #[error("unknown league: {name}")]
    UnknownLeague { name: String },

    #[error("unknown season: {label} (expected e.g. 2019/2020)")]
    UnknownSeason { label: String },

    #[error("unknown period: {label} (expected pre-covid, during-covid, or post-covid)")]
    UnknownPeriod { label: String },

    #[error("invalid date: {input}")]
    InvalidDate { input: String },

    #[error("cache error: {message}")]
    Cache { message: String },
}

impl HfaError {
    /// Transient failures fall through to the other provider; auth failures
    /// must not burn the retry budget.
    pub fn is_transient(&self) -> bool {
        match self {
            HfaError::Upstream { .. } => true,
            HfaError::Http(e) => !is_auth_status(e),
            _ => false,
        }
    }
}

fn is_auth_status(err: &reqwest::Error) -> bool {
    err.status()
        .map(|s| s == reqwest::StatusCode::UNAUTHORIZED || s == reqwest::StatusCode::FORBIDDEN)
        .unwrap_or(false)
}
