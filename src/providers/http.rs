//! Shared HTTP plumbing for the two data providers.

use crate::error::{HfaError, Result};
use reqwest::{header::HeaderMap, Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Attempts per request before giving up on a provider.
pub const MAX_RETRIES: u32 = 3;
/// Linear backoff step: attempt n sleeps n times this long.
pub const RETRY_BACKOFF: Duration = Duration::from_secs(2);

/// Build the process-wide HTTP client.
pub fn build_client() -> Result<Client> {
    Ok(Client::builder().timeout(Duration::from_secs(30)).build()?)
}

/// GET a JSON payload with the retry budget applied.
///
/// Transient failures (network errors, 429, 5xx) are retried with linear
/// backoff. 401/403 returns immediately so a bad key never burns the budget.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    headers: HeaderMap,
    query: &[(&str, String)],
) -> Result<T> {
    let mut last_err: Option<HfaError> = None;

    for attempt in 1..=MAX_RETRIES {
        match client
            .get(url)
            .headers(headers.clone())
            .query(query)
            .send()
            .await
        {
            Ok(resp) => {
                let status = resp.status();
                if status.is_success() {
                    return Ok(resp.json::<T>().await?);
                }
                if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                    if let Err(e) = resp.error_for_status_ref() {
                        return Err(HfaError::Http(e));
                    }
                }
                last_err = Some(HfaError::Upstream {
                    reason: format!("{url} returned {status}"),
                });
            }
            Err(e) => last_err = Some(HfaError::Http(e)),
        }

        if attempt < MAX_RETRIES {
            tokio::time::sleep(RETRY_BACKOFF * attempt).await;
        }
    }

    Err(last_err.unwrap_or(HfaError::Upstream {
        reason: format!("{url}: retry budget exhausted"),
    }))
}
