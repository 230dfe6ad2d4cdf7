use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::error::KeyError;
use super::types::{Jwk, JwkSet};
use crate::client::endpoint;

pub const TOKEN_KEYS_PATH: &str = "/token_keys";
pub const TOKEN_KEY_PATH: &str = "/token_key";

/// Verification keys for `base_url`.
///
/// Asks the bulk endpoint first. When that request fails or answers with a
/// non-200, the single-key endpoint is tried and its key returned as a
/// one-element list; an error from that second request is what the caller
/// sees. A 200 from the bulk endpoint with an unreadable body is not retried.
pub async fn resolve_token_keys(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<Vec<Jwk>, KeyError> {
    match fetch_token_keys(client, base_url).await {
        Ok(keys) => Ok(keys),
        Err(err @ KeyError::Request { .. }) => {
            info!(url = %err.url(), "bulk key endpoint unavailable; trying single key endpoint");
            debug!("bulk key request failed: {err}");
            let key = fetch_token_key(client, base_url).await?;
            Ok(vec![key])
        }
        Err(err) => Err(err),
    }
}

/// Keys from the bulk endpoint only.
pub async fn fetch_token_keys(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<Vec<Jwk>, KeyError> {
    let url = endpoint(base_url, TOKEN_KEYS_PATH);
    let set: JwkSet = get_json(client, &url).await?;
    Ok(set.keys)
}

/// The key from the single-key endpoint.
pub async fn fetch_token_key(client: &reqwest::Client, base_url: &str) -> Result<Jwk, KeyError> {
    let url = endpoint(base_url, TOKEN_KEY_PATH);
    get_json(client, &url).await
}

async fn get_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T, KeyError> {
    debug!(method = "GET", url = %url, "http request");
    let start = std::time::Instant::now();
    let response = client
        .get(url)
        .header(ACCEPT, HeaderValue::from_static("application/json"))
        .send()
        .await
        .map_err(|err| KeyError::Request {
            url: url.to_string(),
            status: None,
            reason: err.to_string(),
        })?;
    let status = response.status();
    debug!(
        method = "GET",
        url = %url,
        status = %status,
        elapsed_ms = start.elapsed().as_millis(),
        "http response"
    );
    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        return Err(KeyError::Request {
            url: url.to_string(),
            status: Some(status),
            reason: format!("{status} {body}").trim_end().to_string(),
        });
    }
    let body = response.text().await.map_err(|source| KeyError::Unknown {
        url: url.to_string(),
        source,
    })?;
    serde_json::from_str(&body).map_err(|source| KeyError::Parse {
        url: url.to_string(),
        body,
        source,
    })
}
