use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use thiserror::Error;

use crate::config::Target;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("uaa-cli/", env!("CARGO_PKG_VERSION"));

pub const ZONE_SUBDOMAIN_HEADER: &str = "X-Identity-Zone-Subdomain";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to build http client: {0}")]
    Build(#[from] reqwest::Error),
    #[error("invalid zone subdomain: {0:?}")]
    InvalidZone(String),
}

/// Client for talking to an identity service.
///
/// `skip_ssl_validation` disables certificate verification entirely. A
/// non-empty `zone_subdomain` is sent with every request.
pub fn http_client(
    skip_ssl_validation: bool,
    zone_subdomain: &str,
) -> Result<reqwest::Client, ClientError> {
    let mut headers = HeaderMap::new();
    if !zone_subdomain.is_empty() {
        let value = HeaderValue::from_str(zone_subdomain)
            .map_err(|_| ClientError::InvalidZone(zone_subdomain.to_string()))?;
        headers.insert(ZONE_SUBDOMAIN_HEADER, value);
    }
    let client = reqwest::Client::builder()
        .danger_accept_invalid_certs(skip_ssl_validation)
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()?;
    Ok(client)
}

pub fn client_for_target(
    target: &Target,
    zone_subdomain: &str,
) -> Result<reqwest::Client, ClientError> {
    http_client(target.skip_ssl_validation, zone_subdomain)
}

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
