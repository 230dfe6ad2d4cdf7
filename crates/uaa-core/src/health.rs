use std::fmt;

use tracing::debug;

use crate::client::endpoint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Health {
    Healthy,
    Unhealthy(String),
}

impl Health {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy => write!(f, "ok"),
            Self::Unhealthy(reason) => write!(f, "unhealthy ({reason})"),
        }
    }
}

/// Probes `GET {base_url}/healthz`. Only a 200 counts as healthy.
pub async fn check_health(client: &reqwest::Client, base_url: &str) -> Health {
    let url = endpoint(base_url, "/healthz");
    match client.get(&url).send().await {
        Ok(response) if response.status() == reqwest::StatusCode::OK => Health::Healthy,
        Ok(response) => {
            debug!(url = %url, status = %response.status(), "health check failed");
            Health::Unhealthy(format!("status {}", response.status()))
        }
        Err(err) => {
            debug!(url = %url, "health check request failed: {err}");
            Health::Unhealthy(err.to_string())
        }
    }
}
