use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyError {
    /// The request did not complete or the service answered with a non-200.
    #[error("request to {url} failed: {reason}")]
    Request {
        url: String,
        status: Option<StatusCode>,
        reason: String,
    },
    /// A 200 response whose body is not the expected shape.
    #[error("unable to parse response from {url}: {source}")]
    Parse {
        url: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unable to read response from {url}: {source}")]
    Unknown {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl KeyError {
    pub fn url(&self) -> &str {
        match self {
            Self::Request { url, .. } | Self::Parse { url, .. } | Self::Unknown { url, .. } => url,
        }
    }
}
