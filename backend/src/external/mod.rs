//! External API integrations
//!
//! Each provider sits behind a trait so services can be exercised against
//! stubs. The HTTP clients share one failure vocabulary, [`ProviderError`];
//! services decide how a failure is reported to the caller.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod inference;
pub mod market;
pub mod weather;

pub use inference::{InferenceProvider, MlClient};
pub use market::{MarketClient, MarketDataProvider, MarketPriceFilters};
pub use weather::{WeatherClient, WeatherProvider};

/// Failure of an outbound provider call
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode provider response: {0}")]
    Decode(String),

    #[error("invalid provider URL: {0}")]
    InvalidUrl(String),
}

impl ProviderError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else if err.is_decode() {
            ProviderError::Decode(err.to_string())
        } else {
            ProviderError::Transport(err.to_string())
        }
    }

    /// Whether the provider answered with 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::Status { status: 404, .. })
    }
}

/// Build an HTTP client whose every request is bounded by `timeout`
pub(crate) fn http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}

/// Check the status and decode a JSON body
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await.map_err(ProviderError::from_reqwest)?;
    serde_json::from_slice(&bytes).map_err(|e| ProviderError::Decode(e.to_string()))
}
