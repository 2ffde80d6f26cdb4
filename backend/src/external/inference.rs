//! ML inference client
//!
//! Client for the Python prediction service that hosts the crop
//! recommendation and crop price models.

use async_trait::async_trait;
use reqwest::{Client, Url};
use shared::CropFeatures;

use super::{http_client, read_json, ProviderError};
use crate::config::MlConfig;

/// Remote prediction models. Results are opaque and passed through.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Rank crops for the given soil and weather features
    async fn predict_crop(&self, features: &CropFeatures) -> Result<serde_json::Value, ProviderError>;

    /// Forecast the market price of a crop
    async fn predict_price(&self, crop: &str) -> Result<serde_json::Value, ProviderError>;
}

/// Client for the ML prediction service
#[derive(Clone)]
pub struct MlClient {
    api_endpoint: String,
    http_client: Client,
}

impl MlClient {
    /// Create a new ML client from configuration
    pub fn new(config: &MlConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            api_endpoint: config.api_endpoint.clone(),
            http_client: http_client(config.timeout())?,
        })
    }

    /// Append path segments to the endpoint, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&self.api_endpoint)
            .map_err(|e| ProviderError::InvalidUrl(format!("{}: {}", self.api_endpoint, e)))?;
        url.path_segments_mut()
            .map_err(|_| ProviderError::InvalidUrl(self.api_endpoint.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl InferenceProvider for MlClient {
    async fn predict_crop(&self, features: &CropFeatures) -> Result<serde_json::Value, ProviderError> {
        let url = self.endpoint(&["predict", "crop"])?;

        let response = self
            .http_client
            .post(url)
            .json(features)
            .send()
            .await
            .map_err(ProviderError::from_reqwest)?;

        read_json(response).await
    }

    async fn predict_price(&self, crop: &str) -> Result<serde_json::Value, ProviderError> {
        let url = self.endpoint(&["predict", crop])?;

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(ProviderError::from_reqwest)?;

        read_json(response).await
    }
}
