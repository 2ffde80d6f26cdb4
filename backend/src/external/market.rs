//! Agmarknet market price client
//!
//! Proxies the data.gov.in daily commodity price resource.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{http_client, read_json, ProviderError};
use crate::config::MarketConfig;

/// Page size requested from the data API
const MARKET_PAGE_LIMIT: &str = "100";

/// Optional filters, named as the data API names them
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketPriceFilters {
    #[serde(rename = "State")]
    pub state: Option<String>,
    #[serde(rename = "District")]
    pub district: Option<String>,
    #[serde(rename = "Commodity")]
    pub commodity: Option<String>,
    /// DD/MM/YYYY
    #[serde(rename = "Arrival_Date")]
    pub arrival_date: Option<String>,
}

impl MarketPriceFilters {
    /// Query pairs for the data API, skipping absent or blank filters
    pub fn query_pairs(&self, api_key: &str) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("api-key".to_string(), api_key.to_string()),
            ("format".to_string(), "json".to_string()),
            ("limit".to_string(), MARKET_PAGE_LIMIT.to_string()),
        ];

        let filters = [
            ("State", &self.state),
            ("District", &self.district),
            ("Commodity", &self.commodity),
            ("Arrival_Date", &self.arrival_date),
        ];
        for (name, value) in filters {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                pairs.push((format!("filters[{}]", name), value.to_string()));
            }
        }

        pairs
    }
}

/// Source of commodity market prices
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn market_prices(
        &self,
        filters: &MarketPriceFilters,
    ) -> Result<serde_json::Value, ProviderError>;
}

/// Client for the Agmarknet data API
#[derive(Clone)]
pub struct MarketClient {
    client: Client,
    api_endpoint: String,
    api_key: String,
}

impl MarketClient {
    pub fn new(config: &MarketConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: http_client(config.timeout())?,
            api_endpoint: config.api_endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl MarketDataProvider for MarketClient {
    async fn market_prices(
        &self,
        filters: &MarketPriceFilters,
    ) -> Result<serde_json::Value, ProviderError> {
        let response = self
            .client
            .get(&self.api_endpoint)
            .query(&filters.query_pairs(&self.api_key))
            .send()
            .await
            .map_err(ProviderError::from_reqwest)?;

        read_json(response).await
    }
}
