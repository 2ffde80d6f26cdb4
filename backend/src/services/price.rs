//! Crop price service
//!
//! Thin proxies over the price prediction model and the Agmarknet market
//! data API. Both payloads are returned as received.

use std::sync::Arc;

use shared::validate_crop_name;

use crate::error::{AppError, AppResult};
use crate::external::{InferenceProvider, MarketDataProvider, MarketPriceFilters};

pub const PRICE_PREDICTION_FAILED: &str = "Price prediction service failed.";
pub const MARKET_PRICES_FAILED: &str = "Failed to fetch market prices";

#[derive(Clone)]
pub struct PriceService {
    inference: Arc<dyn InferenceProvider>,
    market: Arc<dyn MarketDataProvider>,
}

impl PriceService {
    pub fn new(inference: Arc<dyn InferenceProvider>, market: Arc<dyn MarketDataProvider>) -> Self {
        Self { inference, market }
    }

    /// Forecast the price of a crop
    pub async fn predict(&self, crop: Option<&str>) -> AppResult<serde_json::Value> {
        let crop = validate_crop_name(crop).map_err(|msg| AppError::Validation(msg.to_string()))?;

        self.inference.predict_price(crop).await.map_err(|e| {
            tracing::error!(crop, error = %e, "Price prediction failed");
            AppError::Dependency(PRICE_PREDICTION_FAILED.to_string())
        })
    }

    /// Current mandi prices matching the filters
    pub async fn market_prices(&self, filters: &MarketPriceFilters) -> AppResult<serde_json::Value> {
        self.market.market_prices(filters).await.map_err(|e| {
            tracing::error!(?filters, error = %e, "Market price lookup failed");
            AppError::Dependency(MARKET_PRICES_FAILED.to_string())
        })
    }
}
