//! HTTP handlers for crop prices

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde::Deserialize;

use super::json_body;
use crate::error::AppResult;
use crate::external::MarketPriceFilters;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PredictPriceInput {
    pub crop: Option<String>,
}

/// Forecast a crop price through the ML service
pub async fn predict_price(
    State(state): State<AppState>,
    payload: Result<Json<PredictPriceInput>, JsonRejection>,
) -> AppResult<Json<serde_json::Value>> {
    let input = json_body(payload)?;
    let prediction = state.prices.predict(input.crop.as_deref()).await?;
    Ok(Json(prediction))
}

/// Proxy Agmarknet market prices
pub async fn get_market_prices(
    State(state): State<AppState>,
    Query(filters): Query<MarketPriceFilters>,
) -> AppResult<Json<serde_json::Value>> {
    let prices = state.prices.market_prices(&filters).await?;
    Ok(Json(prices))
}
