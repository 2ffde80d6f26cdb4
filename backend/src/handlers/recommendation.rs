//! HTTP handlers for crop recommendation and weather lookup

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde::Deserialize;
use shared::{resolve_location_query, CombinedResult, RecommendationInput, WeatherResponse};

use super::json_body;
use crate::error::{AppError, AppResult};
use crate::middleware::MaybeUser;
use crate::AppState;

/// Recommend crops for a soil sample; login is optional
pub async fn recommend_crop(
    State(state): State<AppState>,
    user: MaybeUser,
    payload: Result<Json<RecommendationInput>, JsonRejection>,
) -> AppResult<Json<CombinedResult>> {
    let input = json_body(payload)?;
    let result = state
        .recommendations
        .recommend(&input, user.user_id())
        .await?;
    Ok(Json(result))
}

/// Query parameters for weather lookup; the first non-blank one wins
#[derive(Debug, Default, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
    pub district: Option<String>,
    pub q: Option<String>,
}

/// Current weather for a city or district
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<WeatherResponse>> {
    let location = resolve_location_query(
        query.city.as_deref(),
        query.district.as_deref(),
        query.q.as_deref(),
    )
    .map_err(|msg| AppError::Validation(msg.to_string()))?;

    let weather = state.recommendations.get_weather(location).await?;
    Ok(Json(WeatherResponse { weather }))
}
