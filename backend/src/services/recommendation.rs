//! Crop recommendation service
//!
//! Combines a weather lookup for the district with a call to the crop
//! recommendation model, records the outcome in history, and returns one
//! combined payload.
//!
//! Failure policy:
//! - a missing input fails before any outbound call
//! - a failed weather lookup ends the call as not found; there is no
//!   fallback weather
//! - a failed inference call ends the call as a dependency failure
//! - a failed history write is logged and the caller still receives the
//!   recommendation
//!
//! Only fully successful calls are written to history.

use std::sync::Arc;

use shared::{
    validate_recommendation_input, CombinedResult, CropFeatures, NormalizedWeather,
    RecommendationInput, RecommendationRecord, RecommendationRequest, RecommendationWeather,
    MISSING_LOCATION,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::external::{InferenceProvider, WeatherProvider};
use crate::services::history::HistoryStore;

pub const WEATHER_NOT_FOUND: &str = "District not found or weather lookup failed.";
pub const RECOMMENDATION_FAILED: &str = "Crop recommendation failed.";
pub const WEATHER_FETCH_FAILED: &str = "Failed to fetch weather";

/// Recommendation aggregator
#[derive(Clone)]
pub struct RecommendationService {
    weather: Arc<dyn WeatherProvider>,
    inference: Arc<dyn InferenceProvider>,
    history: Arc<dyn HistoryStore>,
}

impl RecommendationService {
    pub fn new(
        weather: Arc<dyn WeatherProvider>,
        inference: Arc<dyn InferenceProvider>,
        history: Arc<dyn HistoryStore>,
    ) -> Self {
        Self {
            weather,
            inference,
            history,
        }
    }

    /// Recommend crops for a soil sample in a district.
    ///
    /// `user_id` is attached to the history record; `None` for anonymous
    /// callers.
    pub async fn recommend(
        &self,
        input: &RecommendationInput,
        user_id: Option<Uuid>,
    ) -> AppResult<CombinedResult> {
        let request = validate_recommendation_input(input)
            .map_err(|msg| AppError::Validation(msg.to_string()))?;

        self.recommend_validated(request, user_id).await
    }

    async fn recommend_validated(
        &self,
        request: RecommendationRequest,
        user_id: Option<Uuid>,
    ) -> AppResult<CombinedResult> {
        let current = self
            .weather
            .current(&request.district)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    tracing::info!(district = %request.district, "Unknown district");
                } else {
                    tracing::warn!(district = %request.district, error = %e, "Weather lookup failed");
                }
                AppError::NotFound(WEATHER_NOT_FOUND.to_string())
            })?;
        let snapshot = current.snapshot();

        tracing::debug!(
            district = %request.district,
            temperature = snapshot.temperature,
            humidity = snapshot.humidity,
            rainfall = snapshot.rainfall,
            "Resolved weather"
        );

        let features = CropFeatures::new(&request, &snapshot);
        let result = self.inference.predict_crop(&features).await.map_err(|e| {
            tracing::error!(district = %request.district, error = %e, "Crop inference failed");
            AppError::Dependency(RECOMMENDATION_FAILED.to_string())
        })?;

        let record = RecommendationRecord::new(user_id, &request, &snapshot, result.clone());
        match self.history.append(&record).await {
            Ok(id) => tracing::debug!(%id, district = %request.district, "Stored recommendation"),
            Err(e) => tracing::error!(
                district = %request.district,
                error = %e,
                "Failed to store recommendation history"
            ),
        }

        Ok(CombinedResult {
            weather: RecommendationWeather {
                district: request.district,
                temperature: snapshot.temperature,
                humidity: snapshot.humidity,
                rainfall: snapshot.rainfall,
            },
            recommendation: result,
        })
    }

    /// Current conditions for a city or district. Nothing is stored.
    pub async fn get_weather(&self, location: &str) -> AppResult<NormalizedWeather> {
        let location = location.trim();
        if location.is_empty() {
            return Err(AppError::Validation(MISSING_LOCATION.to_string()));
        }

        let current = self.weather.current(location).await.map_err(|e| {
            tracing::error!(location, error = %e, "Weather fetch failed");
            AppError::Dependency(WEATHER_FETCH_FAILED.to_string())
        })?;

        Ok(current.normalize())
    }
}
