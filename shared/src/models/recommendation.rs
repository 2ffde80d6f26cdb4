//! Crop recommendation models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::WeatherSnapshot;

/// Raw recommendation form as submitted by a caller.
///
/// Every field is optional on the wire so that a missing value surfaces as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecommendationInput {
    pub district: Option<String>,
    #[serde(rename = "Nitrogen")]
    pub nitrogen: Option<f64>,
    #[serde(rename = "Phosphorus")]
    pub phosphorus: Option<f64>,
    #[serde(rename = "Potassium")]
    pub potassium: Option<f64>,
    #[serde(rename = "pH_Value")]
    pub ph_value: Option<f64>,
}

/// A validated recommendation request
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    pub district: String,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph_value: f64,
}

/// Feature vector sent to the crop inference endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropFeatures {
    #[serde(rename = "Nitrogen")]
    pub nitrogen: f64,
    #[serde(rename = "Phosphorus")]
    pub phosphorus: f64,
    #[serde(rename = "Potassium")]
    pub potassium: f64,
    #[serde(rename = "Temperature")]
    pub temperature: f64,
    #[serde(rename = "Humidity")]
    pub humidity: f64,
    #[serde(rename = "pH_Value")]
    pub ph_value: f64,
    #[serde(rename = "Rainfall")]
    pub rainfall: f64,
}

impl CropFeatures {
    /// Merge soil parameters with the resolved weather
    pub fn new(request: &RecommendationRequest, weather: &WeatherSnapshot) -> Self {
        Self {
            nitrogen: request.nitrogen,
            phosphorus: request.phosphorus,
            potassium: request.potassium,
            temperature: weather.temperature,
            humidity: weather.humidity,
            ph_value: request.ph_value,
            rainfall: weather.rainfall,
        }
    }
}

/// Weather block of a recommendation response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationWeather {
    pub district: String,
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
}

/// Combined weather and inference payload returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CombinedResult {
    pub weather: RecommendationWeather,
    /// Raw inference payload, passed through untouched
    pub recommendation: serde_json::Value,
}

/// Append-only history entry of a successful recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationRecord {
    pub user_id: Option<Uuid>,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph_value: f64,
    pub district: String,
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub result: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl RecommendationRecord {
    pub fn new(
        user_id: Option<Uuid>,
        request: &RecommendationRequest,
        weather: &WeatherSnapshot,
        result: serde_json::Value,
    ) -> Self {
        Self {
            user_id,
            nitrogen: request.nitrogen,
            phosphorus: request.phosphorus,
            potassium: request.potassium,
            ph_value: request.ph_value,
            district: request.district.clone(),
            temperature: weather.temperature,
            humidity: weather.humidity,
            rainfall: weather.rainfall,
            result,
            created_at: Utc::now(),
        }
    }
}
