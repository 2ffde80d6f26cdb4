//! Weather data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weather reading used as model input
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub humidity: f64,
    /// Millimetres; zero when the provider reports no precipitation
    pub rainfall: f64,
}

/// Normalized current conditions for a city or district
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedWeather {
    pub city: String,
    pub country: Option<String>,
    pub temperature: f64,
    pub feels_like: Option<f64>,
    pub humidity: f64,
    pub pressure: Option<f64>,
    pub wind: Wind,
    pub precipitation: f64,
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wind {
    pub speed: Option<f64>,
    pub deg: Option<f64>,
}

/// Envelope for the weather endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherResponse {
    pub weather: NormalizedWeather,
}
