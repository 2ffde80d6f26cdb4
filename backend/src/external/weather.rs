//! Weather API client for fetching current conditions
//!
//! Integrates with the OpenWeatherMap current weather endpoint, resolving a
//! city or district name.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use shared::{NormalizedWeather, WeatherSnapshot, Wind};

use super::{http_client, read_json, ProviderError};
use crate::config::WeatherConfig;

/// Source of current weather conditions
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions for a location name
    async fn current(&self, location: &str) -> Result<OWMCurrentResponse, ProviderError>;
}

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Clone, Deserialize)]
pub struct OWMCurrentResponse {
    #[serde(default)]
    pub name: String,
    pub main: OWMMain,
    #[serde(default)]
    pub weather: Vec<OWMWeather>,
    pub wind: Option<OWMWind>,
    pub rain: Option<OWMPrecipitation>,
    pub snow: Option<OWMPrecipitation>,
    pub sys: Option<OWMSys>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OWMMain {
    pub temp: f64,
    pub humidity: f64,
    pub feels_like: Option<f64>,
    pub pressure: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OWMWeather {
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OWMWind {
    pub speed: Option<f64>,
    pub deg: Option<f64>,
}

/// Precipitation volume, only present while it is raining or snowing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OWMPrecipitation {
    #[serde(rename = "1h")]
    pub one_hour: Option<f64>,
    #[serde(rename = "3h")]
    pub three_hour: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OWMSys {
    pub country: Option<String>,
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
}

impl OWMPrecipitation {
    fn volume(&self) -> Option<f64> {
        self.one_hour.or(self.three_hour)
    }
}

impl OWMCurrentResponse {
    /// Rainfall in mm: the 1h value, else the 3h value, else zero
    pub fn rainfall(&self) -> f64 {
        self.rain.as_ref().and_then(OWMPrecipitation::volume).unwrap_or(0.0)
    }

    /// Rain first, then snow, each at 1h before 3h granularity, else zero
    pub fn precipitation(&self) -> f64 {
        self.rain
            .as_ref()
            .and_then(OWMPrecipitation::volume)
            .or_else(|| self.snow.as_ref().and_then(OWMPrecipitation::volume))
            .unwrap_or(0.0)
    }

    /// Model input reading
    pub fn snapshot(&self) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature: self.main.temp,
            humidity: self.main.humidity,
            rainfall: self.rainfall(),
        }
    }

    /// Convert the provider payload to our format
    pub fn normalize(&self) -> NormalizedWeather {
        let sys = self.sys.as_ref();

        NormalizedWeather {
            city: self.name.clone(),
            country: sys.and_then(|s| s.country.clone()),
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            humidity: self.main.humidity,
            pressure: self.main.pressure,
            wind: Wind {
                speed: self.wind.as_ref().and_then(|w| w.speed),
                deg: self.wind.as_ref().and_then(|w| w.deg),
            },
            precipitation: self.precipitation(),
            sunrise: sys.and_then(|s| s.sunrise).and_then(epoch_to_utc),
            sunset: sys.and_then(|s| s.sunset).and_then(epoch_to_utc),
            description: self.weather.first().map(|w| w.description.clone()),
        }
    }
}

/// Zero means the provider had no value
fn epoch_to_utc(seconds: i64) -> Option<DateTime<Utc>> {
    if seconds == 0 {
        return None;
    }
    DateTime::from_timestamp(seconds, 0)
}

impl WeatherClient {
    /// Create a new WeatherClient from configuration
    pub fn new(config: &WeatherConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: http_client(config.timeout())?,
            api_key: config.api_key.clone(),
            base_url: config.api_endpoint.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl WeatherProvider for WeatherClient {
    async fn current(&self, location: &str) -> Result<OWMCurrentResponse, ProviderError> {
        let url = format!("{}/weather", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", location),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(ProviderError::from_reqwest)?;

        read_json(response).await
    }
}
