//! Liveness and dependency report

use std::time::Duration;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::AppState;

const DATABASE_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
    pub dependencies: DependencyReport,
}

/// Which outbound integrations are configured. Remote services are not
/// called from here.
#[derive(Debug, Serialize)]
pub struct DependencyReport {
    pub weather_api_key: bool,
    pub market_api_key: bool,
    pub ml_endpoint: String,
}

/// 200 when the database answers, 503 otherwise
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let probe = sqlx::query("SELECT 1").execute(&state.db);
    let database_up = matches!(
        tokio::time::timeout(DATABASE_PROBE_TIMEOUT, probe).await,
        Ok(Ok(_))
    );

    if !database_up {
        tracing::warn!("Health check: database unreachable");
    }

    let config = &state.config;
    let body = HealthResponse {
        status: if database_up { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database: if database_up { "connected" } else { "disconnected" },
        dependencies: DependencyReport {
            weather_api_key: !config.weather.api_key.is_empty(),
            market_api_key: !config.market.api_key.is_empty(),
            ml_endpoint: config.ml.api_endpoint.clone(),
        },
    };

    let status = if database_up {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(body))
}
