//! AgriConnect backend
//!
//! HTTP API for crop recommendation, weather and price lookups, and the
//! farmers' marketplace.

use std::sync::Arc;

use axum::{middleware::from_fn_with_state, routing::get, Router};
use sqlx::PgPool;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;

pub use config::Config;

use external::{MarketClient, MlClient, WeatherClient};
use services::{PgHistoryStore, PriceService, RecommendationService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<Config>,
    pub recommendations: RecommendationService,
    pub prices: PriceService,
}

impl AppState {
    /// Wire the production providers from configuration
    pub fn from_config(db: PgPool, config: Config) -> Result<Self, reqwest::Error> {
        let weather = Arc::new(WeatherClient::new(&config.weather)?);
        let ml = Arc::new(MlClient::new(&config.ml)?);
        let market = Arc::new(MarketClient::new(&config.market)?);
        let history = Arc::new(PgHistoryStore::new(db.clone()));

        Ok(Self {
            recommendations: RecommendationService::new(weather, ml.clone(), history),
            prices: PriceService::new(ml, market),
            db,
            config: Arc::new(config),
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest(
            "/api",
            routes::api_routes()
                .layer(from_fn_with_state(state.clone(), middleware::auth_middleware)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "AgriConnect Backend Running"
}
