//! Route definitions for the AgriConnect platform

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/recommendation", recommendation_routes())
        .nest("/price", price_routes())
        .nest("/cropsdata", crop_routes())
        .nest("/products", product_routes())
        .nest("/orders", order_routes())
}

/// Crop recommendation and weather routes (login optional)
fn recommendation_routes() -> Router<AppState> {
    Router::new()
        .route("/recommend", post(handlers::recommend_crop))
        .route("/weather", get(handlers::get_weather))
}

/// Price prediction and market price routes (public)
fn price_routes() -> Router<AppState> {
    Router::new()
        .route("/predict", post(handlers::predict_price))
        .route("/market", get(handlers::get_market_prices))
}

/// Static crop requirement routes (public)
fn crop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_crops))
        .route("/:crop", get(handlers::get_crop))
}

/// Marketplace routes; writes and "my" listings require a login
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route("/my", get(handlers::list_my_products))
        .route("/:product_id", put(handlers::update_product))
}

/// Order routes (login required)
fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::place_order))
        .route("/my", get(handlers::list_my_orders))
}
