//! HTTP handlers

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::{AppError, AppResult};

pub mod crop;
pub mod health;
pub mod order;
pub mod price;
pub mod product;
pub mod recommendation;

pub use crop::{get_crop, list_crops};
pub use health::health_check;
pub use order::{list_my_orders, place_order};
pub use price::{get_market_prices, predict_price};
pub use product::{create_product, list_my_products, list_products, update_product};
pub use recommendation::{get_weather, recommend_crop};

/// Unwrap a JSON body, reporting malformed input as a validation error
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| {
            AppError::Validation(format!("Invalid request body: {}", rejection.body_text()))
        })
}
