//! HTTP handlers for marketplace orders

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use super::json_body;
use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::order::{Order, PlaceOrderInput};
use crate::services::OrderService;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct OrderMessage {
    pub message: String,
    pub order: Order,
}

/// Place an order on a product
pub async fn place_order(
    State(state): State<AppState>,
    current_user: CurrentUser,
    payload: Result<Json<PlaceOrderInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<OrderMessage>)> {
    let input = json_body(payload)?;
    let service = OrderService::new(state.db);
    let order = service.place_order(current_user.0.user_id, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(OrderMessage {
            message: "Order placed successfully".to_string(),
            order,
        }),
    ))
}

/// List the caller's orders
pub async fn list_my_orders(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<Order>>> {
    let service = OrderService::new(state.db);
    let orders = service.list_buyer_orders(current_user.0.user_id).await?;
    Ok(Json(orders))
}
