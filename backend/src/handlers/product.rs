//! HTTP handlers for marketplace products

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use super::json_body;
use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::product::{CreateProductInput, Product, UpdateProductInput};
use crate::services::ProductService;
use crate::AppState;

/// Product wrapped with a status message
#[derive(Debug, Serialize)]
pub struct ProductMessage {
    pub message: String,
    pub product: Product,
}

/// Create a product listing
pub async fn create_product(
    State(state): State<AppState>,
    current_user: CurrentUser,
    payload: Result<Json<CreateProductInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ProductMessage>)> {
    let input = json_body(payload)?;
    let service = ProductService::new(state.db);
    let product = service
        .create_product(current_user.0.user_id, input)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ProductMessage {
            message: "Product created successfully".to_string(),
            product,
        }),
    ))
}

/// List every product (public)
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let service = ProductService::new(state.db);
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// List the caller's own products
pub async fn list_my_products(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<Product>>> {
    let service = ProductService::new(state.db);
    let products = service
        .list_farmer_products(current_user.0.user_id)
        .await?;
    Ok(Json(products))
}

/// Update one of the caller's products
pub async fn update_product(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(product_id): Path<Uuid>,
    payload: Result<Json<UpdateProductInput>, JsonRejection>,
) -> AppResult<Json<ProductMessage>> {
    let input = json_body(payload)?;
    let service = ProductService::new(state.db);
    let product = service
        .update_product(current_user.0.user_id, product_id, input)
        .await?;

    Ok(Json(ProductMessage {
        message: "Product updated successfully".to_string(),
        product,
    }))
}
