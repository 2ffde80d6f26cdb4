//! Marketplace order service
//!
//! Placing an order reserves stock: the product row is locked, checked and
//! decremented in the same transaction that inserts the order.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

pub const MISSING_ORDER_FIELDS: &str = "Product and quantity are required.";
pub const INSUFFICIENT_STOCK: &str = "Insufficient stock";
pub const OWN_PRODUCT: &str = "You cannot order your own product";

/// Order lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Delivered,
    Cancelled,
}

/// Order as shown to its buyer
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
    pub id: Uuid,
    pub buyer_id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Input for placing an order
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderInput {
    pub product_id: Option<Uuid>,
    pub quantity: Option<i32>,
}

impl PlaceOrderInput {
    /// Product id and a positive quantity
    pub fn check(&self) -> AppResult<(Uuid, i32)> {
        match (self.product_id, self.quantity) {
            (Some(product_id), Some(quantity)) if quantity > 0 => Ok((product_id, quantity)),
            _ => Err(AppError::Validation(MISSING_ORDER_FIELDS.to_string())),
        }
    }
}

#[derive(Debug, FromRow)]
struct StockRow {
    farmer_id: Uuid,
    name: String,
    price: Decimal,
    quantity: i32,
}

/// Check a locked product row against an order request
fn check_stock(stock: &StockRow, buyer_id: Uuid, quantity: i32) -> AppResult<Decimal> {
    if stock.farmer_id == buyer_id {
        return Err(AppError::Validation(OWN_PRODUCT.to_string()));
    }
    if stock.quantity < quantity {
        return Err(AppError::Validation(INSUFFICIENT_STOCK.to_string()));
    }
    Ok(stock.price * Decimal::from(quantity))
}

/// Order service for marketplace purchases
#[derive(Clone)]
pub struct OrderService {
    db: PgPool,
}

impl OrderService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Place an order for `buyer_id`, reserving the stock
    pub async fn place_order(&self, buyer_id: Uuid, input: PlaceOrderInput) -> AppResult<Order> {
        let (product_id, quantity) = input.check()?;

        let mut tx = self.db.begin().await?;

        let stock = sqlx::query_as::<_, StockRow>(
            "SELECT farmer_id, name, price, quantity FROM products WHERE id = $1 FOR UPDATE",
        )
        .bind(product_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        let total_price = check_stock(&stock, buyer_id, quantity)?;

        sqlx::query(
            "UPDATE products SET quantity = quantity - $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(product_id)
        .bind(quantity)
        .execute(&mut *tx)
        .await?;

        let (id, created_at): (Uuid, DateTime<Utc>) = sqlx::query_as(
            r#"
            INSERT INTO orders (id, buyer_id, product_id, quantity, unit_price, total_price, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(buyer_id)
        .bind(product_id)
        .bind(quantity)
        .bind(stock.price)
        .bind(total_price)
        .bind(OrderStatus::Pending)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(order_id = %id, %buyer_id, %product_id, quantity, "Order placed");

        Ok(Order {
            id,
            buyer_id,
            product_id,
            product_name: stock.name,
            quantity,
            unit_price: stock.price,
            total_price,
            status: OrderStatus::Pending,
            created_at,
        })
    }

    /// Orders placed by a buyer, newest first
    pub async fn list_buyer_orders(&self, buyer_id: Uuid) -> AppResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT o.id, o.buyer_id, o.product_id, p.name AS product_name, o.quantity,
                   o.unit_price, o.total_price, o.status, o.created_at
            FROM orders o
            JOIN products p ON p.id = o.product_id
            WHERE o.buyer_id = $1
            ORDER BY o.created_at DESC
            "#,
        )
        .bind(buyer_id)
        .fetch_all(&self.db)
        .await?;

        Ok(orders)
    }
}
