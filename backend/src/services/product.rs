//! Marketplace product service

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};

pub const MISSING_PRODUCT_FIELDS: &str = "Name, price and quantity are required.";

/// Product listing
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub farmer_id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a product
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateProductInput {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    pub price: Option<Decimal>,
    #[validate(required, range(min = 1))]
    pub quantity: Option<i32>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Input for updating a product; absent fields keep their value
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProductInput {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub price: Option<Decimal>,
    #[validate(range(min = 0))]
    pub quantity: Option<i32>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Validated fields of a new product
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl CreateProductInput {
    pub fn into_new_product(self) -> AppResult<NewProduct> {
        let invalid = || AppError::Validation(MISSING_PRODUCT_FIELDS.to_string());

        self.validate().map_err(|_| invalid())?;

        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(invalid)?;
        let price = self.price.filter(|p| *p > Decimal::ZERO).ok_or_else(invalid)?;
        let quantity = self.quantity.ok_or_else(invalid)?;

        Ok(NewProduct {
            name,
            price,
            quantity,
            description: self.description,
            image: self.image,
        })
    }
}

impl UpdateProductInput {
    pub fn check(&self) -> AppResult<()> {
        self.validate()
            .map_err(|e| AppError::Validation(format!("Invalid product update: {}", e)))?;

        if let Some(ref name) = self.name {
            if name.trim().is_empty() {
                return Err(AppError::Validation(
                    "Product name cannot be empty".to_string(),
                ));
            }
        }
        if let Some(price) = self.price {
            if price <= Decimal::ZERO {
                return Err(AppError::Validation(
                    "Price must be greater than zero".to_string(),
                ));
            }
        }
        Ok(())
    }
}

const PRODUCT_COLUMNS: &str =
    "id, farmer_id, name, price, quantity, description, image, created_at, updated_at";

/// Product service for marketplace listings
#[derive(Clone)]
pub struct ProductService {
    db: PgPool,
}

impl ProductService {
    /// Create a new ProductService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a listing owned by `farmer_id`
    pub async fn create_product(
        &self,
        farmer_id: Uuid,
        input: CreateProductInput,
    ) -> AppResult<Product> {
        let new = input.into_new_product()?;

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            INSERT INTO products (id, farmer_id, name, price, quantity, description, image)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(farmer_id)
        .bind(&new.name)
        .bind(new.price)
        .bind(new.quantity)
        .bind(&new.description)
        .bind(&new.image)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(product_id = %product.id, %farmer_id, "Product created");

        Ok(product)
    }

    /// All listings, newest first
    pub async fn list_products(&self) -> AppResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products ORDER BY created_at DESC",
            PRODUCT_COLUMNS
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(products)
    }

    /// Listings owned by a farmer, newest first
    pub async fn list_farmer_products(&self, farmer_id: Uuid) -> AppResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE farmer_id = $1 ORDER BY created_at DESC",
            PRODUCT_COLUMNS
        ))
        .bind(farmer_id)
        .fetch_all(&self.db)
        .await?;

        Ok(products)
    }

    /// Update a listing; only its owner may do so
    pub async fn update_product(
        &self,
        farmer_id: Uuid,
        product_id: Uuid,
        input: UpdateProductInput,
    ) -> AppResult<Product> {
        input.check()?;

        let existing = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        if existing.farmer_id != farmer_id {
            return Err(AppError::Forbidden(
                "Not authorized to update this product".to_string(),
            ));
        }

        let name = input.name.map(|n| n.trim().to_string()).unwrap_or(existing.name);
        let price = input.price.unwrap_or(existing.price);
        let quantity = input.quantity.unwrap_or(existing.quantity);
        let description = input.description.or(existing.description);
        let image = input.image.or(existing.image);

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products
            SET name = $2, price = $3, quantity = $4, description = $5, image = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        ))
        .bind(product_id)
        .bind(&name)
        .bind(price)
        .bind(quantity)
        .bind(&description)
        .bind(&image)
        .fetch_one(&self.db)
        .await?;

        Ok(product)
    }
}
