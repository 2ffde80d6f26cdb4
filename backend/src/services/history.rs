//! Recommendation history store
//!
//! History is append-only: records are inserted once and never updated or
//! deleted.

use async_trait::async_trait;
use shared::RecommendationRecord;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AppResult;

/// Append-only sink for recommendation history
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Insert a record and return its id
    async fn append(&self, record: &RecommendationRecord) -> AppResult<Uuid>;
}

/// PostgreSQL-backed history
#[derive(Clone)]
pub struct PgHistoryStore {
    db: PgPool,
}

impl PgHistoryStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HistoryStore for PgHistoryStore {
    async fn append(&self, record: &RecommendationRecord) -> AppResult<Uuid> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO recommendations (
                id, user_id, nitrogen, phosphorus, potassium, ph_value,
                district, temperature, humidity, rainfall, result, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(id)
        .bind(record.user_id)
        .bind(record.nitrogen)
        .bind(record.phosphorus)
        .bind(record.potassium)
        .bind(record.ph_value)
        .bind(&record.district)
        .bind(record.temperature)
        .bind(record.humidity)
        .bind(record.rainfall)
        .bind(&record.result)
        .bind(record.created_at)
        .execute(&self.db)
        .await?;

        Ok(id)
    }
}

/// In-process history, used when no database is wired in (tests, demos)
#[derive(Default)]
pub struct InMemoryHistoryStore {
    records: RwLock<Vec<(Uuid, RecommendationRecord)>>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored record, oldest first
    pub async fn records(&self) -> Vec<RecommendationRecord> {
        self.records
            .read()
            .await
            .iter()
            .map(|(_, record)| record.clone())
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn append(&self, record: &RecommendationRecord) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        self.records.write().await.push((id, record.clone()));
        Ok(id)
    }
}
