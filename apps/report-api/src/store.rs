//! Feedback Store: read-only access to approved feedback, keyed by company name.
//!
//! The pipeline depends on the `FeedbackStore` trait; `PgFeedbackStore` is the
//! production backend. Company matching is case-insensitive and exact.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::models::feedback::{FeedbackEntry, FeedbackRow};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Feedback store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Approved feedback for one company, in submission order.
    async fn feedback_for_company(&self, company_name: &str)
        -> Result<Vec<FeedbackEntry>, StoreError>;

    /// Company names with approved feedback, one per case-insensitive name.
    /// Sorted by lowercased name in byte order; among case variants the
    /// byte-order smallest spelling is returned.
    async fn list_companies(&self) -> Result<Vec<String>, StoreError>;

    async fn count_for_company(&self, company_name: &str) -> Result<u64, StoreError>;
}

/// PostgreSQL-backed store over the `feedback` table.
#[derive(Clone)]
pub struct PgFeedbackStore {
    pool: PgPool,
}

impl PgFeedbackStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackStore for PgFeedbackStore {
    async fn feedback_for_company(
        &self,
        company_name: &str,
    ) -> Result<Vec<FeedbackEntry>, StoreError> {
        let rows = sqlx::query_as::<_, FeedbackRow>(
            r#"
            SELECT *
            FROM feedback
            WHERE LOWER(company_name) = LOWER($1) AND status = 'approved'
            ORDER BY created_at ASC
            "#,
        )
        .bind(company_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(FeedbackEntry::from).collect())
    }

    async fn list_companies(&self) -> Result<Vec<String>, StoreError> {
        Ok(sqlx::query_scalar::<_, String>(
            r#"
            SELECT MIN(company_name COLLATE "C") AS company_name
            FROM feedback
            WHERE status = 'approved'
            GROUP BY LOWER(company_name)
            ORDER BY LOWER(company_name) COLLATE "C" ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn count_for_company(&self, company_name: &str) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM feedback
            WHERE LOWER(company_name) = LOWER($1) AND status = 'approved'
            "#,
        )
        .bind(company_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.max(0) as u64)
    }
}
