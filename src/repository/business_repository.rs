use std::collections::HashSet;

use sqlx::PgPool;
use tracing::debug;

use crate::domain::models::{Business, Page};
use crate::error::ServiceResult;
use crate::repository::BusinessStore;

/// Read-only Postgres adapter for business lookups
#[derive(Clone)]
pub struct PostgresBusinessStore {
    pool: PgPool,
}

impl PostgresBusinessStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl BusinessStore for PostgresBusinessStore {
    async fn find_by_categories(
        &self,
        category_ids: &HashSet<i64>,
        active_only: bool,
        page: i32,
        page_size: i32,
    ) -> ServiceResult<Page<Business>> {
        let ids: Vec<i64> = category_ids.iter().copied().collect();
        let offset = i64::from(page) * i64::from(page_size);

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(DISTINCT b.id)
            FROM businesses b
            JOIN business_categories bc ON bc.business_id = b.id
            WHERE bc.category_id = ANY($1)
              AND (b.active OR NOT $2)
            "#,
        )
        .bind(&ids)
        .bind(active_only)
        .fetch_one(&self.pool)
        .await?;

        let businesses = sqlx::query_as::<_, Business>(
            r#"
            SELECT b.id, b.name, b.rating, b.review_count, b.active,
                   array_agg(bc.category_id) AS category_ids
            FROM businesses b
            JOIN business_categories bc ON bc.business_id = b.id
            WHERE b.id IN (
                SELECT business_id FROM business_categories
                WHERE category_id = ANY($1)
            )
              AND (b.active OR NOT $2)
            GROUP BY b.id
            ORDER BY b.id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(&ids)
        .bind(active_only)
        .bind(i64::from(page_size))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        debug!(
            categories = ids.len(),
            page,
            page_size,
            total,
            "Fetched businesses by category set"
        );
        Ok(Page::from_parts(businesses, total, page, page_size))
    }
}
