use sqlx::PgPool;
use tracing::debug;

use crate::domain::models::Category;
use crate::error::ServiceResult;
use crate::repository::CategoryStore;

/// Read-only Postgres adapter for category lookups
#[derive(Clone)]
pub struct PostgresCategoryStore {
    pool: PgPool,
}

impl PostgresCategoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CategoryStore for PostgresCategoryStore {
    async fn category_exists(&self, id: i64) -> ServiceResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM categories
                WHERE id = $1
            )
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn direct_children(
        &self,
        parent_id: i64,
        include_inactive: bool,
    ) -> ServiceResult<Vec<Category>> {
        let children = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, parent_id, active, created_at
            FROM categories
            WHERE parent_id = $1
              AND (active OR $2)
            ORDER BY id
            "#,
        )
        .bind(parent_id)
        .bind(include_inactive)
        .fetch_all(&self.pool)
        .await?;

        debug!(parent_id, count = children.len(), "Fetched direct children");
        Ok(children)
    }
}
