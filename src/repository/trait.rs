use std::collections::HashSet;

use crate::domain::models::{Business, Category, Page};
use crate::error::ServiceResult;

/// Read capabilities of the category store consumed by hierarchy
/// resolution. Implementations may be local tables or a remote service;
/// every call is an independent failure point.
#[async_trait::async_trait]
pub trait CategoryStore: Send + Sync {
    /// Check whether a category exists, regardless of its active flag
    async fn category_exists(&self, id: i64) -> ServiceResult<bool>;

    /// List the direct children of a category. With `include_inactive`
    /// false, inactive children are omitted entirely - they are neither
    /// returned nor available for further descent.
    async fn direct_children(
        &self,
        parent_id: i64,
        include_inactive: bool,
    ) -> ServiceResult<Vec<Category>>;
}

/// Read capabilities of the business store consumed by ranked category
/// queries.
#[async_trait::async_trait]
pub trait BusinessStore: Send + Sync {
    /// Page through businesses whose category membership intersects
    /// `category_ids`. Pagination is applied at the storage layer.
    async fn find_by_categories(
        &self,
        category_ids: &HashSet<i64>,
        active_only: bool,
        page: i32,
        page_size: i32,
    ) -> ServiceResult<Page<Business>>;
}
