//! Shared in-memory store fakes for integration tests, applying the same
//! filtering and paging semantics as the Postgres adapters.

use std::collections::HashSet;

use async_trait::async_trait;
use category_ranking::{Business, Category, CategoryStore, BusinessStore, Page, ServiceResult};
use chrono::Utc;

/// Category store backed by a flat list of parent-pointer rows
pub struct InMemoryCategoryStore {
    categories: Vec<Category>,
}

impl InMemoryCategoryStore {
    /// Entries are (id, parent_id, active)
    pub fn new(entries: &[(i64, Option<i64>, bool)]) -> Self {
        let categories = entries
            .iter()
            .map(|&(id, parent_id, active)| Category {
                id,
                name: format!("category-{}", id),
                parent_id,
                active,
                created_at: Utc::now(),
            })
            .collect();
        Self { categories }
    }
}

#[async_trait]
impl CategoryStore for InMemoryCategoryStore {
    async fn category_exists(&self, id: i64) -> ServiceResult<bool> {
        Ok(self.categories.iter().any(|c| c.id == id))
    }

    async fn direct_children(
        &self,
        parent_id: i64,
        include_inactive: bool,
    ) -> ServiceResult<Vec<Category>> {
        Ok(self
            .categories
            .iter()
            .filter(|c| c.parent_id == Some(parent_id) && (include_inactive || c.active))
            .cloned()
            .collect())
    }
}

/// Business store that filters by membership intersection and active
/// flag, then pages the matches
pub struct InMemoryBusinessStore {
    businesses: Vec<Business>,
}

impl InMemoryBusinessStore {
    pub fn new(businesses: Vec<Business>) -> Self {
        Self { businesses }
    }
}

#[async_trait]
impl BusinessStore for InMemoryBusinessStore {
    async fn find_by_categories(
        &self,
        category_ids: &HashSet<i64>,
        active_only: bool,
        page: i32,
        page_size: i32,
    ) -> ServiceResult<Page<Business>> {
        let matching: Vec<Business> = self
            .businesses
            .iter()
            .filter(|b| {
                (!active_only || b.active)
                    && b.category_ids.iter().any(|id| category_ids.contains(id))
            })
            .cloned()
            .collect();

        let total = matching.len() as i64;
        let start = page as usize * page_size as usize;
        let content: Vec<Business> = matching
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .collect();

        Ok(Page::from_parts(content, total, page, page_size))
    }
}

/// Build an active business fixture
pub fn business(id: i64, rating: Option<f64>, review_count: i32, category_ids: &[i64]) -> Business {
    Business {
        id,
        name: format!("business-{}", id),
        rating,
        review_count,
        active: true,
        category_ids: category_ids.to_vec(),
    }
}
