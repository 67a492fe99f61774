use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::domain::models::{Page, RankedBusiness};
use crate::error::{ServiceError, ServiceResult};
use crate::repository::{BusinessStore, CategoryStore};
use crate::services::hierarchy::HierarchyResolver;
use crate::services::ranking::score_business;

/// Orchestrates "browse businesses under a category" queries: descendant
/// resolution, storage-side pagination, credibility-weighted ordering.
pub struct CategoryQueryService {
    categories: Arc<dyn CategoryStore>,
    businesses: Arc<dyn BusinessStore>,
    resolver: HierarchyResolver,
    config: Config,
}

impl CategoryQueryService {
    pub fn new(
        categories: Arc<dyn CategoryStore>,
        businesses: Arc<dyn BusinessStore>,
        config: Config,
    ) -> Self {
        Self {
            resolver: HierarchyResolver::new(Arc::clone(&categories)),
            categories,
            businesses,
            config,
        }
    }

    /// Find active businesses in `category_id` or any of its active
    /// subcategories, ordered by weighted rating descending with ties
    /// broken by business id ascending.
    ///
    /// The traversal depth ceiling comes from configuration, not the
    /// caller. An unknown category is an ordinary not-found; hierarchy
    /// integrity errors from resolution surface unchanged.
    pub async fn find_active_businesses_in_category_tree(
        &self,
        category_id: i64,
        page: i32,
        page_size: i32,
    ) -> ServiceResult<Page<RankedBusiness>> {
        if !self.categories.category_exists(category_id).await? {
            return Err(ServiceError::CategoryNotFound(category_id));
        }

        let mut category_ids = self
            .resolver
            .resolve_descendants(category_id, self.config.hierarchy.max_depth, false)
            .await?;
        category_ids.insert(category_id);

        let businesses = self
            .businesses
            .find_by_categories(&category_ids, true, page, page_size)
            .await?;

        let mut ranked = businesses.map(|business| score_business(business, &self.config.ranking));
        ranked.content.sort_by(|a, b| {
            b.weighted_rating
                .partial_cmp(&a.weighted_rating)
                .unwrap_or(Ordering::Equal)
                .then(a.business.id.cmp(&b.business.id))
        });

        info!(
            category_id,
            categories = category_ids.len(),
            results = ranked.content.len(),
            page,
            "Ranked category tree query completed"
        );
        Ok(ranked)
    }

    /// Resolve the subcategory ids of a category at the configured depth
    /// ceiling. Admin callers pass `include_inactive = true` to see the
    /// whole tree.
    pub async fn find_subcategory_ids(
        &self,
        category_id: i64,
        include_inactive: bool,
    ) -> ServiceResult<HashSet<i64>> {
        if !self.categories.category_exists(category_id).await? {
            return Err(ServiceError::CategoryNotFound(category_id));
        }

        self.resolver
            .resolve_descendants(category_id, self.config.hierarchy.max_depth, include_inactive)
            .await
    }
}
