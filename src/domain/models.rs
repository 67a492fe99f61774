use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category entity - one node of the parent-pointer category hierarchy
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// None marks a root category
    pub parent_id: Option<i64>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Business read model used for ranked category listings
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Business {
    pub id: i64,
    pub name: String,
    /// Raw average rating, None until the first review lands
    pub rating: Option<f64>,
    pub review_count: i32,
    pub active: bool,
    /// Categories the business belongs to (many-to-many)
    pub category_ids: Vec<i64>,
}

/// A business paired with its credibility-weighted rating; the inputs
/// ride along with the score for auditability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedBusiness {
    pub business: Business,
    pub weighted_rating: f64,
}

/// Generic paginated response wrapper containing a list of items and
/// pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i32,
    pub page_number: i32,
    pub page_size: i32,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    /// Build a page envelope from one fetched slice and the overall
    /// match count
    pub fn from_parts(content: Vec<T>, total_elements: i64, page_number: i32, page_size: i32) -> Self {
        let total_pages = if page_size > 0 {
            ((total_elements + i64::from(page_size) - 1) / i64::from(page_size)) as i32
        } else {
            0
        };
        let last = page_number >= total_pages.saturating_sub(1);
        let empty = content.is_empty();

        Self {
            content,
            total_elements,
            total_pages,
            page_number,
            page_size,
            last,
            empty,
        }
    }

    pub fn first(&self) -> bool {
        self.page_number == 0
    }

    /// Map page content while keeping the pagination metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            page_number: self.page_number,
            page_size: self.page_size,
            last: self.last,
            empty: self.empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_envelope_flags_are_consistent() {
        let page = Page::from_parts(vec![1, 2], 5, 0, 2);
        assert_eq!(page.total_pages, 3);
        assert!(page.first());
        assert!(!page.last);
        assert!(!page.empty);

        let tail = Page::from_parts(vec![5], 5, 2, 2);
        assert!(tail.last);
        assert!(!tail.first());
    }

    #[test]
    fn empty_result_is_a_single_last_page() {
        let page: Page<i32> = Page::from_parts(Vec::new(), 0, 0, 10);
        assert_eq!(page.total_pages, 0);
        assert!(page.last);
        assert!(page.empty);
    }
}
