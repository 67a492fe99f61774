/// Error types for the category ranking engine
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Category not found with id {0}")]
    CategoryNotFound(i64),

    #[error("Circular reference detected: category {category_id} already visited while expanding children of {parent_id}")]
    CircularReference { category_id: i64, parent_id: i64 },

    #[error("Category {category_id}: hierarchy depth ({depth}) exceeded maximum allowed depth of {max_depth} levels")]
    HierarchyDepthExceeded {
        category_id: i64,
        max_depth: u32,
        depth: u32,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for engine operations
pub type ServiceResult<T> = Result<T, ServiceError>;
