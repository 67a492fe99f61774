mod business_repository;
mod category_repository;
mod r#trait;

pub use business_repository::PostgresBusinessStore;
pub use category_repository::PostgresCategoryStore;
pub use r#trait::{BusinessStore, CategoryStore};
