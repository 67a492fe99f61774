pub mod category_query;
pub mod hierarchy;
pub mod ranking;

pub use category_query::CategoryQueryService;
pub use hierarchy::HierarchyResolver;
