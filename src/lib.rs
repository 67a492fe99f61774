//! Category hierarchy resolution and credibility-weighted business
//! ranking, shared by the categories and businesses services.

pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod services;

pub use config::{Config, HierarchyConfig, RankingConfig};
pub use domain::models::{Business, Category, Page, RankedBusiness};
pub use error::{ServiceError, ServiceResult};
pub use repository::{BusinessStore, CategoryStore, PostgresBusinessStore, PostgresCategoryStore};
pub use services::ranking::{score_business, weighted_rating};
pub use services::{CategoryQueryService, HierarchyResolver};
