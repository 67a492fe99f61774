/// Configuration for the category ranking engine
///
/// Tuning values are loaded from environment variables. Each `from_env`
/// call produces an independent snapshot; the surrounding service may
/// hot-reload by loading again, while in-flight resolutions keep the
/// snapshot they were handed.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{ServiceError, ServiceResult};

/// Engine configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Config {
    /// Rating smoothing parameters
    pub ranking: RankingConfig,
    /// Hierarchy traversal limits
    pub hierarchy: HierarchyConfig,
}

/// Rating smoothing parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Review volume at which a business's own rating carries the same
    /// weight as the catalog-wide prior
    pub confidence_threshold: u32,
    /// Assumed average rating across the whole catalog
    pub global_mean: f64,
}

/// Hierarchy traversal limits
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HierarchyConfig {
    /// Hard ceiling on traversal depth for descendant resolution
    pub max_depth: u32,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 10,
            global_mean: 3.5,
        }
    }
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self { max_depth: 5 }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for unset values. Malformed or invalid values are errors
    /// at load time, never at resolution time.
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();

        let config = Self {
            ranking: RankingConfig {
                confidence_threshold: parse_var("RATING_CONFIDENCE_THRESHOLD")?
                    .unwrap_or(defaults.ranking.confidence_threshold),
                global_mean: parse_var("RATING_GLOBAL_MEAN")?
                    .unwrap_or(defaults.ranking.global_mean),
            },
            hierarchy: HierarchyConfig {
                max_depth: parse_var("CATEGORY_HIERARCHY_MAX_DEPTH")?
                    .unwrap_or(defaults.hierarchy.max_depth),
            },
        };

        config.validate().context("Engine configuration rejected")?;
        Ok(config)
    }

    /// A zero confidence threshold would make the rating blend
    /// discontinuous, and a zero depth ceiling would reject every
    /// non-leaf hierarchy.
    pub fn validate(&self) -> ServiceResult<()> {
        if self.ranking.confidence_threshold == 0 {
            return Err(ServiceError::Config(
                "confidence threshold must be at least 1".to_string(),
            ));
        }
        if self.hierarchy.max_depth == 0 {
            return Err(ServiceError::Config(
                "hierarchy max depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Failed to parse {}={}", key, raw)),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_deployed_tuning() {
        let config = Config::default();
        assert_eq!(config.ranking.confidence_threshold, 10);
        assert_eq!(config.ranking.global_mean, 3.5);
        assert_eq!(config.hierarchy.max_depth, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_confidence_threshold_is_rejected() {
        let config = Config {
            ranking: RankingConfig {
                confidence_threshold: 0,
                global_mean: 3.5,
            },
            hierarchy: HierarchyConfig::default(),
        };
        assert!(matches!(
            config.validate(),
            Err(ServiceError::Config(_))
        ));
    }

    #[test]
    fn zero_max_depth_is_rejected() {
        let config = Config {
            ranking: RankingConfig::default(),
            hierarchy: HierarchyConfig { max_depth: 0 },
        };
        assert!(matches!(
            config.validate(),
            Err(ServiceError::Config(_))
        ));
    }
}
