use crate::config::RankingConfig;
use crate::domain::models::{Business, RankedBusiness};

/// Credibility-weighted average in the IMDB weighted-rating family.
///
/// Blends a business's own rating with the catalog-wide prior, weighted
/// by review volume: a handful of reviews pulls the score toward
/// `global_mean`, and past `confidence_threshold` reviews the business's
/// own rating dominates. This keeps a single 5-star review from
/// outranking an established business with hundreds of 4.8-star reviews.
///
/// Total on all inputs - degenerate values produce a defined number, not
/// an error. `review_count = 0` collapses exactly to `global_mean`. The
/// rating range is the caller's domain validation; no clamping happens
/// here. Pure arithmetic, bit-for-bit deterministic for equal inputs.
pub fn weighted_rating(raw_rating: f64, review_count: u32, config: &RankingConfig) -> f64 {
    let n = f64::from(review_count);
    let c = f64::from(config.confidence_threshold);

    (n / (n + c)) * raw_rating + (c / (n + c)) * config.global_mean
}

/// Score a business for ranked listings. An unrated business enters the
/// blend with a zero raw rating, so it sits at the prior until reviews
/// land.
pub fn score_business(business: Business, config: &RankingConfig) -> RankedBusiness {
    let weighted = weighted_rating(
        business.rating.unwrap_or(0.0),
        business.review_count.max(0) as u32,
        config,
    );

    RankedBusiness {
        business,
        weighted_rating: weighted,
    }
}
