//! Pure listing metrics
//!
//! Side-effect-free functions over property slices, single properties, or
//! plain counts.

use serde::Serialize;

use crate::models::{Property, PropertyStatus, RecommendationPreferences};
use crate::statistics::{percentage, ratio, round2};

// == Average Price ==
/// Mean of the non-null prices, 0 when nothing is priced.
pub fn average_price(properties: &[Property]) -> f64 {
    let prices: Vec<f64> = properties
        .iter()
        .filter(|p| p.has_price())
        .filter_map(|p| p.price)
        .collect();
    ratio(prices.iter().sum(), prices.len() as f64)
}

// == Success Rate ==
/// Share of the collection marked as sold.
pub fn success_rate(properties: &[Property]) -> f64 {
    let sold = count_status(properties, PropertyStatus::Sold);
    percentage(sold as f64, properties.len() as f64)
}

fn count_status(properties: &[Property], status: PropertyStatus) -> usize {
    properties.iter().filter(|p| p.has_status(status)).count()
}

// == Search Conversion ==
pub fn search_conversion_rate(search_requests: i64, successful_searches: i64) -> f64 {
    percentage(successful_searches as f64, search_requests as f64)
}

// == Price Per Square Foot ==
/// Price divided by floor area; 0 without a positive area or a price.
pub fn price_per_square_foot(property: &Property) -> f64 {
    match (property.price, property.extras.square_footage) {
        (Some(price), Some(area)) => ratio(price, area),
        _ => 0.0,
    }
}

// == Engagement ==
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementMetrics {
    pub views: u64,
    pub inquiries: u64,
    pub favorites: u64,
    /// Inquiries per hundred views
    pub engagement_rate: f64,
    /// Favorites per hundred views
    pub favorite_rate: f64,
}

pub fn engagement_metrics(property: &Property) -> EngagementMetrics {
    let extras = &property.extras;
    let views = extras.views as f64;

    EngagementMetrics {
        views: extras.views,
        inquiries: extras.inquiries,
        favorites: extras.favorites,
        engagement_rate: percentage(extras.inquiries as f64, views),
        favorite_rate: percentage(extras.favorites as f64, views),
    }
}

// == Batch Processing ==
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchProcessingStats {
    pub processed: i64,
    pub total: i64,
    pub errors: i64,
    pub success_rate: f64,
    pub error_rate: f64,
    pub completion_rate: f64,
}

/// Rates for a batch job; `processed` includes the failed items.
pub fn batch_processing_stats(processed: i64, total: i64, errors: i64) -> BatchProcessingStats {
    let total_f = total as f64;

    BatchProcessingStats {
        processed,
        total,
        errors,
        success_rate: percentage(processed as f64 - errors as f64, total_f),
        error_rate: percentage(errors as f64, total_f),
        completion_rate: percentage(processed as f64, total_f),
    }
}

// == Price Reduction ==
/// Drop from `original` to `current` as a percentage of `original`.
///
/// Increases and unchanged prices report 0.
pub fn price_reduction_percentage(original: f64, current: f64) -> f64 {
    if original > 0.0 && current < original {
        percentage(original - current, original)
    } else {
        0.0
    }
}

// == Recommendation Score ==
/// Percentage of the supplied criteria the property satisfies.
pub fn recommendation_score(property: &Property, preferences: &RecommendationPreferences) -> f64 {
    let mut considered = 0u32;
    let mut satisfied = 0u32;

    if let Some(max_price) = preferences.max_price.filter(|max| *max != 0.0) {
        considered += 1;
        // An unpriced listing cannot be shown to fit a budget
        if property.price.is_some_and(|price| price <= max_price) {
            satisfied += 1;
        }
    }

    if let Some(locations) = preferences
        .preferred_locations
        .as_ref()
        .filter(|locations| !locations.is_empty())
    {
        considered += 1;
        if locations.iter().any(|location| *location == property.location) {
            satisfied += 1;
        }
    }

    percentage(satisfied as f64, considered as f64)
}

// == Display Metrics ==
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyMetrics {
    pub total_properties: usize,
    pub active_properties: usize,
    pub sold_properties: usize,
    pub active_rate: f64,
    pub sold_rate: f64,
    /// 100 minus the sold rate
    pub available_rate: f64,
}

pub fn format_property_metrics(properties: &[Property]) -> PropertyMetrics {
    let total = properties.len();
    let active = count_status(properties, PropertyStatus::Active);
    let sold = count_status(properties, PropertyStatus::Sold);

    // Unrounded so available_rate is rounded once
    let available_rate = if total > 0 {
        round2(100.0 - sold as f64 / total as f64 * 100.0)
    } else {
        0.0
    };

    PropertyMetrics {
        total_properties: total,
        active_properties: active,
        sold_properties: sold,
        active_rate: percentage(active as f64, total as f64),
        sold_rate: percentage(sold as f64, total as f64),
        available_rate,
    }
}
