//! Statistics Module
//!
//! Derived listing metrics: ratios, rates and scores over property
//! collections, the store, or raw counts.
//!
//! Every percentage is rounded to two decimals (half away from zero), and any
//! denominator that is zero or negative yields 0.

mod aggregates;
mod metrics;


pub use aggregates::{
    location_statistics, property_statistics, LocationStatistics, PropertyStatistics,
};
pub use metrics::{
    average_price, batch_processing_stats, engagement_metrics, format_property_metrics,
    price_per_square_foot, price_reduction_percentage, recommendation_score,
    search_conversion_rate, success_rate, BatchProcessingStats, EngagementMetrics,
    PropertyMetrics,
};

// == Rounding ==
/// Rounds to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// == Percentage ==
/// `part / whole * 100`, rounded; 0 when `whole` is not a positive finite value.
pub fn percentage(part: f64, whole: f64) -> f64 {
    if usable_denominator(whole) {
        finite_or_zero(round2(part / whole * 100.0))
    } else {
        0.0
    }
}

/// `numerator / denominator`, rounded; 0 when `denominator` is not a positive
/// finite value.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if usable_denominator(denominator) {
        finite_or_zero(round2(numerator / denominator))
    } else {
        0.0
    }
}

fn usable_denominator(value: f64) -> bool {
    value > 0.0 && value.is_finite()
}

// NaN and infinities never leave this module
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
