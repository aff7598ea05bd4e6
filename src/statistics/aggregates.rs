//! Store-backed statistics
//!
//! Summaries computed from the store's aggregate queries rather than from a
//! loaded collection.

use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::statistics::{percentage, round2};
use crate::store::PropertyStore;

// == Property Statistics ==
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyStatistics {
    pub total_properties: u64,
    pub properties_with_price: u64,
    pub average_price: f64,
    /// Priced properties as a percentage of all properties
    pub price_coverage_ratio: f64,
}

/// Totals, average price and price coverage across the whole store.
#[instrument(skip(store))]
pub async fn property_statistics(store: &dyn PropertyStore) -> Result<PropertyStatistics> {
    let agg = store.price_aggregate().await?;

    Ok(PropertyStatistics {
        total_properties: agg.total,
        properties_with_price: agg.priced,
        average_price: round2(agg.average_price.unwrap_or(0.0)),
        price_coverage_ratio: percentage(agg.priced as f64, agg.total as f64),
    })
}

// == Location Statistics ==
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationStatistics {
    pub location: String,
    pub property_count: u64,
    pub average_price: f64,
    /// This location's share of all properties, as a percentage
    pub market_share: f64,
}

/// Per-location count, average price and market share, sorted by location.
#[instrument(skip(store))]
pub async fn location_statistics(store: &dyn PropertyStore) -> Result<Vec<LocationStatistics>> {
    let rows = store.location_aggregates().await?;
    let total = store.count().await? as f64;

    Ok(rows
        .into_iter()
        .map(|row| LocationStatistics {
            market_share: percentage(row.property_count as f64, total),
            average_price: round2(row.average_price.unwrap_or(0.0)),
            property_count: row.property_count,
            location: row.location,
        })
        .collect())
}
