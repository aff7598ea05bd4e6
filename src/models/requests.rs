//! Request DTOs for the property API
//!
//! Query strings accepted by the search and statistics endpoints. Property
//! bodies are parsed by the handlers so that parse failures keep their detail.

use serde::Deserialize;

/// Query for GET /search
///
/// Both filters are case-insensitive substring matches; empty means "any".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub location: String,
}

/// Query for GET /statistics/conversion
#[derive(Debug, Clone, Deserialize)]
pub struct ConversionQuery {
    pub search_requests: i64,
    pub successful_searches: i64,
}

/// Query for GET /statistics/batch
#[derive(Debug, Clone, Deserialize)]
pub struct BatchQuery {
    pub processed: i64,
    pub total: i64,
    #[serde(default)]
    pub errors: i64,
}

/// Query for GET /statistics/price-reduction
#[derive(Debug, Clone, Deserialize)]
pub struct PriceReductionQuery {
    pub original: f64,
    pub current: f64,
}
