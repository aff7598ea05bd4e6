//! Response DTOs for the property API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::models::Property;
use crate::statistics::{EngagementMetrics, PropertyMetrics};

/// Response body for GET /properties
#[derive(Debug, Clone, Serialize)]
pub struct PropertyListResponse {
    pub properties: Vec<Property>,
}

/// Response body for POST /properties
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    /// Identifier assigned by the store
    pub id: i64,
    /// Success message
    pub message: String,
    /// The stored record
    pub data: Property,
}

impl CreatedResponse {
    /// Creates a new CreatedResponse
    pub fn new(data: Property) -> Self {
        Self {
            id: data.id,
            message: "Property created successfully".to_string(),
            data,
        }
    }
}

/// Response body for DELETE /properties/:id
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The id that was deleted
    pub id: i64,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(id: i64) -> Self {
        Self {
            message: format!("Property {} deleted successfully", id),
            id,
        }
    }
}

/// Response body for GET /search
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub results: Vec<Property>,
    pub count: usize,
}

impl SearchResponse {
    /// Creates a new SearchResponse, counting the results
    pub fn new(results: Vec<Property>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }
}

/// Response body for GET /properties/:id/insights
#[derive(Debug, Clone, Serialize)]
pub struct InsightsResponse {
    pub property_id: i64,
    pub engagement: EngagementMetrics,
    pub price_per_square_foot: f64,
}

/// Response body for POST /properties/:id/recommendation
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub property_id: i64,
    pub score: f64,
}

/// Response body for GET /statistics/metrics
#[derive(Debug, Clone, Serialize)]
pub struct CollectionMetricsResponse {
    #[serde(flatten)]
    pub metrics: PropertyMetrics,
    /// Sold share of the collection
    pub success_rate: f64,
    pub average_price: f64,
}

/// Response body for the single-value rate endpoints
#[derive(Debug, Clone, Serialize)]
pub struct RateResponse {
    /// Percentage rounded to two decimals
    pub rate: f64,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "ok")
    pub status: String,
    /// Service name
    pub service: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            service: "properties API".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
