//! Domain records and the request/response models for the property API
//!
//! This module defines the `Property` entity and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod property;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use property::{
    NewProperty, Property, PropertyExtras, PropertyStatus, RecommendationPreferences,
};
pub use requests::{BatchQuery, ConversionQuery, PriceReductionQuery, SearchQuery};
pub use responses::{
    CollectionMetricsResponse, CreatedResponse, DeleteResponse, HealthResponse, InsightsResponse,
    PropertyListResponse, RateResponse, RecommendationResponse, SearchResponse,
};
