//! API Module
//!
//! HTTP handlers and routing for the property service REST API.
//!
//! # Endpoints
//! - `GET /health` - Health check endpoint
//! - `GET|POST /properties` - List (cached) or create properties
//! - `GET|PUT|DELETE /properties/:id` - Read, replace or remove one property
//! - `GET /properties/:id/insights` - Engagement and price per square foot
//! - `POST /properties/:id/recommendation` - Score against buyer preferences
//! - `GET /search` - Title/location search
//! - `GET /statistics/*` - Aggregate and ad-hoc listing statistics
//! - `GET /cache/metrics` - Cache hit/miss counters

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
