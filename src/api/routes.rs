//! API Routes
//!
//! Configures the Axum router with all property service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    batch_handler, cache_metrics_handler, collection_metrics_handler, conversion_handler,
    create_handler, delete_handler, detail_handler, health_handler, insights_handler,
    list_handler, location_statistics_handler, price_reduction_handler,
    property_statistics_handler, recommendation_handler, search_handler, update_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/properties", get(list_handler).post(create_handler))
        .route(
            "/properties/:id",
            get(detail_handler).put(update_handler).delete(delete_handler),
        )
        .route("/properties/:id/insights", get(insights_handler))
        .route("/properties/:id/recommendation", post(recommendation_handler))
        .route("/search", get(search_handler))
        .route("/statistics/properties", get(property_statistics_handler))
        .route("/statistics/locations", get(location_statistics_handler))
        .route("/statistics/metrics", get(collection_metrics_handler))
        .route("/statistics/conversion", get(conversion_handler))
        .route("/statistics/batch", get(batch_handler))
        .route("/statistics/price-reduction", get(price_reduction_handler))
        .route("/cache/metrics", get(cache_metrics_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
