//! API Handlers
//!
//! HTTP request handlers translating requests into store, reader and
//! statistics calls.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use crate::cache::{LocalCache, PropertyCache, RedisCache};
use crate::config::Config;
use crate::error::{PropertyError, Result};
use crate::models::{
    BatchQuery, CollectionMetricsResponse, ConversionQuery, CreatedResponse, DeleteResponse,
    HealthResponse, InsightsResponse, NewProperty, PriceReductionQuery, Property,
    PropertyListResponse, RateResponse, RecommendationPreferences, RecommendationResponse,
    SearchQuery, SearchResponse,
};
use crate::services::{CacheMetrics, CacheMetricsProbe, CachedPropertyReader};
use crate::statistics::{self, BatchProcessingStats, LocationStatistics, PropertyStatistics};
use crate::store::{MemoryStore, PropertyStore, SearchFilter};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of truth for properties
    pub store: Arc<dyn PropertyStore>,
    /// Cache-aside reader over the full collection
    pub reader: CachedPropertyReader,
    /// Cache counter probe
    pub probe: CacheMetricsProbe,
}

impl AppState {
    /// Creates a new AppState over the given store and cache.
    pub fn new(store: Arc<dyn PropertyStore>, cache: Arc<dyn PropertyCache>) -> Self {
        Self::with_ttl(store, cache, crate::cache::ALL_PROPERTIES_TTL)
    }

    /// Creates a new AppState with a custom snapshot TTL.
    pub fn with_ttl(
        store: Arc<dyn PropertyStore>,
        cache: Arc<dyn PropertyCache>,
        ttl_seconds: u64,
    ) -> Self {
        Self {
            reader: CachedPropertyReader::with_ttl(store.clone(), cache.clone(), ttl_seconds),
            probe: CacheMetricsProbe::new(cache),
            store,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Uses Redis when `redis_url` is set, otherwise the in-process cache,
    /// which is returned so the caller can run its sweeper.
    pub fn from_config(config: &Config) -> Result<(Self, Option<LocalCache>)> {
        let store: Arc<dyn PropertyStore> = Arc::new(MemoryStore::new());

        let (cache, local) = match &config.redis_url {
            Some(url) => {
                info!("Using Redis cache backend");
                (Arc::new(RedisCache::open(url)?) as Arc<dyn PropertyCache>, None)
            }
            None => {
                info!("Using in-process cache backend");
                let local = LocalCache::new(config.cache_max_entries);
                (Arc::new(local.clone()) as Arc<dyn PropertyCache>, Some(local))
            }
        };

        Ok((Self::with_ttl(store, cache, config.cache_ttl), local))
    }
}

async fn find_property(state: &AppState, id: i64) -> Result<Property> {
    state
        .store
        .get(id)
        .await?
        .ok_or_else(|| PropertyError::NotFound(id.to_string()))
}

// Bodies are parsed here rather than through `Json` so the serde detail
// reaches the client in the 400 body.
fn parse_body<T: serde::de::DeserializeOwned>(body: &Bytes) -> Result<T> {
    serde_json::from_slice(body).map_err(|err| {
        warn!(error = %err, "rejecting malformed payload");
        PropertyError::from(err)
    })
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Handler for GET /properties
///
/// Served through the cache-aside reader, so recent writes may be missing
/// until the snapshot expires.
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<PropertyListResponse>> {
    let properties = state.reader.get_all_properties().await?;
    Ok(Json(PropertyListResponse { properties }))
}

/// Handler for GET /properties/:id
pub async fn detail_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Property>> {
    Ok(Json(find_property(&state, id).await?))
}

/// Handler for POST /properties
pub async fn create_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    let new: NewProperty = parse_body(&body)?;
    let property = state.store.create(new).await?;
    info!(id = property.id, "property created");

    Ok((StatusCode::CREATED, Json(CreatedResponse::new(property))))
}

/// Handler for PUT /properties/:id
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Result<Json<Property>> {
    let changes: NewProperty = parse_body(&body)?;
    let property = state
        .store
        .update(id, changes)
        .await?
        .ok_or_else(|| PropertyError::NotFound(id.to_string()))?;

    Ok(Json(property))
}

/// Handler for DELETE /properties/:id
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>> {
    if !state.store.delete(id).await? {
        return Err(PropertyError::NotFound(id.to_string()));
    }

    Ok(Json(DeleteResponse::new(id)))
}

/// Handler for GET /search
pub async fn search_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>> {
    let filter = SearchFilter::new(query.q, query.location);
    let results = state.store.search(&filter).await?;

    Ok(Json(SearchResponse::new(results)))
}

/// Handler for GET /properties/:id/insights
pub async fn insights_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<InsightsResponse>> {
    let property = find_property(&state, id).await?;

    Ok(Json(InsightsResponse {
        property_id: property.id,
        engagement: statistics::engagement_metrics(&property),
        price_per_square_foot: statistics::price_per_square_foot(&property),
    }))
}

/// Handler for POST /properties/:id/recommendation
pub async fn recommendation_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Result<Json<RecommendationResponse>> {
    let preferences: RecommendationPreferences = parse_body(&body)?;
    let property = find_property(&state, id).await?;

    Ok(Json(RecommendationResponse {
        property_id: property.id,
        score: statistics::recommendation_score(&property, &preferences),
    }))
}

/// Handler for GET /statistics/properties
pub async fn property_statistics_handler(
    State(state): State<AppState>,
) -> Result<Json<PropertyStatistics>> {
    Ok(Json(statistics::property_statistics(state.store.as_ref()).await?))
}

/// Handler for GET /statistics/locations
pub async fn location_statistics_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LocationStatistics>>> {
    Ok(Json(statistics::location_statistics(state.store.as_ref()).await?))
}

/// Handler for GET /statistics/metrics
///
/// Computed over the cached collection.
pub async fn collection_metrics_handler(
    State(state): State<AppState>,
) -> Result<Json<CollectionMetricsResponse>> {
    let properties = state.reader.get_all_properties().await?;

    Ok(Json(CollectionMetricsResponse {
        metrics: statistics::format_property_metrics(&properties),
        success_rate: statistics::success_rate(&properties),
        average_price: statistics::average_price(&properties),
    }))
}

/// Handler for GET /statistics/conversion
pub async fn conversion_handler(Query(query): Query<ConversionQuery>) -> Json<RateResponse> {
    Json(RateResponse {
        rate: statistics::search_conversion_rate(
            query.search_requests,
            query.successful_searches,
        ),
    })
}

/// Handler for GET /statistics/batch
pub async fn batch_handler(Query(query): Query<BatchQuery>) -> Json<BatchProcessingStats> {
    Json(statistics::batch_processing_stats(
        query.processed,
        query.total,
        query.errors,
    ))
}

/// Handler for GET /statistics/price-reduction
pub async fn price_reduction_handler(
    Query(query): Query<PriceReductionQuery>,
) -> Json<RateResponse> {
    Json(RateResponse {
        rate: statistics::price_reduction_percentage(query.original, query.current),
    })
}

/// Handler for GET /cache/metrics
pub async fn cache_metrics_handler(State(state): State<AppState>) -> Result<Json<CacheMetrics>> {
    state
        .probe
        .get_redis_cache_metrics()
        .await
        .map(Json)
        .ok_or_else(|| PropertyError::CacheUnavailable("cache metrics unavailable".to_string()))
}
