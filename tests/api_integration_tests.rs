//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use property_service::{
    api::create_router, cache::LocalCache, models::NewProperty, store::MemoryStore,
    store::PropertyStore, AppState,
};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    create_router(AppState::new(
        Arc::new(MemoryStore::new()),
        Arc::new(LocalCache::new(100)),
    ))
}

/// App over a store pre-filled with a few listings.
async fn create_seeded_app() -> Router {
    let store = MemoryStore::new();
    let seeds = [
        r#"{"title":"Harbor Condo","description":"Sea view","price":100,"location":"Seattle","status":"active","views":50,"inquiries":5,"favorites":2}"#,
        r#"{"title":"Hill House","description":"Garden","price":300,"location":"Seattle","status":"sold","square_footage":150}"#,
        r#"{"title":"Desert Lot","description":"Empty","location":"Phoenix","status":"active"}"#,
    ];
    for seed in seeds {
        let new: NewProperty = serde_json::from_str(seed).unwrap();
        store.create(new).await.unwrap();
    }

    create_router(AppState::new(Arc::new(store), Arc::new(LocalCache::new(100))))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn send_json(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

// == Health ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, json) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "properties API");
    assert!(json.get("timestamp").is_some());
}

// == CRUD ==

#[tokio::test]
async fn test_create_then_detail() {
    let app = create_test_app();

    let (status, json) = send_json(
        &app,
        "POST",
        "/properties",
        r#"{"title":"Studio","description":"Compact","price":120000.5,"location":"Boston"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["id"], 1);
    assert_eq!(json["message"], "Property created successfully");
    assert_eq!(json["data"]["location"], "Boston");

    let (status, json) = get(&app, "/properties/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Studio");
    assert_eq!(json["price"], 120000.5);
    assert!(json["created_at"].as_str().is_some());
    assert_eq!(json["views"], 0);
}

#[tokio::test]
async fn test_create_malformed_json() {
    let app = create_test_app();

    let (status, json) = send_json(&app, "POST", "/properties", r#"{"title": "#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().starts_with("Malformed input"));
}

#[tokio::test]
async fn test_create_missing_field() {
    let app = create_test_app();

    let (status, json) = send_json(&app, "POST", "/properties", r#"{"title":"No location"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_detail_not_found() {
    let app = create_test_app();

    let (status, json) = get(&app, "/properties/99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_update_and_delete() {
    let app = create_seeded_app().await;

    let (status, json) = send_json(
        &app,
        "PUT",
        "/properties/3",
        r#"{"title":"Desert Lot","description":"Now with a well","price":45000,"location":"Phoenix"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 3);
    assert_eq!(json["price"], 45000.0);

    let (status, _) = send_json(&app, "DELETE", "/properties/3", "").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(&app, "/properties/3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// == Listing through the cache ==

#[tokio::test]
async fn test_list_is_cached() {
    let app = create_seeded_app().await;

    let (status, first) = get(&app, "/properties").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["properties"].as_array().unwrap().len(), 3);

    let (_, second) = get(&app, "/properties").await;
    assert_eq!(first, second);

    let (status, metrics) = get(&app, "/cache/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(metrics["hits"], 1);
    assert_eq!(metrics["misses"], 1);
    assert_eq!(metrics["total_operations"], 2);
    assert_eq!(metrics["hit_ratio"], 0.5);
}

#[tokio::test]
async fn test_cache_metrics_unavailable_is_503() {
    let app = create_router(AppState::new(
        Arc::new(MemoryStore::new()),
        Arc::new(property_service::cache::RedisCache::open("redis://127.0.0.1:1/").unwrap()),
    ));

    let (status, json) = get(&app, "/cache/metrics").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_list_survives_unreachable_cache() {
    let app = create_router(AppState::new(
        Arc::new(MemoryStore::new()),
        Arc::new(property_service::cache::RedisCache::open("redis://127.0.0.1:1/").unwrap()),
    ));

    let (status, json) = get(&app, "/properties").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["properties"].as_array().unwrap().is_empty());
}

// == Search ==

#[tokio::test]
async fn test_search_by_title_and_location() {
    let app = create_seeded_app().await;

    let (status, json) = get(&app, "/search?q=house&location=seattle").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 1);
    assert_eq!(json["results"][0]["title"], "Hill House");

    let (_, json) = get(&app, "/search").await;
    assert_eq!(json["count"], 3);
}

// == Statistics ==

#[tokio::test]
async fn test_property_statistics_endpoint() {
    let app = create_seeded_app().await;

    let (status, json) = get(&app, "/statistics/properties").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_properties"], 3);
    assert_eq!(json["properties_with_price"], 2);
    assert_eq!(json["average_price"], 200.0);
    assert_eq!(json["price_coverage_ratio"], 66.67);
}

#[tokio::test]
async fn test_location_statistics_endpoint() {
    let app = create_seeded_app().await;

    let (status, json) = get(&app, "/statistics/locations").await;

    assert_eq!(status, StatusCode::OK);
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["location"], "Phoenix");
    assert_eq!(rows[0]["average_price"], 0.0);
    assert_eq!(rows[0]["market_share"], 33.33);
    assert_eq!(rows[1]["location"], "Seattle");
    assert_eq!(rows[1]["average_price"], 200.0);
    assert_eq!(rows[1]["market_share"], 66.67);
}

#[tokio::test]
async fn test_collection_metrics_endpoint() {
    let app = create_seeded_app().await;

    let (status, json) = get(&app, "/statistics/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_properties"], 3);
    assert_eq!(json["active_properties"], 2);
    assert_eq!(json["sold_properties"], 1);
    assert_eq!(json["active_rate"], 66.67);
    assert_eq!(json["sold_rate"], 33.33);
    assert_eq!(json["available_rate"], 66.67);
    assert_eq!(json["success_rate"], 33.33);
    assert_eq!(json["average_price"], 200.0);
}

#[tokio::test]
async fn test_statistics_on_empty_store_are_zero() {
    let app = create_test_app();

    let (_, json) = get(&app, "/statistics/properties").await;
    assert_eq!(json["price_coverage_ratio"], 0.0);
    assert_eq!(json["average_price"], 0.0);

    let (_, json) = get(&app, "/statistics/metrics").await;
    assert_eq!(json["sold_rate"], 0.0);
    assert_eq!(json["available_rate"], 0.0);
    assert_eq!(json["success_rate"], 0.0);

    let (_, json) = get(&app, "/statistics/locations").await;
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_insights_endpoint() {
    let app = create_seeded_app().await;

    let (status, json) = get(&app, "/properties/1/insights").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["engagement"]["engagement_rate"], 10.0);
    assert_eq!(json["engagement"]["favorite_rate"], 4.0);
    assert_eq!(json["price_per_square_foot"], 0.0);

    let (_, json) = get(&app, "/properties/2/insights").await;
    assert_eq!(json["price_per_square_foot"], 2.0);
    assert_eq!(json["engagement"]["engagement_rate"], 0.0);
}

#[tokio::test]
async fn test_recommendation_endpoint() {
    let app = create_seeded_app().await;

    let (status, json) = send_json(
        &app,
        "POST",
        "/properties/2/recommendation",
        r#"{"max_price":350,"preferred_locations":["Seattle","Portland"]}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["score"], 100.0);

    let (status, _) = send_json(&app, "POST", "/properties/42/recommendation", "{}").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rate_endpoints() {
    let app = create_test_app();

    let (_, json) = get(&app, "/statistics/conversion?search_requests=100&successful_searches=25").await;
    assert_eq!(json["rate"], 25.0);

    let (_, json) = get(&app, "/statistics/conversion?search_requests=0&successful_searches=0").await;
    assert_eq!(json["rate"], 0.0);

    let (_, json) = get(&app, "/statistics/batch?processed=8&total=10&errors=2").await;
    assert_eq!(json["success_rate"], 60.0);
    assert_eq!(json["error_rate"], 20.0);
    assert_eq!(json["completion_rate"], 80.0);

    let (_, json) = get(&app, "/statistics/batch?processed=3&total=3").await;
    assert_eq!(json["errors"], 0);
    assert_eq!(json["success_rate"], 100.0);

    let (_, json) = get(&app, "/statistics/price-reduction?original=200&current=150").await;
    assert_eq!(json["rate"], 25.0);

    let (_, json) = get(&app, "/statistics/price-reduction?original=200&current=250").await;
    assert_eq!(json["rate"], 0.0);
}

#[tokio::test]
async fn test_rate_endpoints_with_extreme_inputs() {
    let app = create_test_app();

    let (status, json) = get(
        &app,
        "/statistics/batch?processed=-9223372036854775808&total=10&errors=1",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["success_rate"].is_f64());

    let (status, json) = get(&app, "/statistics/price-reduction?original=inf&current=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["rate"], 0.0);

    let (_, json) = get(&app, "/statistics/conversion?search_requests=1&successful_searches=1").await;
    assert_eq!(json["rate"], 100.0);
}
