//! Router behavior tests against an in-memory document store.

use std::collections::BTreeSet;
use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use stride_storefront::catalog::{PRODUCT_COLLECTION, sample_products};
use stride_storefront::config::StorefrontConfig;
use stride_storefront::db::{DocumentStore, Filter, MemoryDocumentStore, to_document};
use stride_storefront::middleware::REQUEST_ID_HEADER;
use stride_storefront::routes;
use stride_storefront::state::AppState;

fn app_over(store: &Arc<MemoryDocumentStore>) -> Router {
    let store: Arc<dyn DocumentStore> = store.clone();
    routes::app(AppState::new(StorefrontConfig::default(), Some(store)))
}

fn app_without_store() -> Router {
    routes::app(AppState::new(StorefrontConfig::default(), None))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

fn titles(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|p| p["title"].as_str().expect("title").to_string())
        .collect()
}

#[tokio::test]
async fn root_reports_running() {
    let (status, body) = get(app_without_store(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Shoe Store Backend Running"}));
}

#[tokio::test]
async fn listing_seeds_empty_store_and_returns_products() {
    let store = Arc::new(MemoryDocumentStore::default());

    let (status, body) = get(app_over(&store), "/api/products").await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().expect("array");
    assert_eq!(products.len(), 4);
    assert!(products.len() <= 20);
    for product in products {
        assert!(product["id"].is_string());
        assert!(product["price"].as_f64().expect("price") >= 0.0);
    }

    let stored = store
        .count_documents(PRODUCT_COLLECTION, &Filter::new())
        .await
        .expect("count");
    assert_eq!(stored, 4);
}

#[tokio::test]
async fn listing_filters_by_category() {
    let store = Arc::new(MemoryDocumentStore::default());

    let (status, body) = get(app_over(&store), "/api/products?category=running").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Air Nova Runner", "Pulse React 2"]);
    assert!(
        body.as_array()
            .expect("array")
            .iter()
            .all(|p| p["category"] == "running")
    );
}

#[tokio::test]
async fn listing_respects_limit() {
    let store = Arc::new(MemoryDocumentStore::default());

    let (_, body) = get(app_over(&store), "/api/products?limit=3").await;
    assert_eq!(titles(&body).len(), 3);

    let (_, body) = get(app_over(&store), "/api/products?limit=0").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn listing_falls_back_when_store_is_down() {
    let store = Arc::new(MemoryDocumentStore::default());
    store.set_available(false);

    let (status, body) = get(app_over(&store), "/api/products?limit=2&category=trail").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Air Nova Runner", "Atlas Court Pro"]);
    assert!(body.as_array().expect("array").iter().all(|p| p["id"].is_null()));
}

#[tokio::test]
async fn listing_without_store_serves_samples() {
    let (status, body) = get(app_without_store(), "/api/products").await;

    assert_eq!(status, StatusCode::OK);
    let expected: Vec<String> = sample_products().into_iter().map(|p| p.title).collect();
    assert_eq!(titles(&body), expected);
    assert_eq!(body[0]["category"], "running");
    assert_eq!(body[0]["in_stock"], true);
    assert_eq!(body[0]["colors"], json!(["black", "volt", "white"]));
}

#[tokio::test]
async fn listing_rejects_bad_limits() {
    let (status, body) = get(app_without_store(), "/api/products?limit=abc").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let (status, _) = get(app_without_store(), "/api/products?limit=-5").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_stored_product_fails_the_request() {
    let store = Arc::new(MemoryDocumentStore::default());
    store
        .create_document(
            PRODUCT_COLLECTION,
            to_document(&json!({"title": "Mystery Mule", "price": "ask in store"}))
                .expect("document"),
        )
        .await
        .expect("insert");

    let (status, body) = get(app_over(&store), "/api/products").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "Internal server error"}));
}

#[tokio::test]
async fn featured_returns_four_products() {
    let store = Arc::new(MemoryDocumentStore::default());

    let (status, body) = get(app_over(&store), "/api/products/featured").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body).len(), 4);

    store.set_available(false);
    let (status, body) = get(app_over(&store), "/api/products/featured").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body).len(), 4);
}

#[tokio::test]
async fn repeated_seeding_keeps_the_sample_titles() {
    let store = Arc::new(MemoryDocumentStore::default());

    get(app_over(&store), "/api/products").await;
    get(app_over(&store), "/api/products/featured").await;

    let documents = store
        .get_documents(PRODUCT_COLLECTION, &Filter::new(), None)
        .await
        .expect("documents");
    let stored: BTreeSet<String> = documents
        .iter()
        .map(|d| d["title"].as_str().expect("title").to_string())
        .collect();
    let expected: BTreeSet<String> = sample_products().into_iter().map(|p| p.title).collect();
    assert_eq!(stored, expected);
}

#[tokio::test]
async fn diagnostics_without_store() {
    let (status, body) = get(app_without_store(), "/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "⚠️  Available but not initialized");
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["database_url"], "❌ Not Set");
    assert_eq!(body["database_name"], "❌ Not Set");
    assert_eq!(body["collections"], json!([]));
}

#[tokio::test]
async fn diagnostics_lists_collections() {
    let store = Arc::new(MemoryDocumentStore::default());
    get(app_over(&store), "/api/products").await;

    let (status, body) = get(app_over(&store), "/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["collections"], json!(["product"]));
}

#[tokio::test]
async fn diagnostics_caps_collection_names() {
    let store = Arc::new(MemoryDocumentStore::default());
    for i in 0..12 {
        store
            .create_document(&format!("collection_{i:02}"), Default::default())
            .await
            .expect("insert");
    }

    let (_, body) = get(app_over(&store), "/test").await;

    assert_eq!(body["collections"].as_array().expect("array").len(), 10);
}

#[tokio::test]
async fn diagnostics_reports_store_errors() {
    let store = Arc::new(MemoryDocumentStore::default());
    store.set_available(false);

    let (status, body) = get(app_over(&store), "/test").await;

    assert_eq!(status, StatusCode::OK);
    assert!(
        body["database"]
            .as_str()
            .expect("status string")
            .starts_with("⚠️  Connected but Error: ")
    );
    assert_eq!(body["collections"], json!([]));
}

#[tokio::test]
async fn readiness_tracks_store() {
    let (status, _) = get(app_without_store(), "/health/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let store = Arc::new(MemoryDocumentStore::default());
    let (status, _) = get(app_over(&store), "/health/ready").await;
    assert_eq!(status, StatusCode::OK);

    store.set_available(false);
    let (status, _) = get(app_over(&store), "/health/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, body) = get(app_over(&store), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("ok"));
}

#[tokio::test]
async fn responses_carry_request_id() {
    let response = app_without_store()
        .oneshot(
            Request::get("/")
                .header(REQUEST_ID_HEADER, "edge-1234")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(
        response.headers().get(REQUEST_ID_HEADER).expect("header"),
        "edge-1234"
    );
}

#[tokio::test]
async fn cors_allows_credentialed_cross_origin_requests() {
    let response = app_without_store()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/products")
                .header(header::ORIGIN, "https://shop.example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-custom")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    let headers = response.headers();
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("allow-origin"),
        "https://shop.example.com"
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .expect("allow-credentials"),
        "true"
    );
}
