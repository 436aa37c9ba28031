//! Integration tests for the JSON API and static hosting

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let router = quickdeliver_web::create_router(None);
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(request).await
}

fn names(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["stores"], 4);
}

#[tokio::test]
async fn test_store_filters() {
    let (status, body) = get("/api/stores").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);

    let (_, body) = get("/api/stores?q=pizza").await;
    assert_eq!(names(&body), vec!["Pizza Paradise"]);

    let (_, body) = get("/api/stores?category=Groceries").await;
    assert_eq!(names(&body), vec!["Fresh Market", "Organic Greens"]);

    let (_, body) = get("/api/stores?min_rating=4.8%2B").await;
    assert_eq!(names(&body), vec!["Fresh Market", "HealthPlus Pharmacy"]);
}

#[tokio::test]
async fn test_bad_rating_threshold_is_rejected() {
    let (status, body) = get("/api/stores?min_rating=lots").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("lots"));
}

#[tokio::test]
async fn test_store_lookup() {
    let (status, body) = get("/api/stores/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Pizza Paradise");

    let (status, body) = get("/api/stores/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Store not found: 99");
}

#[tokio::test]
async fn test_store_products() {
    let (status, body) = get("/api/stores/1/products").await;
    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert!(!products.is_empty());
    assert!(products.iter().all(|p| p["store_id"] == 1));

    let (status, _) = get("/api/stores/99/products").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_orders() {
    let (status, body) = get("/api/orders").await;
    assert_eq!(status, StatusCode::OK);
    let orders = body.as_array().unwrap();
    assert_eq!(orders.len(), 5);
    assert_eq!(orders[0]["id"], 12346);
    assert_eq!(orders[0]["status"], "out_for_delivery");
}

#[tokio::test]
async fn test_quote() {
    let (status, body) = post_json(
        "/api/quote",
        json!({
            "items": [
                { "product_id": 1, "quantity": 2 },
                { "product_id": 2, "quantity": 1 }
            ],
            "tier": "express",
            "discount": "2.00"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["item_count"], 3);
    assert_eq!(body["subtotal"], "13.47");
    assert_eq!(body["delivery_fee"], "5.99");
    assert_eq!(body["total"], "17.46");
}

#[tokio::test]
async fn test_quote_defaults_and_unknown_product() {
    let (status, body) = post_json("/api/quote", json!({ "items": [] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["item_count"], 0);
    assert_eq!(body["subtotal"], "0.00");
    assert_eq!(body["discount"], "0.00");
    assert_eq!(body["total"], "2.99");

    let (_, body) = post_json("/api/quote", json!({ "items": [], "discount": "1.5" })).await;
    assert_eq!(body["discount"], "1.50");
    assert_eq!(body["total"], "1.49");

    let (status, body) = post_json(
        "/api/quote",
        json!({ "items": [{ "product_id": 999, "quantity": 1 }] }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product not found: 999");
}

#[tokio::test]
async fn test_quote_rejects_negative_discount() {
    let (status, body) = post_json(
        "/api/quote",
        json!({
            "items": [{ "product_id": 1, "quantity": 1 }],
            "discount": "-10.00"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid amount '-$10.00': discount must not be negative"
    );
}

#[tokio::test]
async fn test_quote_rejects_zero_quantity() {
    let (status, body) = post_json(
        "/api/quote",
        json!({ "items": [{ "product_id": 1, "quantity": 0 }] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid quantity 0 for product 1 (must be at least 1)"
    );
}

#[tokio::test]
async fn test_setup_page_without_build() {
    let router = quickdeliver_web::create_router(None);
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8_lossy(&bytes);
    assert!(html.contains("trunk build"));
}

#[tokio::test]
async fn test_serves_storefront_build() {
    let dist = std::env::temp_dir().join("quickdeliver-test-dist");
    std::fs::create_dir_all(&dist).unwrap();
    std::fs::write(dist.join("index.html"), "<html>storefront</html>").unwrap();

    let router = quickdeliver_web::create_router(Some(dist.clone()));
    // Unknown paths fall back to index.html
    let request = Request::builder().uri("/cart").body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&bytes).contains("storefront"));

    std::fs::remove_dir_all(&dist).ok();
}
