use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use catalog_service::{build_app, AppState, CatalogStore, Product};
use rust_decimal::Decimal;
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt;

fn app() -> Router {
    build_app(
        AppState::new(CatalogStore::with_mock_data()),
        Duration::from_secs(5),
    )
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_list_products_returns_available_only() {
    let (status, body) = get("/api/catalog/products").await;
    assert_eq!(status, StatusCode::OK);

    let products: Vec<Product> = serde_json::from_value(body).unwrap();
    assert_eq!(products.len(), 13);
    assert!(products.iter().all(|p| p.quantity > 0));
    assert!(!products.iter().any(|p| p.id == "5" || p.id == "15"));
}

#[tokio::test]
async fn test_get_product_by_id() {
    let (status, body) = get("/api/catalog/products/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "1");
    assert_eq!(body["name"], "Laptop Ryzen 7");
    assert_eq!(body["price"], "9999.99");
    assert_eq!(body["quantity"], 50);

    let product: Product = serde_json::from_value(body).unwrap();
    assert_eq!(product.price, Decimal::new(999_999, 2));
}

#[tokio::test]
async fn test_get_product_not_found() {
    let (status, body) = get("/api/catalog/products/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn test_check_stock() {
    let (status, body) = get("/api/catalog/products/1/stock?quantity=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Bool(true));

    let (status, body) = get("/api/catalog/products/1/stock?quantity=60").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Bool(false));
}

#[tokio::test]
async fn test_check_stock_unknown_product_is_false() {
    let (status, body) = get("/api/catalog/products/999/stock?quantity=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Bool(false));
}

#[tokio::test]
async fn test_check_stock_invalid_quantity() {
    for uri in [
        "/api/catalog/products/1/stock?quantity=-1",
        "/api/catalog/products/1/stock?quantity=0",
        "/api/catalog/products/1/stock?quantity=abc",
        "/api/catalog/products/1/stock",
    ] {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["error"], "BAD_REQUEST", "{}", uri);
    }
}

#[tokio::test]
async fn test_product_details() {
    let (status, details) = get("/api/catalog/products/1/details").await;
    assert_eq!(status, StatusCode::OK);

    let (_, product) = get("/api/catalog/products/1").await;
    assert_eq!(details, product);

    let (status, _) = get("/api/catalog/products/999/details").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["products"], 15);
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, _) = get("/api/catalog/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
