mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{JWT_SECRET, TestApp, get, send};
use jsonwebtoken::{EncodingKey, Header};
use serde_json::json;
use storefront_lib::data::models::payment_summary::PaymentSummary;
use storefront_lib::security::jwt::AccessClaims;

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();

    let (status, body) = send(app.router(), get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Backend is running"));
}

#[tokio::test]
async fn test_list_products() {
    let app = TestApp::new();
    app.product("Socks", 1090, "apparel").await;
    let ball = app.product("Basketball", 2095, "sports").await;

    let (status, body) = send(app.router(), get("/products")).await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(
        products[0],
        json!({
            "id": ball.id,
            "name": "Basketball",
            "price_cents": 2095,
            "image": "images/products/test.jpg",
            "category": "sports"
        })
    );
}

#[tokio::test]
async fn test_list_products_by_category() {
    let app = TestApp::new();
    app.product("Socks", 1090, "apparel").await;
    app.product("Basketball", 2095, "sports").await;

    let (status, body) = send(app.router(), get("/products?category=apparel")).await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Socks");
}

#[tokio::test]
async fn test_get_product_by_id() {
    let app = TestApp::new();
    let socks = app.product("Socks", 1090, "apparel").await;

    let (status, body) = send(app.router(), get(&format!("/products/{}", socks.id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Socks");

    let (status, body) = send(app.router(), get("/products/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Product not found"}));
}

#[tokio::test]
async fn test_list_delivery_options_in_id_order() {
    let app = TestApp::new();
    let standard = app.store.insert_delivery_option("Standard", 0).await;
    let express = app.store.insert_delivery_option("Express", 499).await;

    let (status, body) = send(app.router(), get("/delivery-options")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": standard.id, "name": "Standard", "price_cents": 0},
            {"id": express.id, "name": "Express", "price_cents": 499}
        ])
    );
}

#[tokio::test]
async fn test_payment_summary() {
    let app = TestApp::new();
    app.store
        .insert_payment_summary(PaymentSummary {
            order_id: 12,
            item_count: 3,
            items_cents: 2000,
            shipping_cents: 300,
            total_before_tax_cents: 2300,
            tax_cents: 230,
            total_cents: 2530,
        })
        .await;

    let (status, body) = send(app.router(), get("/payment-summary/12")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["item_count"], 3);
    assert_eq!(body["total_cents"], 2530);

    let (status, body) = send(app.router(), get("/payment-summary/13")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Payment summary not found"}));
}

fn bearer(secret: &str, sub: &str) -> String {
    let claims = AccessClaims {
        sub: sub.to_string(),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        iat: None,
        email: Some("shopper@example.com".to_string()),
        role: Some("authenticated".to_string()),
    };
    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap();
    format!("Bearer {token}")
}

fn auth_request(authorization: Option<String>) -> Request<Body> {
    let mut builder = Request::builder().uri("/auth/user");
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_auth_user_with_valid_token() {
    let app = TestApp::new();

    let (status, body) = send(
        app.router(),
        auth_request(Some(bearer(JWT_SECRET, "user-42"))),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"user": {"id": "user-42"}}));
}

#[tokio::test]
async fn test_auth_user_rejects_missing_or_bad_tokens() {
    let app = TestApp::new();

    let (status, _) = send(app.router(), auth_request(None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        app.router(),
        auth_request(Some(bearer("another-secret", "user-42"))),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"error": "Invalid or expired token"}));
}
