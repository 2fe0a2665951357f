mod common;

use axum::http::StatusCode;
use common::{TestApp, get, post_json, send};
use serde_json::json;

#[tokio::test]
async fn test_cart_status() {
    let app = TestApp::new();

    let (status, body) = send(app.router(), get("/cart")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Cart routes operational"));
}

#[tokio::test]
async fn test_add_to_cart_returns_created() {
    let app = TestApp::new();
    let socks = app.product("Socks", 1090, "apparel").await;

    let (status, body) = send(
        app.router(),
        post_json(
            "/cart/add",
            json!({"user_id": "user-1", "product_id": socks.id, "quantity": 2}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Item added to cart");
    assert_eq!(body["quantity"], 2);
    assert!(body["cart_id"].is_i64());
}

#[tokio::test]
async fn test_add_to_cart_defaults_quantity_and_accumulates() {
    let app = TestApp::new();
    let socks = app.product("Socks", 1090, "apparel").await;
    let request = json!({"user_id": "user-1", "product_id": socks.id});

    send(app.router(), post_json("/cart/add", request.clone())).await;
    let (status, body) = send(app.router(), post_json("/cart/add", request)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["quantity"], 2);
}

#[tokio::test]
async fn test_add_to_cart_validation_errors() {
    let app = TestApp::new();
    let socks = app.product("Socks", 1090, "apparel").await;

    let cases = [
        json!({"product_id": socks.id, "quantity": 1}),
        json!({"user_id": "", "product_id": socks.id}),
        json!({"user_id": "user-1", "quantity": 1}),
        json!({"user_id": "user-1", "product_id": socks.id, "quantity": 11}),
        json!({"user_id": "user-1", "product_id": socks.id, "quantity": 0}),
        json!({"user_id": "user-1", "product_id": socks.id, "quantity": "two"}),
    ];

    for case in cases {
        let (status, body) = send(app.router(), post_json("/cart/add", case.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{case}");
        assert!(body["error"].is_string(), "{case}");
    }
}

#[tokio::test]
async fn test_add_to_cart_quantity_message() {
    let app = TestApp::new();
    let socks = app.product("Socks", 1090, "apparel").await;

    let (_, body) = send(
        app.router(),
        post_json(
            "/cart/add",
            json!({"user_id": "user-1", "product_id": socks.id, "quantity": 12}),
        ),
    )
    .await;

    assert_eq!(body, json!({"error": "Quantity must be a number between 1 and 10"}));
}

#[tokio::test]
async fn test_add_to_cart_over_limit_is_bad_request() {
    let app = TestApp::new();
    let socks = app.product("Socks", 1090, "apparel").await;

    send(
        app.router(),
        post_json(
            "/cart/add",
            json!({"user_id": "user-1", "product_id": socks.id, "quantity": 9}),
        ),
    )
    .await;
    let (status, _) = send(
        app.router(),
        post_json(
            "/cart/add",
            json!({"user_id": "user-1", "product_id": socks.id, "quantity": 2}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_unknown_product_is_not_found() {
    let app = TestApp::new();

    let (status, body) = send(
        app.router(),
        post_json("/cart/add", json!({"user_id": "user-1", "product_id": 77})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Product not found"}));
}

#[tokio::test]
async fn test_get_cart_lists_items() {
    let app = TestApp::new();
    let socks = app.product("Socks", 1090, "apparel").await;
    app.state.carts.add_item("user-1", socks.id, 3).await.unwrap();

    let (status, body) = send(app.router(), get("/cart/user-1")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["cart_id"].is_i64());
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["product_id"], socks.id);
    assert_eq!(items[0]["quantity"], 3);
    assert_eq!(items[0]["name"], "Socks");
    assert_eq!(items[0]["price_cents"], 1090);
}

#[tokio::test]
async fn test_get_cart_without_cart_returns_empty_items() {
    let app = TestApp::new();

    let (status, body) = send(app.router(), get("/cart/nobody")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"items": []}));
}
