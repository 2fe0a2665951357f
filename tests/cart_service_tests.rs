mod common;

use common::TestApp;
use storefront_lib::services::cart_service::MAX_QUANTITY;
use storefront_lib::services::errors::CartServiceError;

#[tokio::test]
async fn test_add_item_creates_cart_and_line() {
    let app = TestApp::new();
    let socks = app.product("Socks", 1090, "apparel").await;

    let added = app.state.carts.add_item("user-1", socks.id, 2).await.unwrap();
    assert_eq!(added.quantity, 2);

    let cart = app.state.carts.get_cart("user-1").await.unwrap();
    assert_eq!(cart.cart_id, Some(added.cart_id));
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].product_id, socks.id);
    assert_eq!(cart.items[0].name, "Socks");
    assert_eq!(cart.items[0].price_cents, 1090);
}

#[tokio::test]
async fn test_repeated_adds_accumulate() {
    let app = TestApp::new();
    let socks = app.product("Socks", 1090, "apparel").await;

    for quantity in [1, 3, 2] {
        app.state.carts.add_item("user-1", socks.id, quantity).await.unwrap();
    }

    let cart = app.state.carts.get_cart("user-1").await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 6);
}

#[tokio::test]
async fn test_add_beyond_limit_is_rejected_and_line_unchanged() {
    let app = TestApp::new();
    let socks = app.product("Socks", 1090, "apparel").await;

    app.state.carts.add_item("user-1", socks.id, 8).await.unwrap();
    let result = app.state.carts.add_item("user-1", socks.id, 3).await;

    assert!(matches!(
        result,
        Err(CartServiceError::QuantityLimitExceeded { attempted: 11, max }) if max == MAX_QUANTITY
    ));
    let cart = app.state.carts.get_cart("user-1").await.unwrap();
    assert_eq!(cart.items[0].quantity, 8);

    // Reaching the limit exactly is allowed.
    let added = app.state.carts.add_item("user-1", socks.id, 2).await.unwrap();
    assert_eq!(added.quantity, MAX_QUANTITY);
}

#[tokio::test]
async fn test_quantity_out_of_range_is_rejected_before_any_write() {
    let app = TestApp::new();
    let socks = app.product("Socks", 1090, "apparel").await;

    for quantity in [0, -1, 11] {
        let result = app.state.carts.add_item("user-1", socks.id, quantity).await;
        assert!(matches!(result, Err(CartServiceError::InvalidQuantity { .. })));
    }

    let cart = app.state.carts.get_cart("user-1").await.unwrap();
    assert_eq!(cart.cart_id, None);
}

#[tokio::test]
async fn test_blank_user_is_rejected() {
    let app = TestApp::new();
    let socks = app.product("Socks", 1090, "apparel").await;

    let result = app.state.carts.add_item("  ", socks.id, 1).await;
    assert!(matches!(result, Err(CartServiceError::InvalidUser)));

    let too_long = "u".repeat(65);
    let result = app.state.carts.add_item(&too_long, socks.id, 1).await;
    assert!(matches!(result, Err(CartServiceError::InvalidUser)));
}

#[tokio::test]
async fn test_unknown_product_is_not_found() {
    let app = TestApp::new();

    let result = app.state.carts.add_item("user-1", 999, 1).await;
    assert!(matches!(result, Err(CartServiceError::ProductNotFound)));
}

#[tokio::test]
async fn test_ensure_cart_is_idempotent_under_concurrency() {
    let app = TestApp::new();
    let carts = app.state.carts.clone();

    let (first, second) = tokio::join!(carts.ensure_cart("user-1"), carts.ensure_cart("user-1"));
    let first = first.unwrap();
    assert_eq!(first, second.unwrap());
    assert_eq!(carts.ensure_cart("user-1").await.unwrap(), first);
    assert_ne!(carts.ensure_cart("user-2").await.unwrap(), first);
}

#[tokio::test]
async fn test_get_cart_for_unknown_user_is_empty() {
    let app = TestApp::new();

    let cart = app.state.carts.get_cart("nobody").await.unwrap();
    assert_eq!(cart.cart_id, None);
    assert!(cart.items.is_empty());
}

#[tokio::test]
async fn test_clear_items_is_idempotent() {
    let app = TestApp::new();
    let socks = app.product("Socks", 1090, "apparel").await;
    let ball = app.product("Basketball", 2095, "sports").await;

    let added = app.state.carts.add_item("user-1", socks.id, 1).await.unwrap();
    app.state.carts.add_item("user-1", ball.id, 1).await.unwrap();

    assert_eq!(app.state.carts.clear_items(added.cart_id).await.unwrap(), 2);
    assert_eq!(app.state.carts.clear_items(added.cart_id).await.unwrap(), 0);

    let cart = app.state.carts.get_cart("user-1").await.unwrap();
    assert_eq!(cart.cart_id, Some(added.cart_id));
    assert!(cart.items.is_empty());
}
