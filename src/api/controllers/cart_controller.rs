use crate::api::errors::APIErrors;
use crate::api::extractors::ValidatedJson;
use crate::api::request::AddToCartRequest;
use crate::api::response::{AddToCartResponse, CartResponse};
use crate::api::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

pub async fn cart_status() -> &'static str {
    "Cart routes operational"
}

/// Add a product to the user's cart, creating the cart on first use
pub async fn add_to_cart(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AddToCartRequest>,
) -> Result<(StatusCode, Json<AddToCartResponse>), APIErrors> {
    let added = state
        .carts
        .add_item(&payload.user_id, payload.product_id, payload.quantity)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AddToCartResponse {
            message: "Item added to cart".to_string(),
            cart_id: added.cart_id,
            quantity: added.quantity,
        }),
    ))
}

pub async fn get_cart(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<CartResponse>, APIErrors> {
    let cart = state.carts.get_cart(&user_id).await?;

    Ok(Json(CartResponse::from(cart)))
}
