use crate::api::errors::APIErrors;
use crate::api::extractors::ValidatedJson;
use crate::api::request::{CreateOrderRequest, ListOrdersQuery};
use crate::api::response::{CreateOrderResponse, OrderResponse};
use crate::api::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};

/// Convert the user's cart into an order
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateOrderRequest>,
) -> Result<Json<CreateOrderResponse>, APIErrors> {
    let placed = state
        .orders
        .create_order(&payload.user_id, payload.delivery_option_id)
        .await?;

    Ok(Json(CreateOrderResponse {
        ok: true,
        order_id: placed.order_id,
        total_cents: placed.total_cents,
    }))
}

/// Order history for `?user_id=`, newest first. `?expand=products` includes items.
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<Vec<OrderResponse>>, APIErrors> {
    let user_id = query
        .user_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| APIErrors::Validation("user_id is required".to_string()))?;

    let orders = state
        .orders
        .list_orders(user_id, query.expands_products())
        .await?;

    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<i32>,
) -> Result<Json<OrderResponse>, APIErrors> {
    let order = state.orders.get_order(order_id).await?;

    Ok(Json(OrderResponse::from(order)))
}
