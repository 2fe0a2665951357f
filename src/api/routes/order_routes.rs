use crate::api::controllers::order_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::{get, post};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(order_controller::list_orders))
        .route("/create", post(order_controller::create_order))
        .route("/{order_id}", get(order_controller::get_order))
}
