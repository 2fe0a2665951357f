use crate::api::controllers::cart_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::{get, post};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart_controller::cart_status))
        .route("/add", post(cart_controller::add_to_cart))
        .route("/{user_id}", get(cart_controller::get_cart))
}
