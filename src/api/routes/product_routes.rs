use crate::api::controllers::product_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(product_controller::list_products))
        .route("/{id}", get(product_controller::get_product_by_id))
}
