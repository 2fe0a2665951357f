use crate::api::controllers::delivery_option_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(delivery_option_controller::list_delivery_options))
}
