use crate::api::controllers::payment_summary_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<AppState> {
    Router::new().route("/{order_id}", get(payment_summary_controller::get_payment_summary))
}
