use crate::api::controllers::auth_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<AppState> {
    Router::new().route("/user", get(auth_controller::current_user))
}
