use crate::api::errors::APIErrors;
use crate::api::response::DeliveryOptionResponse;
use crate::api::state::AppState;
use axum::Json;
use axum::extract::State;

pub async fn list_delivery_options(
    State(state): State<AppState>,
) -> Result<Json<Vec<DeliveryOptionResponse>>, APIErrors> {
    let options = state.delivery_options.list_options().await?;

    Ok(Json(options.into_iter().map(DeliveryOptionResponse::from).collect()))
}
