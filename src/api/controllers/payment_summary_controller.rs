use crate::api::errors::APIErrors;
use crate::api::response::PaymentSummaryResponse;
use crate::api::state::AppState;
use axum::Json;
use axum::extract::{Path, State};

pub async fn get_payment_summary(
    State(state): State<AppState>,
    Path(order_id): Path<i32>,
) -> Result<Json<PaymentSummaryResponse>, APIErrors> {
    let summary = state.payment_summaries.get_summary(order_id).await?;

    Ok(Json(PaymentSummaryResponse::from(summary)))
}
