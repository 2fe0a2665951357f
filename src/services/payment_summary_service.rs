use crate::data::models::payment_summary::PaymentSummary;
use crate::data::repos::traits::payment_summary_repository::PaymentSummaryRepository;
use crate::services::errors::PaymentSummaryServiceError;
use std::sync::Arc;

pub struct PaymentSummaryService {
    summaries: Arc<dyn PaymentSummaryRepository>,
}

impl PaymentSummaryService {
    pub fn new(summaries: Arc<dyn PaymentSummaryRepository>) -> Self {
        PaymentSummaryService { summaries }
    }

    pub async fn get_summary(&self, order_id: i32) -> Result<PaymentSummary, PaymentSummaryServiceError> {
        self.summaries
            .get_by_order_id(order_id)
            .await?
            .ok_or(PaymentSummaryServiceError::SummaryNotFound)
    }
}
