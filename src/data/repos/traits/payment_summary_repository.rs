use crate::data::errors::RepoError;
use crate::data::models::payment_summary::PaymentSummary;
use async_trait::async_trait;

#[async_trait]
pub trait PaymentSummaryRepository: Send + Sync {
    async fn get_by_order_id(&self, order_id: i32) -> Result<Option<PaymentSummary>, RepoError>;
}
