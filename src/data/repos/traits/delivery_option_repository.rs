use crate::data::errors::RepoError;
use crate::data::models::delivery_option::DeliveryOption;
use async_trait::async_trait;

#[async_trait]
pub trait DeliveryOptionRepository: Send + Sync {
    /// All delivery options ordered by id.
    async fn list(&self) -> Result<Vec<DeliveryOption>, RepoError>;

    async fn get_price(&self, id: i32) -> Result<Option<i64>, RepoError>;
}
