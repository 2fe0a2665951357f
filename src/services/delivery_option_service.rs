use crate::data::models::delivery_option::DeliveryOption;
use crate::data::repos::traits::delivery_option_repository::DeliveryOptionRepository;
use crate::services::errors::DeliveryOptionServiceError;
use std::sync::Arc;

pub struct DeliveryOptionService {
    options: Arc<dyn DeliveryOptionRepository>,
}

impl DeliveryOptionService {
    pub fn new(options: Arc<dyn DeliveryOptionRepository>) -> Self {
        DeliveryOptionService { options }
    }

    pub async fn list_options(&self) -> Result<Vec<DeliveryOption>, DeliveryOptionServiceError> {
        Ok(self.options.list().await?)
    }

    /// Delivery cost for an optional option id. No option, or an id that does
    /// not exist, costs nothing.
    pub async fn price_for(&self, option_id: Option<i32>) -> Result<i64, DeliveryOptionServiceError> {
        let Some(option_id) = option_id else {
            return Ok(0);
        };
        Ok(self.options.get_price(option_id).await?.unwrap_or(0))
    }
}
