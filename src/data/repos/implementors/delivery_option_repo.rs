use crate::data::database::Database;
use crate::data::errors::RepoError;
use crate::data::models::delivery_option::DeliveryOption;
use crate::data::repos::traits::delivery_option_repository::DeliveryOptionRepository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

pub struct DeliveryOptionRepo {
    db: Database,
}

impl DeliveryOptionRepo {
    pub fn new(db: Database) -> Self {
        DeliveryOptionRepo { db }
    }
}

#[async_trait]
impl DeliveryOptionRepository for DeliveryOptionRepo {
    async fn list(&self) -> Result<Vec<DeliveryOption>, RepoError> {
        use crate::data::models::schema::delivery_options::dsl::{delivery_options, id};

        let mut conn = self.db.get_connection().await?;

        Ok(delivery_options
            .order(id.asc())
            .select(DeliveryOption::as_select())
            .load(&mut conn)
            .await?)
    }

    async fn get_price(&self, option_id: i32) -> Result<Option<i64>, RepoError> {
        use crate::data::models::schema::delivery_options::dsl::{delivery_options, price_cents};

        let mut conn = self.db.get_connection().await?;

        Ok(delivery_options
            .find(option_id)
            .select(price_cents)
            .first::<i64>(&mut conn)
            .await
            .optional()?)
    }
}
