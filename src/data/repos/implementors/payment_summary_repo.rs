use crate::data::database::Database;
use crate::data::errors::RepoError;
use crate::data::models::payment_summary::PaymentSummary;
use crate::data::repos::traits::payment_summary_repository::PaymentSummaryRepository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

pub struct PaymentSummaryRepo {
    db: Database,
}

impl PaymentSummaryRepo {
    pub fn new(db: Database) -> Self {
        PaymentSummaryRepo { db }
    }
}

#[async_trait]
impl PaymentSummaryRepository for PaymentSummaryRepo {
    async fn get_by_order_id(&self, id: i32) -> Result<Option<PaymentSummary>, RepoError> {
        use crate::data::models::schema::payment_summaries::dsl::{order_id, payment_summaries};

        let mut conn = self.db.get_connection().await?;

        Ok(payment_summaries
            .filter(order_id.eq(id))
            .select(PaymentSummary::as_select())
            .first(&mut conn)
            .await
            .optional()?)
    }
}
