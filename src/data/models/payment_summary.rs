use crate::data::models::schema::*;
use diesel::prelude::*;

/// Itemised totals for an order. Rows are written by the billing job, never by this service.
#[derive(Queryable, Selectable, PartialEq, Eq, Debug, Clone)]
#[diesel(table_name = payment_summaries)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct PaymentSummary {
    pub order_id: i32,
    pub item_count: i32,
    pub items_cents: i64,
    pub shipping_cents: i64,
    pub total_before_tax_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}
