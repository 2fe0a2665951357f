use crate::data::models::schema::*;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Eq, Debug, Clone)]
#[diesel(table_name = delivery_options)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct DeliveryOption {
    pub id: i32,
    pub name: String,
    pub price_cents: i64,
}
