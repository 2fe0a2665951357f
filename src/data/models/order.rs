use crate::data::models::schema::*;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Order {
    pub id: i32,
    pub user_id: String,
    pub total_cents: i64,
    pub delivery_option_id: Option<i32>,
    pub order_time: chrono::NaiveDateTime,
    pub estimated_delivery_time: chrono::NaiveDateTime,
}

#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = orders)]
pub struct NewOrder {
    pub user_id: String,
    pub total_cents: i64,
    pub delivery_option_id: Option<i32>,
    pub order_time: chrono::NaiveDateTime,
    pub estimated_delivery_time: chrono::NaiveDateTime,
}

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = order_items)]
#[diesel(belongs_to(Order, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Insertable, PartialEq, Eq, Debug, Clone)]
#[diesel(table_name = order_items)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i64,
}

/// An order item joined with the product columns shown in order history.
#[derive(Queryable, PartialEq, Eq, Debug, Clone)]
pub struct OrderLine {
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub product_id: i32,
    pub name: String,
    pub image: String,
}
