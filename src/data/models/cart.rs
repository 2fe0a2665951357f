use crate::data::models::schema::*;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = carts)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Cart {
    pub id: i32,
    pub user_id: String,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = carts)]
pub struct NewCart<'a> {
    pub user_id: &'a str,
}

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = cart_items)]
#[diesel(belongs_to(Cart, foreign_key = cart_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct CartItem {
    pub id: i32,
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = cart_items)]
pub struct NewCartItem {
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

/// A cart item joined with the product columns needed to price and render it.
#[derive(Queryable, PartialEq, Eq, Debug, Clone)]
pub struct CartLine {
    pub id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub name: String,
    pub price_cents: i64,
    pub image: String,
}
