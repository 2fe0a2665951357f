use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub price_cents: i64,
    pub image: String,
    pub category: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DeliveryOptionResponse {
    pub id: i32,
    pub name: String,
    pub price_cents: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AddToCartResponse {
    pub message: String,
    pub cart_id: i32,
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartItemResponse {
    pub id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub name: String,
    pub price_cents: i64,
    pub image: String,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartResponse {
    pub cart_id: Option<i32>,
    pub items: Vec<CartItemResponse>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateOrderResponse {
    pub ok: bool,
    pub order_id: i32,
    pub total_cents: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderProductResponse {
    pub id: i32,
    pub name: String,
    pub image: String,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderItemResponse {
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub product: OrderProductResponse,
    /// Only set on items of an expanded order listing.
    pub estimated_delivery_time_ms: Option<i64>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderResponse {
    pub id: i32,
    pub user_id: String,
    pub total_cents: i64,
    pub delivery_option_id: Option<i32>,
    pub order_time_ms: i64,
    pub estimated_delivery_time_ms: i64,
    pub products: Option<Vec<OrderItemResponse>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaymentSummaryResponse {
    pub order_id: i32,
    pub item_count: i32,
    pub items_cents: i64,
    pub shipping_cents: i64,
    pub total_before_tax_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthUserResponse {
    pub user: UserIdentity,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserIdentity {
    pub id: String,
}
