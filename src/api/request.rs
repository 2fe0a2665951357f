use serde::Deserialize;
use validator::Validate;

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddToCartRequest {
    #[validate(length(min = 1, max = 64, message = "user_id is required"))]
    pub user_id: String,
    #[validate(range(min = 1, message = "product_id must be a positive integer"))]
    pub product_id: i32,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, max = 10, message = "Quantity must be a number between 1 and 10"))]
    pub quantity: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, max = 64, message = "user_id is required"))]
    pub user_id: String,
    pub delivery_option_id: Option<i32>,
}

/// Query string of `GET /orders`.
#[derive(Debug, Deserialize)]
pub struct ListOrdersQuery {
    pub user_id: Option<String>,
    pub expand: Option<String>,
}

impl ListOrdersQuery {
    pub fn expands_products(&self) -> bool {
        self.expand.as_deref() == Some("products")
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
}
