pub mod cart;
pub mod delivery_option;
pub mod order;
pub mod payment_summary;
pub mod product;
pub mod schema;
