pub mod auth_routes;
pub mod cart_routes;
pub mod delivery_option_routes;
pub mod order_routes;
pub mod payment_summary_routes;
pub mod product_routes;
