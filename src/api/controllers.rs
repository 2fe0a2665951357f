pub mod auth_controller;
pub mod cart_controller;
pub mod delivery_option_controller;
pub mod order_controller;
pub mod payment_summary_controller;
pub mod product_controller;
