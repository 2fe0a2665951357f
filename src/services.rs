pub mod cart_service;
pub mod catalog_service;
pub mod delivery_option_service;
pub mod errors;
pub mod order_service;
pub mod payment_summary_service;
pub mod product_cache;
