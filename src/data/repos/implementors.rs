pub mod cart_repo;
pub mod delivery_option_repo;
pub mod memory_store;
pub mod order_repo;
pub mod payment_summary_repo;
pub mod product_repo;
