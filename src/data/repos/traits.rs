pub mod cart_repository;
pub mod catalog_repository;
pub mod delivery_option_repository;
pub mod order_repository;
pub mod payment_summary_repository;
