pub mod implementors;
pub mod traits;

use crate::data::database::Database;
use crate::data::repos::implementors::cart_repo::CartRepo;
use crate::data::repos::implementors::delivery_option_repo::DeliveryOptionRepo;
use crate::data::repos::implementors::memory_store::MemoryStore;
use crate::data::repos::implementors::order_repo::OrderRepo;
use crate::data::repos::implementors::payment_summary_repo::PaymentSummaryRepo;
use crate::data::repos::implementors::product_repo::ProductRepo;
use crate::data::repos::traits::cart_repository::CartRepository;
use crate::data::repos::traits::catalog_repository::CatalogRepository;
use crate::data::repos::traits::delivery_option_repository::DeliveryOptionRepository;
use crate::data::repos::traits::order_repository::OrderRepository;
use crate::data::repos::traits::payment_summary_repository::PaymentSummaryRepository;
use std::sync::Arc;

/// One handle per repository seam, all backed by the same store.
#[derive(Clone)]
pub struct Repositories {
    pub catalog: Arc<dyn CatalogRepository>,
    pub carts: Arc<dyn CartRepository>,
    pub delivery_options: Arc<dyn DeliveryOptionRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub payment_summaries: Arc<dyn PaymentSummaryRepository>,
}

impl Repositories {
    pub fn mysql(db: Database) -> Self {
        Repositories {
            catalog: Arc::new(ProductRepo::new(db.clone())),
            carts: Arc::new(CartRepo::new(db.clone())),
            delivery_options: Arc::new(DeliveryOptionRepo::new(db.clone())),
            orders: Arc::new(OrderRepo::new(db.clone())),
            payment_summaries: Arc::new(PaymentSummaryRepo::new(db)),
        }
    }

    pub fn memory(store: Arc<MemoryStore>) -> Self {
        Repositories {
            catalog: store.clone(),
            carts: store.clone(),
            delivery_options: store.clone(),
            orders: store.clone(),
            payment_summaries: store,
        }
    }
}
