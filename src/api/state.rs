use crate::api::config::Config;
use crate::data::repos::Repositories;
use crate::security::jwt::JwtService;
use crate::services::cart_service::CartService;
use crate::services::catalog_service::CatalogService;
use crate::services::delivery_option_service::DeliveryOptionService;
use crate::services::order_service::OrderService;
use crate::services::payment_summary_service::PaymentSummaryService;
use crate::services::product_cache::ProductCache;
use crate::utils::clock::Clock;
use chrono::TimeDelta;
use std::sync::Arc;

/// Shared handler state. Cloning is cheap; every service sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub carts: Arc<CartService>,
    pub orders: Arc<OrderService>,
    pub delivery_options: Arc<DeliveryOptionService>,
    pub payment_summaries: Arc<PaymentSummaryService>,
    /// `None` when no `JWT_SECRET` is configured.
    pub jwt: Option<Arc<JwtService>>,
}

impl AppState {
    pub fn new(repos: Repositories, config: &Config, clock: Arc<dyn Clock>) -> Self {
        let cache = (config.product_cache_ttl > TimeDelta::zero())
            .then(|| ProductCache::new(config.product_cache_ttl, clock.clone()));

        AppState {
            catalog: Arc::new(CatalogService::new(repos.catalog, cache)),
            carts: Arc::new(CartService::new(repos.carts)),
            orders: Arc::new(OrderService::new(repos.orders, clock, config.order_lead_time)),
            delivery_options: Arc::new(DeliveryOptionService::new(repos.delivery_options)),
            payment_summaries: Arc::new(PaymentSummaryService::new(repos.payment_summaries)),
            jwt: config
                .jwt_secret
                .as_deref()
                .map(|secret| Arc::new(JwtService::new(secret))),
        }
    }
}
