mod common;

use async_trait::async_trait;
use chrono::TimeDelta;
use common::start_time;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use storefront_lib::data::errors::RepoError;
use storefront_lib::data::models::product::{NewProduct, Product};
use storefront_lib::data::repos::implementors::memory_store::MemoryStore;
use storefront_lib::data::repos::traits::catalog_repository::CatalogRepository;
use storefront_lib::services::catalog_service::CatalogService;
use storefront_lib::services::errors::CatalogServiceError;
use storefront_lib::services::product_cache::ProductCache;
use storefront_lib::utils::clock::ManualClock;

/// Counts listing fetches that reach the store.
struct CountingCatalog {
    inner: Arc<MemoryStore>,
    fetches: AtomicUsize,
}

#[async_trait]
impl CatalogRepository for CountingCatalog {
    async fn list(&self, category: Option<&str>) -> Result<Vec<Product>, RepoError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        CatalogRepository::list(self.inner.as_ref(), category).await
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, RepoError> {
        CatalogRepository::get_by_id(self.inner.as_ref(), id).await
    }
}

struct Fixture {
    store: Arc<MemoryStore>,
    catalog: Arc<CountingCatalog>,
    clock: Arc<ManualClock>,
    service: CatalogService,
}

impl Fixture {
    fn fetches(&self) -> usize {
        self.catalog.fetches.load(Ordering::SeqCst)
    }
}

async fn fixture(ttl: Option<TimeDelta>) -> Fixture {
    let store = Arc::new(MemoryStore::new());
    for (name, price_cents, category) in [
        ("Socks", 1090, "apparel"),
        ("Basketball", 2095, "sports"),
        ("T-Shirt", 799, "apparel"),
    ] {
        store
            .insert_product(NewProduct {
                name,
                price_cents,
                image: "images/products/test.jpg",
                category,
            })
            .await;
    }

    let catalog = Arc::new(CountingCatalog {
        inner: store.clone(),
        fetches: AtomicUsize::new(0),
    });
    let clock = Arc::new(ManualClock::new(start_time()));
    let cache = ttl.map(|ttl| ProductCache::new(ttl, clock.clone()));
    let service = CatalogService::new(catalog.clone(), cache);

    Fixture {
        store,
        catalog,
        clock,
        service,
    }
}

#[tokio::test]
async fn test_list_products_newest_first() {
    let fx = fixture(None).await;

    let names: Vec<String> = fx
        .service
        .list_products(None)
        .await
        .unwrap()
        .into_iter()
        .map(|product| product.name)
        .collect();

    assert_eq!(names, vec!["T-Shirt", "Basketball", "Socks"]);
}

#[tokio::test]
async fn test_list_products_by_category() {
    let fx = fixture(None).await;

    let apparel = fx.service.list_products(Some("apparel")).await.unwrap();
    assert_eq!(apparel.len(), 2);
    assert!(apparel.iter().all(|product| product.category == "apparel"));

    assert!(fx.service.list_products(Some("garden")).await.unwrap().is_empty());

    // An empty filter lists everything.
    assert_eq!(fx.service.list_products(Some("")).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_cached_listing_is_served_within_ttl() {
    let fx = fixture(Some(TimeDelta::seconds(60))).await;

    let first = fx.service.list_products(None).await.unwrap();
    fx.clock.advance(TimeDelta::seconds(30));
    let second = fx.service.list_products(None).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(fx.fetches(), 1);
}

#[tokio::test]
async fn test_listing_is_refetched_after_ttl() {
    let fx = fixture(Some(TimeDelta::seconds(60))).await;

    fx.service.list_products(None).await.unwrap();
    fx.store
        .insert_product(NewProduct {
            name: "Toaster",
            price_cents: 1899,
            image: "images/products/toaster.jpg",
            category: "kitchen",
        })
        .await;

    // Still cached: the new product is not visible yet.
    assert_eq!(fx.service.list_products(None).await.unwrap().len(), 3);

    fx.clock.advance(TimeDelta::seconds(60));
    let refreshed = fx.service.list_products(None).await.unwrap();

    assert_eq!(refreshed.len(), 4);
    assert_eq!(refreshed[0].name, "Toaster");
    assert_eq!(fx.fetches(), 2);
}

#[tokio::test]
async fn test_each_category_has_its_own_cache_entry() {
    let fx = fixture(Some(TimeDelta::seconds(60))).await;

    fx.service.list_products(Some("apparel")).await.unwrap();
    fx.service.list_products(Some("sports")).await.unwrap();
    fx.service.list_products(None).await.unwrap();
    assert_eq!(fx.fetches(), 3);

    fx.service.list_products(Some("apparel")).await.unwrap();
    fx.service.list_products(None).await.unwrap();
    assert_eq!(fx.fetches(), 3);
}

#[tokio::test]
async fn test_without_cache_every_listing_hits_the_store() {
    let fx = fixture(None).await;

    fx.service.list_products(None).await.unwrap();
    fx.service.list_products(None).await.unwrap();

    assert_eq!(fx.fetches(), 2);
}

#[tokio::test]
async fn test_get_product() {
    let fx = fixture(None).await;
    let listed = fx.service.list_products(None).await.unwrap();

    let product = fx.service.get_product(listed[0].id).await.unwrap();
    assert_eq!(product, listed[0]);

    let missing = fx.service.get_product(999).await;
    assert!(matches!(missing, Err(CatalogServiceError::ProductNotFound)));
}
