use crate::data::models::product::Product;
use crate::data::repos::traits::catalog_repository::CatalogRepository;
use crate::services::errors::CatalogServiceError;
use crate::services::product_cache::{CacheKey, ProductCache};
use std::sync::Arc;

pub struct CatalogService {
    products: Arc<dyn CatalogRepository>,
    cache: Option<ProductCache>,
}

impl CatalogService {
    /// `cache` is optional; without one every listing goes to the store.
    pub fn new(products: Arc<dyn CatalogRepository>, cache: Option<ProductCache>) -> Self {
        CatalogService { products, cache }
    }

    /// Lists products newest first, optionally filtered by category.
    /// An empty category is the same as no filter.
    pub async fn list_products(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<Product>, CatalogServiceError> {
        let category = category.filter(|name| !name.is_empty());
        let key = CacheKey::for_filter(category);

        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(&key) {
                tracing::debug!(?key, "product cache hit");
                return Ok(hit);
            }
            tracing::debug!(?key, "product cache miss");
        }

        let products = self.products.list(category).await?;

        if let Some(cache) = &self.cache {
            cache.put(key, products.clone());
        }

        Ok(products)
    }

    pub async fn get_product(&self, product_id: i32) -> Result<Product, CatalogServiceError> {
        self.products
            .get_by_id(product_id)
            .await?
            .ok_or(CatalogServiceError::ProductNotFound)
    }
}
