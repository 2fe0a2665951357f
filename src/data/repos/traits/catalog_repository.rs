use crate::data::errors::RepoError;
use crate::data::models::product::Product;
use async_trait::async_trait;

/// Read-only access to the product catalogue.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Lists products newest first (descending id), optionally restricted to one category.
    async fn list(&self, category: Option<&str>) -> Result<Vec<Product>, RepoError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, RepoError>;
}
