use crate::data::database::Database;
use crate::data::errors::RepoError;
use crate::data::models::product::Product;
use crate::data::repos::traits::catalog_repository::CatalogRepository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::pooled_connection::deadpool::Object;
use diesel_async::{AsyncMysqlConnection, RunQueryDsl};

pub struct ProductRepo {
    db: Database,
}

impl ProductRepo {
    pub fn new(db: Database) -> Self {
        ProductRepo { db }
    }
}

#[async_trait]
impl CatalogRepository for ProductRepo {
    async fn list(&self, category_filter: Option<&str>) -> Result<Vec<Product>, RepoError> {
        use crate::data::models::schema::products::dsl::{category, id, products};

        let mut conn: Object<AsyncMysqlConnection> = self.db.get_connection().await?;

        let rows = match category_filter {
            Some(name) => {
                products
                    .filter(category.eq(name))
                    .order(id.desc())
                    .select(Product::as_select())
                    .load(&mut conn)
                    .await?
            }
            None => {
                products
                    .order(id.desc())
                    .select(Product::as_select())
                    .load(&mut conn)
                    .await?
            }
        };

        Ok(rows)
    }

    async fn get_by_id(&self, product_id: i32) -> Result<Option<Product>, RepoError> {
        use crate::data::models::schema::products::dsl::products;

        let mut conn: Object<AsyncMysqlConnection> = self.db.get_connection().await?;

        let product = products
            .find(product_id)
            .select(Product::as_select())
            .first(&mut conn)
            .await
            .optional()?;

        Ok(product)
    }
}
