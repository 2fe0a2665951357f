use crate::data::database::Database;
use crate::data::errors::RepoError;
use crate::data::models::cart::{CartLine, NewCart, NewCartItem};
use crate::data::repos::traits::cart_repository::CartRepository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncMysqlConnection, RunQueryDsl};

pub struct CartRepo {
    db: Database,
}

impl CartRepo {
    pub fn new(db: Database) -> Self {
        CartRepo { db }
    }
}

#[async_trait]
impl CartRepository for CartRepo {
    async fn find_cart_id(&self, owner: &str) -> Result<Option<i32>, RepoError> {
        use crate::data::models::schema::carts::dsl::{carts, id, user_id};

        let mut conn = self.db.get_connection().await?;

        Ok(carts
            .filter(user_id.eq(owner))
            .select(id)
            .first::<i32>(&mut conn)
            .await
            .optional()?)
    }

    async fn ensure_cart(&self, owner: &str) -> Result<i32, RepoError> {
        use crate::data::models::schema::carts::dsl::{carts, id, user_id};

        let mut conn = self.db.get_connection().await?;

        // INSERT IGNORE lets the unique key on user_id settle concurrent first adds.
        diesel::insert_or_ignore_into(carts)
            .values(&NewCart { user_id: owner })
            .execute(&mut conn)
            .await?;

        Ok(carts
            .filter(user_id.eq(owner))
            .select(id)
            .first::<i32>(&mut conn)
            .await?)
    }

    async fn upsert_item(
        &self,
        target_cart: i32,
        target_product: i32,
        amount: i32,
        max_quantity: i32,
    ) -> Result<i32, RepoError> {
        use crate::data::models::schema::cart_items::dsl::{cart_id, cart_items, product_id, quantity};
        use crate::data::models::schema::carts::dsl as cart_dsl;
        use crate::data::models::schema::products::dsl as product_dsl;

        let mut pooled = self.db.get_connection().await?;
        let conn: &mut AsyncMysqlConnection = &mut pooled;

        conn.transaction::<_, RepoError, _>(|connection| {
            async move {
                // Lock the cart row so concurrent adds to the same cart apply one at a time.
                cart_dsl::carts
                    .find(target_cart)
                    .select(cart_dsl::id)
                    .for_update()
                    .first::<i32>(connection)
                    .await
                    .optional()?
                    .ok_or(RepoError::CartNotFound(target_cart))?;

                product_dsl::products
                    .find(target_product)
                    .select(product_dsl::id)
                    .first::<i32>(connection)
                    .await
                    .optional()?
                    .ok_or(RepoError::ProductNotFound(target_product))?;

                let current = cart_items
                    .filter(cart_id.eq(target_cart))
                    .filter(product_id.eq(target_product))
                    .select(quantity)
                    .first::<i32>(connection)
                    .await
                    .optional()?;

                let next = current.unwrap_or(0).saturating_add(amount);
                if next > max_quantity {
                    return Err(RepoError::QuantityLimitExceeded {
                        attempted: next,
                        max: max_quantity,
                    });
                }

                match current {
                    Some(_) => {
                        diesel::update(
                            cart_items
                                .filter(cart_id.eq(target_cart))
                                .filter(product_id.eq(target_product)),
                        )
                        .set(quantity.eq(next))
                        .execute(connection)
                        .await?;
                    }
                    None => {
                        diesel::insert_into(cart_items)
                            .values(&NewCartItem {
                                cart_id: target_cart,
                                product_id: target_product,
                                quantity: next,
                            })
                            .execute(connection)
                            .await?;
                    }
                }

                Ok(next)
            }
            .scope_boxed()
        })
        .await
    }

    async fn items(&self, target_cart: i32) -> Result<Vec<CartLine>, RepoError> {
        use crate::data::models::schema::cart_items::dsl as item;
        use crate::data::models::schema::products::dsl as product;

        let mut conn = self.db.get_connection().await?;

        Ok(item::cart_items
            .inner_join(product::products)
            .filter(item::cart_id.eq(target_cart))
            .order(item::id.asc())
            .select((
                item::id,
                item::product_id,
                item::quantity,
                product::name,
                product::price_cents,
                product::image,
            ))
            .load::<CartLine>(&mut conn)
            .await?)
    }

    async fn clear_items(&self, target_cart: i32) -> Result<usize, RepoError> {
        use crate::data::models::schema::cart_items::dsl::{cart_id, cart_items};

        let mut conn = self.db.get_connection().await?;

        Ok(diesel::delete(cart_items.filter(cart_id.eq(target_cart)))
            .execute(&mut conn)
            .await?)
    }
}
