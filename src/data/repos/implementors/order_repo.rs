use crate::data::database::Database;
use crate::data::errors::RepoError;
use crate::data::models::cart::CartLine;
use crate::data::models::order::{NewOrder, NewOrderItem, Order, OrderLine};
use crate::data::repos::traits::order_repository::{OrderRepository, OrderTransaction, OrderWork};
use crate::services::errors::OrderServiceError;
use crate::services::order_service::PlacedOrder;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncMysqlConnection, RunQueryDsl};

pub struct OrderRepo {
    db: Database,
}

impl OrderRepo {
    pub fn new(db: Database) -> Self {
        OrderRepo { db }
    }
}

/// An open MySQL transaction. Rows read here are locked with `FOR UPDATE`.
struct MysqlOrderTransaction<'c> {
    conn: &'c mut AsyncMysqlConnection,
}

#[async_trait]
impl OrderTransaction for MysqlOrderTransaction<'_> {
    async fn lock_cart(&mut self, owner: &str) -> Result<Option<i32>, RepoError> {
        use crate::data::models::schema::carts::dsl::{carts, id, user_id};

        Ok(carts
            .filter(user_id.eq(owner))
            .select(id)
            .for_update()
            .first::<i32>(&mut *self.conn)
            .await
            .optional()?)
    }

    async fn cart_lines(&mut self, target_cart: i32) -> Result<Vec<CartLine>, RepoError> {
        use crate::data::models::schema::cart_items::dsl as item;
        use crate::data::models::schema::products::dsl as product;

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
            .for_update()
            .load::<CartLine>(&mut *self.conn)
            .await?)
    }

    async fn delivery_price(&mut self, option_id: i32) -> Result<Option<i64>, RepoError> {
        use crate::data::models::schema::delivery_options::dsl::{delivery_options, price_cents};

        Ok(delivery_options
            .find(option_id)
            .select(price_cents)
            .first::<i64>(&mut *self.conn)
            .await
            .optional()?)
    }

    async fn insert_order(&mut self, order: &NewOrder) -> Result<i32, RepoError> {
        use crate::data::models::schema::orders::dsl::orders;

        diesel::insert_into(orders)
            .values(order)
            .execute(&mut *self.conn)
            .await?;

        let new_id: i32 = diesel::select(diesel::dsl::sql::<diesel::sql_types::Integer>(
            "LAST_INSERT_ID()",
        ))
        .get_result(&mut *self.conn)
        .await?;

        Ok(new_id)
    }

    async fn insert_items(&mut self, items: &[NewOrderItem]) -> Result<(), RepoError> {
        use crate::data::models::schema::order_items::dsl::order_items;

        diesel::insert_into(order_items)
            .values(items)
            .execute(&mut *self.conn)
            .await?;

        Ok(())
    }

    async fn clear_cart(&mut self, target_cart: i32) -> Result<usize, RepoError> {
        use crate::data::models::schema::cart_items::dsl::{cart_id, cart_items};

        Ok(diesel::delete(cart_items.filter(cart_id.eq(target_cart)))
            .execute(&mut *self.conn)
            .await?)
    }
}

#[async_trait]
impl OrderRepository for OrderRepo {
    async fn run_in_transaction(
        &self,
        work: &dyn OrderWork,
    ) -> Result<PlacedOrder, OrderServiceError> {
        let mut pooled = self.db.get_connection().await?;
        let conn: &mut AsyncMysqlConnection = &mut pooled;

        conn.transaction::<_, OrderServiceError, _>(|connection| {
            async move {
                let mut tx = MysqlOrderTransaction { conn: connection };
                work.run(&mut tx).await
            }
            .scope_boxed()
        })
        .await
    }

    async fn list_by_user(&self, owner: &str) -> Result<Vec<Order>, RepoError> {
        use crate::data::models::schema::orders::dsl::{id, order_time, orders, user_id};

        let mut conn = self.db.get_connection().await?;

        Ok(orders
            .filter(user_id.eq(owner))
            .order((order_time.desc(), id.desc()))
            .select(Order::as_select())
            .load(&mut conn)
            .await?)
    }

    async fn get_by_id(&self, order_id: i32) -> Result<Option<Order>, RepoError> {
        use crate::data::models::schema::orders::dsl::orders;

        let mut conn = self.db.get_connection().await?;

        Ok(orders
            .find(order_id)
            .select(Order::as_select())
            .first(&mut conn)
            .await
            .optional()?)
    }

    async fn lines_for_order(&self, target_order: i32) -> Result<Vec<OrderLine>, RepoError> {
        use crate::data::models::schema::order_items::dsl as item;
        use crate::data::models::schema::products::dsl as product;

        let mut conn = self.db.get_connection().await?;

        Ok(item::order_items
            .inner_join(product::products)
            .filter(item::order_id.eq(target_order))
            .order(item::id.asc())
            .select((
                item::quantity,
                item::unit_price_cents,
                product::id,
                product::name,
                product::image,
            ))
            .load::<OrderLine>(&mut conn)
            .await?)
    }
}
