use crate::data::errors::RepoError;
use crate::data::models::cart::CartLine;
use crate::data::models::order::{NewOrder, NewOrderItem, Order, OrderLine};
use crate::services::errors::OrderServiceError;
use crate::services::order_service::PlacedOrder;
use async_trait::async_trait;

/// Operations available inside an order transaction.
///
/// Everything done through one `OrderTransaction` commits or rolls back together.
#[async_trait]
pub trait OrderTransaction: Send {
    /// Finds the user's cart and locks it until the transaction ends.
    async fn lock_cart(&mut self, user_id: &str) -> Result<Option<i32>, RepoError>;

    /// Cart items joined with the current product price.
    async fn cart_lines(&mut self, cart_id: i32) -> Result<Vec<CartLine>, RepoError>;

    async fn delivery_price(&mut self, option_id: i32) -> Result<Option<i64>, RepoError>;

    /// Inserts the order row and returns its id.
    async fn insert_order(&mut self, order: &NewOrder) -> Result<i32, RepoError>;

    async fn insert_items(&mut self, items: &[NewOrderItem]) -> Result<(), RepoError>;

    async fn clear_cart(&mut self, cart_id: i32) -> Result<usize, RepoError>;
}

/// A unit of work executed inside [`OrderRepository::run_in_transaction`].
#[async_trait]
pub trait OrderWork: Send + Sync {
    async fn run(&self, tx: &mut dyn OrderTransaction) -> Result<PlacedOrder, OrderServiceError>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Runs `work` in a single transaction: committed when it returns `Ok`,
    /// rolled back otherwise. The underlying connection is released on every path.
    async fn run_in_transaction(
        &self,
        work: &dyn OrderWork,
    ) -> Result<PlacedOrder, OrderServiceError>;

    /// Orders placed by the user, newest first.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Order>, RepoError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Order>, RepoError>;

    async fn lines_for_order(&self, order_id: i32) -> Result<Vec<OrderLine>, RepoError>;
}
