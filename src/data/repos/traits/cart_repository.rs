use crate::data::errors::RepoError;
use crate::data::models::cart::CartLine;
use async_trait::async_trait;

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn find_cart_id(&self, user_id: &str) -> Result<Option<i32>, RepoError>;

    /// Returns the user's cart id, creating the cart if needed.
    ///
    /// Two concurrent calls for the same user resolve to the same cart: creation
    /// relies on the unique user key in storage rather than a check-then-insert.
    async fn ensure_cart(&self, user_id: &str) -> Result<i32, RepoError>;

    /// Adds `quantity` to the (cart, product) line, creating it if absent, and
    /// returns the stored quantity afterwards.
    ///
    /// Fails with `QuantityLimitExceeded` and leaves the line untouched when the
    /// accumulated quantity would exceed `max_quantity`.
    async fn upsert_item(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
        max_quantity: i32,
    ) -> Result<i32, RepoError>;

    async fn items(&self, cart_id: i32) -> Result<Vec<CartLine>, RepoError>;

    /// Removes every item from the cart. Returns how many rows were deleted.
    async fn clear_items(&self, cart_id: i32) -> Result<usize, RepoError>;
}
