use crate::data::models::cart::CartLine;
use crate::data::repos::traits::cart_repository::CartRepository;
use crate::services::errors::CartServiceError;
use std::sync::Arc;

pub const MIN_QUANTITY: i32 = 1;
pub const MAX_QUANTITY: i32 = 10;
pub const MAX_USER_ID_LEN: usize = 64;

/// The result of adding a product to a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddedItem {
    pub cart_id: i32,
    /// Quantity stored for the line after the add.
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartContents {
    /// `None` when the user has never added anything.
    pub cart_id: Option<i32>,
    pub items: Vec<CartLine>,
}

pub struct CartService {
    carts: Arc<dyn CartRepository>,
}

impl CartService {
    pub fn new(carts: Arc<dyn CartRepository>) -> Self {
        CartService { carts }
    }

    /// Adds `quantity` units of a product to the user's cart, creating the cart
    /// on first use. Repeated adds accumulate; a line never holds more than
    /// [`MAX_QUANTITY`] units.
    pub async fn add_item(
        &self,
        user_id: &str,
        product_id: i32,
        quantity: i32,
    ) -> Result<AddedItem, CartServiceError> {
        if !is_valid_user_id(user_id) {
            return Err(CartServiceError::InvalidUser);
        }
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
            return Err(CartServiceError::InvalidQuantity {
                min: MIN_QUANTITY,
                max: MAX_QUANTITY,
            });
        }

        let cart_id = self.carts.ensure_cart(user_id).await?;
        let quantity = self
            .carts
            .upsert_item(cart_id, product_id, quantity, MAX_QUANTITY)
            .await?;

        tracing::debug!(cart_id, product_id, quantity, "cart line updated");

        Ok(AddedItem { cart_id, quantity })
    }

    pub async fn ensure_cart(&self, user_id: &str) -> Result<i32, CartServiceError> {
        if !is_valid_user_id(user_id) {
            return Err(CartServiceError::InvalidUser);
        }
        Ok(self.carts.ensure_cart(user_id).await?)
    }

    pub async fn get_cart(&self, user_id: &str) -> Result<CartContents, CartServiceError> {
        if !is_valid_user_id(user_id) {
            return Err(CartServiceError::InvalidUser);
        }

        match self.carts.find_cart_id(user_id).await? {
            Some(cart_id) => Ok(CartContents {
                cart_id: Some(cart_id),
                items: self.carts.items(cart_id).await?,
            }),
            None => Ok(CartContents {
                cart_id: None,
                items: Vec::new(),
            }),
        }
    }

    /// Empties the cart. Clearing an already empty cart is a no-op.
    pub async fn clear_items(&self, cart_id: i32) -> Result<usize, CartServiceError> {
        Ok(self.carts.clear_items(cart_id).await?)
    }
}

pub(crate) fn is_valid_user_id(user_id: &str) -> bool {
    !user_id.trim().is_empty() && user_id.len() <= MAX_USER_ID_LEN
}
