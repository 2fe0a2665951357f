use crate::data::models::cart::CartLine;
use crate::data::models::order::{NewOrder, NewOrderItem, Order, OrderLine};
use crate::data::repos::traits::order_repository::{OrderRepository, OrderTransaction, OrderWork};
use crate::services::cart_service::is_valid_user_id;
use crate::services::errors::OrderServiceError;
use crate::utils::clock::Clock;
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use std::sync::Arc;

pub const DEFAULT_LEAD_TIME_DAYS: i64 = 3;

/// Outcome of a successful checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedOrder {
    pub order_id: i32,
    pub total_cents: i64,
}

/// An order as listed in history; `items` is only loaded on request.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub order: Order,
    pub items: Option<Vec<OrderLine>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetail {
    pub order: Order,
    pub items: Vec<OrderLine>,
}

/// Sum of quantity times unit price over the cart, in minor units.
pub fn subtotal_cents(lines: &[CartLine]) -> Result<i64, OrderServiceError> {
    lines.iter().try_fold(0i64, |acc, line| {
        i64::from(line.quantity)
            .checked_mul(line.price_cents)
            .and_then(|line_total| acc.checked_add(line_total))
            .ok_or(OrderServiceError::TotalOverflow)
    })
}

/// Converts one user's cart into an order. Runs inside a single transaction.
struct CartCheckout {
    user_id: String,
    delivery_option_id: Option<i32>,
    placed_at: DateTime<Utc>,
    lead_time: TimeDelta,
}

#[async_trait]
impl OrderWork for CartCheckout {
    async fn run(&self, tx: &mut dyn OrderTransaction) -> Result<PlacedOrder, OrderServiceError> {
        let cart_id = tx
            .lock_cart(&self.user_id)
            .await?
            .ok_or(OrderServiceError::EmptyCart)?;

        // Prices read here are the ones frozen into the order items below.
        let lines = tx.cart_lines(cart_id).await?;
        if lines.is_empty() {
            return Err(OrderServiceError::EmptyCart);
        }

        let subtotal = subtotal_cents(&lines)?;

        let (delivery_option_id, delivery_cents) = match self.delivery_option_id {
            Some(option_id) => match tx.delivery_price(option_id).await? {
                Some(price) => (Some(option_id), price),
                None => {
                    tracing::warn!(option_id, "unknown delivery option, charging no delivery");
                    (None, 0)
                }
            },
            None => (None, 0),
        };

        let total_cents = subtotal
            .checked_add(delivery_cents)
            .ok_or(OrderServiceError::TotalOverflow)?;

        let order_id = tx
            .insert_order(&NewOrder {
                user_id: self.user_id.clone(),
                total_cents,
                delivery_option_id,
                order_time: self.placed_at.naive_utc(),
                estimated_delivery_time: (self.placed_at + self.lead_time).naive_utc(),
            })
            .await?;

        let items: Vec<NewOrderItem> = lines
            .iter()
            .map(|line| NewOrderItem {
                order_id,
                product_id: line.product_id,
                quantity: line.quantity,
                unit_price_cents: line.price_cents,
            })
            .collect();
        tx.insert_items(&items).await?;

        tx.clear_cart(cart_id).await?;

        Ok(PlacedOrder {
            order_id,
            total_cents,
        })
    }
}

pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    clock: Arc<dyn Clock>,
    lead_time: TimeDelta,
}

impl OrderService {
    pub fn new(orders: Arc<dyn OrderRepository>, clock: Arc<dyn Clock>, lead_time: TimeDelta) -> Self {
        OrderService {
            orders,
            clock,
            lead_time,
        }
    }

    /// Turns the user's cart into an order and empties the cart, atomically.
    ///
    /// Fails with `EmptyCart` when the user has no cart or no items. Any failure
    /// leaves neither an order nor a modified cart behind, so the call can be retried.
    pub async fn create_order(
        &self,
        user_id: &str,
        delivery_option_id: Option<i32>,
    ) -> Result<PlacedOrder, OrderServiceError> {
        if !is_valid_user_id(user_id) {
            return Err(OrderServiceError::InvalidUser);
        }

        let checkout = CartCheckout {
            user_id: user_id.to_string(),
            delivery_option_id,
            placed_at: self.clock.now(),
            lead_time: self.lead_time,
        };

        let placed = self.orders.run_in_transaction(&checkout).await?;

        tracing::info!(
            order_id = placed.order_id,
            user_id,
            total_cents = placed.total_cents,
            "order created"
        );

        Ok(placed)
    }

    /// Order history for a user, newest first.
    ///
    /// With `expand_products` each order's items are fetched with one query per
    /// order; fine for a single user's history.
    // TODO: load expanded items for all orders with one join on order_id IN (...).
    pub async fn list_orders(
        &self,
        user_id: &str,
        expand_products: bool,
    ) -> Result<Vec<OrderSummary>, OrderServiceError> {
        if !is_valid_user_id(user_id) {
            return Err(OrderServiceError::InvalidUser);
        }

        let orders = self.orders.list_by_user(user_id).await?;

        if !expand_products {
            return Ok(orders
                .into_iter()
                .map(|order| OrderSummary { order, items: None })
                .collect());
        }

        let mut summaries = Vec::with_capacity(orders.len());
        for order in orders {
            let items = self.orders.lines_for_order(order.id).await?;
            summaries.push(OrderSummary {
                order,
                items: Some(items),
            });
        }
        Ok(summaries)
    }

    pub async fn get_order(&self, order_id: i32) -> Result<OrderDetail, OrderServiceError> {
        let order = self
            .orders
            .get_by_id(order_id)
            .await?
            .ok_or(OrderServiceError::OrderNotFound)?;
        let items = self.orders.lines_for_order(order.id).await?;

        Ok(OrderDetail { order, items })
    }
}
