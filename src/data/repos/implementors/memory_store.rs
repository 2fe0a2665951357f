//! Process-local store implementing every repository trait.
//!
//! Used by the test suite and by `STORE_BACKEND=memory`. All state sits behind
//! one async mutex: an order transaction holds it for its whole duration, which
//! makes transactions serialisable, and restores a snapshot when the unit of
//! work fails.

use crate::data::errors::RepoError;
use crate::data::models::cart::{Cart, CartItem, CartLine};
use crate::data::models::delivery_option::DeliveryOption;
use crate::data::models::order::{NewOrder, NewOrderItem, Order, OrderItem, OrderLine};
use crate::data::models::payment_summary::PaymentSummary;
use crate::data::models::product::{NewProduct, Product};
use crate::data::repos::traits::cart_repository::CartRepository;
use crate::data::repos::traits::catalog_repository::CatalogRepository;
use crate::data::repos::traits::delivery_option_repository::DeliveryOptionRepository;
use crate::data::repos::traits::order_repository::{OrderRepository, OrderTransaction, OrderWork};
use crate::data::repos::traits::payment_summary_repository::PaymentSummaryRepository;
use crate::services::errors::OrderServiceError;
use crate::services::order_service::PlacedOrder;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use tokio::sync::Mutex;

/// Writes inside an order transaction that can be made to fail once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailurePoint {
    InsertOrder,
    InsertOrderItems,
    ClearCart,
}

impl FailurePoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailurePoint::InsertOrder => "insert order",
            FailurePoint::InsertOrderItems => "insert order items",
            FailurePoint::ClearCart => "clear cart",
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Tables {
    products: BTreeMap<i32, Product>,
    carts: BTreeMap<i32, Cart>,
    cart_items: BTreeMap<i32, CartItem>,
    delivery_options: BTreeMap<i32, DeliveryOption>,
    orders: BTreeMap<i32, Order>,
    order_items: BTreeMap<i32, OrderItem>,
    payment_summaries: BTreeMap<i32, PaymentSummary>,
    last_id: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }

    fn cart_for_user(&self, user_id: &str) -> Option<i32> {
        self.carts
            .values()
            .find(|cart| cart.user_id == user_id)
            .map(|cart| cart.id)
    }

    fn cart_lines(&self, cart_id: i32) -> Vec<CartLine> {
        self.cart_items
            .values()
            .filter(|item| item.cart_id == cart_id)
            .filter_map(|item| {
                self.products.get(&item.product_id).map(|product| CartLine {
                    id: item.id,
                    product_id: item.product_id,
                    quantity: item.quantity,
                    name: product.name.clone(),
                    price_cents: product.price_cents,
                    image: product.image.clone(),
                })
            })
            .collect()
    }

    fn clear_cart(&mut self, cart_id: i32) -> usize {
        let before = self.cart_items.len();
        self.cart_items.retain(|_, item| item.cart_id != cart_id);
        before - self.cart_items.len()
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    armed_failures: parking_lot::Mutex<HashSet<FailurePoint>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Makes the next write at `point` fail with [`RepoError::Injected`].
    pub fn fail_next(&self, point: FailurePoint) {
        self.armed_failures.lock().insert(point);
    }

    fn take_failure(&self, point: FailurePoint) -> Result<(), RepoError> {
        if self.armed_failures.lock().remove(&point) {
            return Err(RepoError::Injected(point.as_str()));
        }
        Ok(())
    }

    pub async fn insert_product(&self, product: NewProduct<'_>) -> Product {
        let mut tables = self.tables.lock().await;
        let id = tables.next_id();
        let row = Product {
            id,
            name: product.name.to_string(),
            price_cents: product.price_cents,
            image: product.image.to_string(),
            category: product.category.to_string(),
        };
        tables.products.insert(id, row.clone());
        row
    }

    /// Reprices a product, as the catalogue admin tooling would.
    pub async fn set_product_price(&self, product_id: i32, price_cents: i64) -> Result<(), RepoError> {
        let mut tables = self.tables.lock().await;
        let product = tables
            .products
            .get_mut(&product_id)
            .ok_or(RepoError::ProductNotFound(product_id))?;
        product.price_cents = price_cents;
        Ok(())
    }

    pub async fn insert_delivery_option(&self, name: &str, price_cents: i64) -> DeliveryOption {
        let mut tables = self.tables.lock().await;
        let id = tables.next_id();
        let row = DeliveryOption {
            id,
            name: name.to_string(),
            price_cents,
        };
        tables.delivery_options.insert(id, row.clone());
        row
    }

    pub async fn insert_payment_summary(&self, summary: PaymentSummary) {
        let mut tables = self.tables.lock().await;
        tables.payment_summaries.insert(summary.order_id, summary);
    }

    /// Raw order item rows, including the captured unit price.
    pub async fn order_items(&self, order_id: i32) -> Vec<OrderItem> {
        let tables = self.tables.lock().await;
        tables
            .order_items
            .values()
            .filter(|item| item.order_id == order_id)
            .cloned()
            .collect()
    }

    /// Fills an empty store with a small catalogue and the usual delivery options.
    pub async fn seed_demo_data(&self) {
        let catalogue = [
            ("Black and Gray Athletic Cotton Socks", 1090, "images/products/athletic-cotton-socks.jpg", "apparel"),
            ("Intermediate Size Basketball", 2095, "images/products/intermediate-composite-basketball.jpg", "sports"),
            ("Adults Plain Cotton T-Shirt - 2 Pack", 799, "images/products/adults-plain-cotton-tshirt.jpg", "apparel"),
            ("2 Slot Toaster - Black", 1899, "images/products/black-2-slot-toaster.jpg", "kitchen"),
        ];
        for (name, price_cents, image, category) in catalogue {
            self.insert_product(NewProduct {
                name,
                price_cents,
                image,
                category,
            })
            .await;
        }

        for (name, price_cents) in [("Standard", 0), ("Express", 499), ("Overnight", 999)] {
            self.insert_delivery_option(name, price_cents).await;
        }

        tracing::info!("Seeded in-memory store with demo catalogue");
    }
}

#[async_trait]
impl CatalogRepository for MemoryStore {
    async fn list(&self, category: Option<&str>) -> Result<Vec<Product>, RepoError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .products
            .values()
            .rev()
            .filter(|product| category.is_none_or(|name| product.category == name))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, RepoError> {
        let tables = self.tables.lock().await;
        Ok(tables.products.get(&id).cloned())
    }
}

#[async_trait]
impl CartRepository for MemoryStore {
    async fn find_cart_id(&self, user_id: &str) -> Result<Option<i32>, RepoError> {
        let tables = self.tables.lock().await;
        Ok(tables.cart_for_user(user_id))
    }

    async fn ensure_cart(&self, user_id: &str) -> Result<i32, RepoError> {
        let mut tables = self.tables.lock().await;
        if let Some(id) = tables.cart_for_user(user_id) {
            return Ok(id);
        }

        let id = tables.next_id();
        tables.carts.insert(
            id,
            Cart {
                id,
                user_id: user_id.to_string(),
                created_at: chrono::Utc::now().naive_utc(),
            },
        );
        Ok(id)
    }

    async fn upsert_item(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
        max_quantity: i32,
    ) -> Result<i32, RepoError> {
        let mut tables = self.tables.lock().await;

        if !tables.carts.contains_key(&cart_id) {
            return Err(RepoError::CartNotFound(cart_id));
        }
        if !tables.products.contains_key(&product_id) {
            return Err(RepoError::ProductNotFound(product_id));
        }

        let existing = tables
            .cart_items
            .values_mut()
            .find(|item| item.cart_id == cart_id && item.product_id == product_id);

        let next = existing
            .as_ref()
            .map_or(0, |item| item.quantity)
            .saturating_add(quantity);
        if next > max_quantity {
            return Err(RepoError::QuantityLimitExceeded {
                attempted: next,
                max: max_quantity,
            });
        }

        match existing {
            Some(item) => item.quantity = next,
            None => {
                let id = tables.next_id();
                tables.cart_items.insert(
                    id,
                    CartItem {
                        id,
                        cart_id,
                        product_id,
                        quantity: next,
                        created_at: chrono::Utc::now().naive_utc(),
                    },
                );
            }
        }

        Ok(next)
    }

    async fn items(&self, cart_id: i32) -> Result<Vec<CartLine>, RepoError> {
        let tables = self.tables.lock().await;
        Ok(tables.cart_lines(cart_id))
    }

    async fn clear_items(&self, cart_id: i32) -> Result<usize, RepoError> {
        let mut tables = self.tables.lock().await;
        Ok(tables.clear_cart(cart_id))
    }
}

#[async_trait]
impl DeliveryOptionRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<DeliveryOption>, RepoError> {
        let tables = self.tables.lock().await;
        Ok(tables.delivery_options.values().cloned().collect())
    }

    async fn get_price(&self, id: i32) -> Result<Option<i64>, RepoError> {
        let tables = self.tables.lock().await;
        Ok(tables.delivery_options.get(&id).map(|option| option.price_cents))
    }
}

#[async_trait]
impl PaymentSummaryRepository for MemoryStore {
    async fn get_by_order_id(&self, order_id: i32) -> Result<Option<PaymentSummary>, RepoError> {
        let tables = self.tables.lock().await;
        Ok(tables.payment_summaries.get(&order_id).cloned())
    }
}

struct MemoryTransaction<'a> {
    tables: &'a mut Tables,
    store: &'a MemoryStore,
}

#[async_trait]
impl OrderTransaction for MemoryTransaction<'_> {
    async fn lock_cart(&mut self, user_id: &str) -> Result<Option<i32>, RepoError> {
        Ok(self.tables.cart_for_user(user_id))
    }

    async fn cart_lines(&mut self, cart_id: i32) -> Result<Vec<CartLine>, RepoError> {
        Ok(self.tables.cart_lines(cart_id))
    }

    async fn delivery_price(&mut self, option_id: i32) -> Result<Option<i64>, RepoError> {
        Ok(self
            .tables
            .delivery_options
            .get(&option_id)
            .map(|option| option.price_cents))
    }

    async fn insert_order(&mut self, order: &NewOrder) -> Result<i32, RepoError> {
        self.store.take_failure(FailurePoint::InsertOrder)?;

        let id = self.tables.next_id();
        self.tables.orders.insert(
            id,
            Order {
                id,
                user_id: order.user_id.clone(),
                total_cents: order.total_cents,
                delivery_option_id: order.delivery_option_id,
                order_time: order.order_time,
                estimated_delivery_time: order.estimated_delivery_time,
            },
        );
        Ok(id)
    }

    async fn insert_items(&mut self, items: &[NewOrderItem]) -> Result<(), RepoError> {
        let created_at = chrono::Utc::now().naive_utc();
        for item in items {
            let id = self.tables.next_id();
            self.tables.order_items.insert(
                id,
                OrderItem {
                    id,
                    order_id: item.order_id,
                    product_id: item.product_id,
                    quantity: item.quantity,
                    unit_price_cents: item.unit_price_cents,
                    created_at,
                },
            );
        }
        // Fails after the rows are written so rollback has something to undo.
        self.store.take_failure(FailurePoint::InsertOrderItems)
    }

    async fn clear_cart(&mut self, cart_id: i32) -> Result<usize, RepoError> {
        self.store.take_failure(FailurePoint::ClearCart)?;
        Ok(self.tables.clear_cart(cart_id))
    }
}

#[async_trait]
impl OrderRepository for MemoryStore {
    async fn run_in_transaction(
        &self,
        work: &dyn OrderWork,
    ) -> Result<PlacedOrder, OrderServiceError> {
        let mut tables = self.tables.lock().await;
        let snapshot = tables.clone();

        let result = {
            let mut tx = MemoryTransaction {
                tables: &mut *tables,
                store: self,
            };
            work.run(&mut tx).await
        };

        if result.is_err() {
            *tables = snapshot;
        }
        result
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Order>, RepoError> {
        let tables = self.tables.lock().await;
        let mut orders: Vec<Order> = tables
            .orders
            .values()
            .filter(|order| order.user_id == user_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| {
            b.order_time
                .cmp(&a.order_time)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(orders)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Order>, RepoError> {
        let tables = self.tables.lock().await;
        Ok(tables.orders.get(&id).cloned())
    }

    async fn lines_for_order(&self, order_id: i32) -> Result<Vec<OrderLine>, RepoError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .order_items
            .values()
            .filter(|item| item.order_id == order_id)
            .filter_map(|item| {
                tables.products.get(&item.product_id).map(|product| OrderLine {
                    quantity: item.quantity,
                    unit_price_cents: item.unit_price_cents,
                    product_id: product.id,
                    name: product.name.clone(),
                    image: product.image.clone(),
                })
            })
            .collect())
    }
}
