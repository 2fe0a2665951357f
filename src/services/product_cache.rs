//! Read-through cache for product listings.
//!
//! Entries are keyed by the category filter and expire after a fixed TTL. There
//! is no invalidation hook: the service never writes products, so an external
//! write becomes visible at most one TTL later. Two concurrent misses for the
//! same key may both fetch and both store.

use crate::data::models::product::Product;
use crate::utils::clock::Clock;
use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

pub const DEFAULT_TTL_SECS: i64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    All,
    Category(String),
}

impl CacheKey {
    pub fn for_filter(category: Option<&str>) -> Self {
        match category {
            Some(name) => CacheKey::Category(name.to_string()),
            None => CacheKey::All,
        }
    }
}

struct CachedProducts {
    fetched_at: DateTime<Utc>,
    products: Vec<Product>,
}

pub struct ProductCache {
    ttl: TimeDelta,
    clock: Arc<dyn Clock>,
    entries: RwLock<HashMap<CacheKey, CachedProducts>>,
}

impl ProductCache {
    pub fn new(ttl: TimeDelta, clock: Arc<dyn Clock>) -> Self {
        ProductCache {
            ttl,
            clock,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Returns the cached listing if it was stored less than one TTL ago.
    pub fn get(&self, key: &CacheKey) -> Option<Vec<Product>> {
        let now = self.clock.now();
        let entries = self.entries.read();
        entries
            .get(key)
            .filter(|entry| now - entry.fetched_at < self.ttl)
            .map(|entry| entry.products.clone())
    }

    pub fn put(&self, key: CacheKey, products: Vec<Product>) {
        let fetched_at = self.clock.now();
        self.entries.write().insert(
            key,
            CachedProducts {
                fetched_at,
                products,
            },
        );
    }
}
