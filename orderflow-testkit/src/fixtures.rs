//! Order fixtures.
//!
//! Every field an order needs gets an arbitrary but valid value unless the
//! test pins it. Item identifiers and order ids are unique per build.

use orderflow_core::Order;
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

const FIRST_NAMES: &[&str] = &["Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Heidi"];
const LAST_NAMES: &[&str] = &["Smith", "Jones", "Garcia", "Miller", "Okafor", "Tanaka", "Novak"];
const PAYMENT_METHODS: &[&str] = &["SuperCard", "Visa", "MasterCard", "Amex"];

static ITEM_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Issue a fresh item identifier. Never repeats within a process.
pub fn unique_item_id() -> String {
    let seq = ITEM_SEQUENCE.fetch_add(1, Ordering::SeqCst);
    let short_id = &Uuid::new_v4().simple().to_string()[..6];
    format!("ITEM-{:06}-{}", seq, short_id.to_uppercase())
}

/// An arbitrary valid order.
pub fn test_order() -> Order {
    OrderBuilder::new().build()
}

/// Builder for orders with sensible random defaults.
///
/// # Example
///
/// ```rust
/// use orderflow_testkit::OrderBuilder;
///
/// let order = OrderBuilder::new()
///     .customer_name("Alice")
///     .item_count(3)
///     .without_payment_method()
///     .build();
///
/// assert_eq!(order.items.len(), 3);
/// assert!(order.payment_method.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrderBuilder {
    customer_name: Option<String>,
    items: Option<Vec<String>>,
    item_count: Option<usize>,
    total_price: Option<Decimal>,
    payment_method: Option<String>,
}

impl OrderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    /// Use exactly these item identifiers.
    pub fn items(mut self, items: Vec<String>) -> Self {
        self.items = Some(items);
        self
    }

    /// Generate this many fresh item identifiers. Ignored when `items` is set.
    pub fn item_count(mut self, count: usize) -> Self {
        self.item_count = Some(count);
        self
    }

    pub fn total_price(mut self, total: Decimal) -> Self {
        self.total_price = Some(total);
        self
    }

    pub fn payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = Some(method.into());
        self
    }

    pub fn without_payment_method(self) -> Self {
        self.payment_method("")
    }

    pub fn build(self) -> Order {
        self.build_with(&mut rand::thread_rng())
    }

    /// Build using a caller-supplied RNG, e.g. a seeded `StdRng` for
    /// reproducible data.
    pub fn build_with<R: Rng + ?Sized>(self, rng: &mut R) -> Order {
        let customer_name = self.customer_name.unwrap_or_else(|| random_name(&mut *rng));

        let items = match (self.items, self.item_count) {
            (Some(items), _) => items,
            (None, Some(count)) => (0..count).map(|_| unique_item_id()).collect(),
            (None, None) => {
                let count = rng.gen_range(1..=5);
                (0..count).map(|_| unique_item_id()).collect()
            }
        };

        // 1.00 to 500.00 in cents
        let total_price = self
            .total_price
            .unwrap_or_else(|| Decimal::new(rng.gen_range(100..=50_000), 2));

        let payment_method = self.payment_method.unwrap_or_else(|| {
            PAYMENT_METHODS
                .choose(&mut *rng)
                .copied()
                .unwrap_or("SuperCard")
                .to_string()
        });

        Order::new(customer_name, items, total_price, payment_method)
    }

    /// Build `count` orders sharing this builder's overrides.
    pub fn build_many(&self, count: usize) -> Vec<Order> {
        let mut rng = rand::thread_rng();
        (0..count).map(|_| self.clone().build_with(&mut rng)).collect()
    }
}

fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES.choose(&mut *rng).copied().unwrap_or("Alice");
    let last = LAST_NAMES.choose(&mut *rng).copied().unwrap_or("Smith");
    format!("{} {}", first, last)
}
