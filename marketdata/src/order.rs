//! `Order`, `OrderBook<Bond>` (§3) and the `MarketDataService` that caches
//! the book per product (§4.6).

use backoffice_fabric::{error::BackOfficeError, FnvIndexMap, Keyed, Listener, Service};
use backoffice_instruments::OrderSide;
use rust_decimal::Decimal;

/// A single resting order: price, quantity, and side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub price: Decimal,
    pub quantity: Decimal,
    pub side: OrderSide,
}

impl Order {
    pub fn new(price: Decimal, quantity: Decimal, side: OrderSide) -> Self {
        Self {
            price,
            quantity,
            side,
        }
    }
}

/// Top-of-book and beyond: ordered bid and offer stacks, index 0 is best on
/// each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBook {
    pub product_id: String,
    pub bids: Vec<Order>,
    pub offers: Vec<Order>,
}

impl OrderBook {
    pub fn new(product_id: impl Into<String>, bids: Vec<Order>, offers: Vec<Order>) -> Self {
        Self {
            product_id: product_id.into(),
            bids,
            offers,
        }
    }

    pub fn best_bid(&self) -> Option<&Order> {
        self.bids.first()
    }

    pub fn best_offer(&self) -> Option<&Order> {
        self.offers.first()
    }

    /// best-offer.price − best-bid.price. Only meaningful when both sides
    /// are non-empty; callers that rely on the invariant best-offer ≥
    /// best-bid are expected to have validated the book at ingest.
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_offer()?.price - self.best_bid()?.price)
    }
}

impl Keyed<String> for OrderBook {
    fn key(&self) -> String {
        self.product_id.clone()
    }
}

/// Caches the most recently ingested book per product and fans it out to
/// listeners, `AlgoExecutionService` among them. `OnMessage` overwrites the
/// cache unconditionally (§4.6) — there is no validation here beyond what
/// the book constructor already guarantees.
#[derive(Default)]
pub struct MarketDataService {
    cache: FnvIndexMap<String, OrderBook>,
    listeners: Vec<Box<dyn Listener<OrderBook>>>,
}

impl MarketDataService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the best bid and best offer for a product (index 0 of each
    /// stack).
    pub fn get_best_bid_offer(
        &self,
        product_id: &str,
    ) -> Result<(Option<&Order>, Option<&Order>), BackOfficeError> {
        let book = self
            .cache
            .get(product_id)
            .ok_or_else(|| BackOfficeError::MissingCacheEntry(product_id.to_string()))?;
        Ok((book.best_bid(), book.best_offer()))
    }
}

impl Service<String, OrderBook> for MarketDataService {
    fn on_message(&mut self, value: OrderBook) {
        self.cache.insert(value.product_id.clone(), value.clone());
        self.notify(&value);
    }

    fn add_listener(&mut self, listener: Box<dyn Listener<OrderBook>>) {
        self.listeners.push(listener);
    }

    fn notify(&mut self, value: &OrderBook) {
        for listener in &mut self.listeners {
            listener.on_add(value);
        }
    }

    fn get_data(&self, key: &String) -> Result<&OrderBook, BackOfficeError> {
        self.cache
            .get(key)
            .ok_or_else(|| BackOfficeError::MissingCacheEntry(key.clone()))
    }
}
