//! `Position<Bond>` (§3) and the `PositionService` that maintains it from
//! booked trades (§4.10).

use crate::trade::{Book, Trade};
use backoffice_fabric::{error::BackOfficeError, FnvIndexMap, Keyed, Listener};
use backoffice_instruments::{BondCatalog, TradeSide};
use rust_decimal::Decimal;

/// Per-book signed quantities for one product, plus the derived aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub product_id: String,
    pub books: FnvIndexMap<Book, Decimal>,
}

impl Position {
    pub fn empty(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            books: FnvIndexMap::default(),
        }
    }

    /// Applies a signed delta to the named book: `+quantity` for BUY,
    /// `-quantity` for SELL. Missing book entries default to 0 before the
    /// addition (§4.10).
    pub fn add_position(&mut self, book: Book, quantity: Decimal, side: TradeSide) {
        let delta = quantity * Decimal::from(side.signum());
        *self.books.entry(book).or_insert(Decimal::ZERO) += delta;
    }

    pub fn get_aggregate_position(&self) -> Decimal {
        self.books.values().sum()
    }
}

impl Keyed<String> for Position {
    fn key(&self) -> String {
        self.product_id.clone()
    }
}

/// Registered as a [`Listener<Trade>`] on `TradeBookingService`. On
/// construction, pre-populates the cache with an empty `Position` for
/// every CUSIP in the catalog so every booked trade always finds its
/// position (§4.10).
#[derive(Default)]
pub struct PositionService {
    cache: FnvIndexMap<String, Position>,
    listeners: Vec<Box<dyn Listener<Position>>>,
}

impl PositionService {
    pub fn new(catalog: &BondCatalog) -> Self {
        let cache = catalog
            .all_cusips()
            .map(|cusip| (cusip.to_string(), Position::empty(cusip)))
            .collect();
        Self {
            cache,
            listeners: Vec::new(),
        }
    }

    pub fn add_listener(&mut self, listener: Box<dyn Listener<Position>>) {
        self.listeners.push(listener);
    }

    pub fn get_data(&self, key: &String) -> Result<&Position, BackOfficeError> {
        self.cache
            .get(key)
            .ok_or_else(|| BackOfficeError::MissingCacheEntry(key.clone()))
    }
}

impl Listener<Trade> for PositionService {
    fn on_add(&mut self, trade: &Trade) {
        let position = match self.cache.get_mut(&trade.product_id) {
            Some(position) => position,
            None => {
                tracing::error!(product_id = %trade.product_id, "trade booked for unknown product");
                return;
            }
        };
        position.add_position(trade.book, trade.quantity, trade.side);
        let snapshot = position.clone();
        for listener in &mut self.listeners {
            listener.on_add(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn pre_populated_with_catalog_cusips() {
        let catalog = BondCatalog::new();
        let service = PositionService::new(&catalog);
        assert_eq!(
            service.get_data(&"91282CAX9".to_string()).unwrap().get_aggregate_position(),
            Decimal::ZERO
        );
    }

    #[test]
    fn buy_then_sell_nets_to_expected_aggregate() {
        let catalog = BondCatalog::new();
        let mut service = PositionService::new(&catalog);
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        service.add_listener(Box::new(backoffice_fabric::FnListener(
            move |p: &Position| sink.borrow_mut().push(p.clone()),
        )));

        service.on_add(&Trade {
            product_id: "91282CAX9".into(),
            trade_id: "t1".into(),
            price: dec!(100),
            book: Book::Trsy2,
            quantity: dec!(1_000_000),
            side: TradeSide::Buy,
        });
        service.on_add(&Trade {
            product_id: "91282CAX9".into(),
            trade_id: "t2".into(),
            price: dec!(100),
            book: Book::Trsy3,
            quantity: dec!(400_000),
            side: TradeSide::Sell,
        });

        assert_eq!(received.borrow().len(), 2);
        let position = service.get_data(&"91282CAX9".to_string()).unwrap();
        assert_eq!(position.get_aggregate_position(), dec!(600_000));
    }
}
