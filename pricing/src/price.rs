//! `Price<Bond>` (§3) and the `PricingService` that ingests it (§4.2).

use backoffice_fabric::{error::BackOfficeError, FnvIndexMap, Keyed, Listener, Service};
use rust_decimal::Decimal;

/// A two-sided price quote for a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    pub product_id: String,
    pub mid: Decimal,
    pub bid_offer_spread: Decimal,
}

impl Price {
    pub fn new(product_id: impl Into<String>, mid: Decimal, bid_offer_spread: Decimal) -> Self {
        Self {
            product_id: product_id.into(),
            mid,
            bid_offer_spread,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.bid_offer_spread >= Decimal::ZERO
    }
}

impl Keyed<String> for Price {
    fn key(&self) -> String {
        self.product_id.clone()
    }
}

/// Caches the most recently ingested price per product and fans it out to
/// listeners (GUI throttle, algo streaming). The only validation performed
/// is the non-negative spread requirement of §4.2; a price that fails it is
/// dropped and logged rather than cached or notified, consistent with the
/// "malformed record" handling of §7.
#[derive(Default)]
pub struct PricingService {
    cache: FnvIndexMap<String, Price>,
    listeners: Vec<Box<dyn Listener<Price>>>,
}

impl PricingService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Service<String, Price> for PricingService {
    fn on_message(&mut self, value: Price) {
        if !value.is_valid() {
            tracing::warn!(product_id = %value.product_id, "dropping price with negative spread");
            return;
        }
        self.cache.insert(value.product_id.clone(), value.clone());
        self.notify(&value);
    }

    fn add_listener(&mut self, listener: Box<dyn Listener<Price>>) {
        self.listeners.push(listener);
    }

    fn notify(&mut self, value: &Price) {
        for listener in &mut self.listeners {
            listener.on_add(value);
        }
    }

    fn get_data(&self, key: &String) -> Result<&Price, BackOfficeError> {
        self.cache
            .get(key)
            .ok_or_else(|| BackOfficeError::MissingCacheEntry(key.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn negative_spread_is_dropped() {
        let mut service = PricingService::new();
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        service.add_listener(Box::new(backoffice_fabric::FnListener(move |p: &Price| {
            sink.borrow_mut().push(p.clone());
        })));

        service.on_message(Price::new("91282CAX9", dec!(100), dec!(-1)));
        assert!(received.borrow().is_empty());
        assert!(service.get_data(&"91282CAX9".to_string()).is_err());
    }

    #[test]
    fn valid_price_is_cached_and_notified() {
        let mut service = PricingService::new();
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        service.add_listener(Box::new(backoffice_fabric::FnListener(move |p: &Price| {
            sink.borrow_mut().push(p.clone());
        })));

        service.on_message(Price::new("91282CAX9", dec!(100), dec!(0.015625)));
        assert_eq!(received.borrow().len(), 1);
        assert_eq!(
            service.get_data(&"91282CAX9".to_string()).unwrap().mid,
            dec!(100)
        );
    }
}
