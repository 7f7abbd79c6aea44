//! `PriceStreamOrder`/`PriceStream` (§3) and the `AlgoStreamingService` that
//! derives them from `Price` (§4.3), plus the pass-through `StreamingService`
//! (§4.4).

use crate::price::Price;
use backoffice_fabric::{BackOfficeError, FnvIndexMap, Keyed, Listener, Service};
use backoffice_instruments::OrderSide;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceStreamOrder {
    pub price: Decimal,
    pub visible_quantity: Decimal,
    pub hidden_quantity: Decimal,
    pub side: OrderSide,
}

impl PriceStreamOrder {
    fn new(price: Decimal, visible: Decimal, side: OrderSide) -> Self {
        Self {
            price,
            visible_quantity: visible,
            hidden_quantity: visible * dec!(2),
            side,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceStream {
    pub product_id: String,
    pub bid: PriceStreamOrder,
    pub offer: PriceStreamOrder,
}

impl Keyed<String> for PriceStream {
    fn key(&self) -> String {
        self.product_id.clone()
    }
}

/// Derives a two-sided `PriceStream` from every ingested `Price` by
/// alternating the visible size between 2,000,000 and 1,000,000 (§4.3).
///
/// Registered as a [`Listener<Price>`] on `PricingService`, this is the
/// bridging listener that forms the Pricing→AlgoStreaming edge of the DAG.
pub struct AlgoStreamingService {
    counter: u8,
    listeners: Vec<Box<dyn Listener<PriceStream>>>,
}

impl Default for AlgoStreamingService {
    fn default() -> Self {
        Self {
            counter: 0,
            listeners: Vec::new(),
        }
    }
}

impl AlgoStreamingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, listener: Box<dyn Listener<PriceStream>>) {
        self.listeners.push(listener);
    }

    fn visible_size(&self) -> Decimal {
        if self.counter == 0 {
            dec!(2_000_000)
        } else {
            dec!(1_000_000)
        }
    }

    fn emit(&mut self, price: &Price) -> PriceStream {
        let half_spread = price.bid_offer_spread / dec!(2);
        let visible = self.visible_size();
        let stream = PriceStream {
            product_id: price.product_id.clone(),
            bid: PriceStreamOrder::new(price.mid - half_spread, visible, OrderSide::Bid),
            offer: PriceStreamOrder::new(price.mid + half_spread, visible, OrderSide::Offer),
        };
        self.counter = 1 - self.counter;
        stream
    }
}

impl Listener<Price> for AlgoStreamingService {
    fn on_add(&mut self, price: &Price) {
        let stream = self.emit(price);
        for listener in &mut self.listeners {
            listener.on_add(&stream);
        }
    }
}

/// Pure fan-out node decoupling algo generation from historical persistence
/// (§4.4).
#[derive(Default)]
pub struct StreamingService {
    cache: FnvIndexMap<String, PriceStream>,
    listeners: Vec<Box<dyn Listener<PriceStream>>>,
}

impl StreamingService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Service<String, PriceStream> for StreamingService {
    fn on_message(&mut self, value: PriceStream) {
        self.cache.insert(value.product_id.clone(), value.clone());
        self.notify(&value);
    }

    fn add_listener(&mut self, listener: Box<dyn Listener<PriceStream>>) {
        self.listeners.push(listener);
    }

    fn notify(&mut self, value: &PriceStream) {
        for listener in &mut self.listeners {
            listener.on_add(value);
        }
    }

    fn get_data(&self, key: &String) -> Result<&PriceStream, BackOfficeError> {
        self.cache
            .get(key)
            .ok_or_else(|| BackOfficeError::MissingCacheEntry(key.clone()))
    }
}

impl Listener<PriceStream> for StreamingService {
    fn on_add(&mut self, value: &PriceStream) {
        self.on_message(value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn visible_size_alternates() {
        let mut algo = AlgoStreamingService::new();
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        algo.add_listener(Box::new(backoffice_fabric::FnListener(
            move |s: &PriceStream| sink.borrow_mut().push(s.clone()),
        )));

        let price = Price::new("91282CAX9", dec!(100), dec!(0.015625));
        algo.on_add(&price);
        algo.on_add(&price);

        let received = received.borrow();
        assert_eq!(received[0].bid.visible_quantity, dec!(2_000_000));
        assert_eq!(received[0].bid.hidden_quantity, dec!(4_000_000));
        assert_eq!(received[1].bid.visible_quantity, dec!(1_000_000));
        assert_eq!(received[1].bid.hidden_quantity, dec!(2_000_000));
    }

    #[test]
    fn spec_example_s5() {
        let mut algo = AlgoStreamingService::new();
        let price = Price::new("91282CAX9", dec!(100), dec!(0.015625));
        let first = algo.emit(&price);
        assert_eq!(first.bid.price, dec!(99.9921875));
        assert_eq!(first.offer.price, dec!(100.0078125));
    }
}
