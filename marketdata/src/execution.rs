//! `ExecutionOrder<Bond>` (§3), the spread-gated `AlgoExecutionService`
//! (§4.7), and the pass-through `ExecutionService` (§4.8).

use crate::order::OrderBook;
use backoffice_fabric::Listener;
use backoffice_instruments::OrderSide;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Order type taxonomy carried on `ExecutionOrder`. Only `Market` is ever
/// produced by `AlgoExecutionService`; the others exist because downstream
/// consumers and the wire format need to represent them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderType {
    Fok,
    Ioc,
    Market,
    Limit,
    Stop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOrder {
    pub product_id: String,
    pub side: OrderSide,
    pub order_id: String,
    pub order_type: OrderType,
    pub price: Decimal,
    pub visible_quantity: Decimal,
    pub hidden_quantity: Decimal,
    pub parent_order_id: String,
    pub is_child: bool,
}

/// Spread gate of 1/128, the minimum tradable tick in this price notation.
const SPREAD_GATE: Decimal = dec!(0.0078125);

/// Crosses the spread against the opposite side's top-of-book whenever it is
/// at or inside the minimum tradable tick, alternating the aggressing side
/// on every incoming book (§4.7).
pub struct AlgoExecutionService {
    counter: u64,
    listeners: Vec<Box<dyn Listener<ExecutionOrder>>>,
}

impl Default for AlgoExecutionService {
    fn default() -> Self {
        Self {
            counter: 0,
            listeners: Vec::new(),
        }
    }
}

impl AlgoExecutionService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, listener: Box<dyn Listener<ExecutionOrder>>) {
        self.listeners.push(listener);
    }

    fn try_emit(&mut self, book: &OrderBook) -> Option<ExecutionOrder> {
        self.counter += 1;
        let side = if self.counter % 2 == 1 {
            OrderSide::Bid
        } else {
            OrderSide::Offer
        };

        let spread = book.spread()?;
        if spread > SPREAD_GATE {
            return None;
        }

        let best_bid = book.best_bid()?;
        let best_offer = book.best_offer()?;
        let (price, quantity) = match side {
            OrderSide::Bid => (best_bid.price, best_offer.quantity),
            OrderSide::Offer => (best_offer.price, best_bid.quantity),
        };

        let order_id = self.counter.to_string();
        Some(ExecutionOrder {
            product_id: book.product_id.clone(),
            side,
            order_id: order_id.clone(),
            order_type: OrderType::Market,
            price,
            visible_quantity: quantity,
            hidden_quantity: quantity,
            parent_order_id: order_id,
            is_child: false,
        })
    }
}

impl Listener<OrderBook> for AlgoExecutionService {
    fn on_add(&mut self, book: &OrderBook) {
        let Some(order) = self.try_emit(book) else {
            tracing::debug!(product_id = %book.product_id, "spread gate dropped book");
            return;
        };
        for listener in &mut self.listeners {
            listener.on_add(&order);
        }
    }
}

/// Pure fan-out node: forwards every `ExecutionOrder` to its listeners. The
/// market argument historically accepted by `ExecuteOrder` carries no
/// downstream meaning and is not represented here (§4.8).
#[derive(Default)]
pub struct ExecutionService {
    listeners: Vec<Box<dyn Listener<ExecutionOrder>>>,
}

impl ExecutionService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, listener: Box<dyn Listener<ExecutionOrder>>) {
        self.listeners.push(listener);
    }

    pub fn execute_order(&mut self, order: &ExecutionOrder) {
        for listener in &mut self.listeners {
            listener.on_add(order);
        }
    }
}

impl Listener<ExecutionOrder> for ExecutionService {
    fn on_add(&mut self, order: &ExecutionOrder) {
        self.execute_order(order);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Order;
    use std::{cell::RefCell, rc::Rc};

    fn book(bid: Decimal, offer: Decimal) -> OrderBook {
        OrderBook::new(
            "91282CAX9",
            vec![Order::new(bid, dec!(1_000_000), OrderSide::Bid)],
            vec![Order::new(offer, dec!(1_000_000), OrderSide::Offer)],
        )
    }

    #[test]
    fn spec_example_s3() {
        let mut algo = AlgoExecutionService::new();
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        algo.add_listener(Box::new(backoffice_fabric::FnListener(
            move |o: &ExecutionOrder| sink.borrow_mut().push(o.clone()),
        )));

        let b = book(dec!(99.97265625), dec!(99.9765625)); // 99-311 / 99-312, spread 1/256
        algo.on_add(&b);
        algo.on_add(&b);

        let received = received.borrow();
        assert_eq!(received.len(), 2);
        assert_eq!(received[0].side, OrderSide::Bid);
        assert_eq!(received[0].price, dec!(99.97265625));
        assert_eq!(received[0].visible_quantity, dec!(1_000_000));
        assert_eq!(received[1].side, OrderSide::Offer);
        assert_eq!(received[1].price, dec!(99.9765625));
    }

    #[test]
    fn spec_example_s4_wide_spread_drops() {
        let mut algo = AlgoExecutionService::new();
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        algo.add_listener(Box::new(backoffice_fabric::FnListener(
            move |o: &ExecutionOrder| sink.borrow_mut().push(o.clone()),
        )));

        // 99-300 / 99-310, spread = 10/256 > 1/128
        algo.on_add(&book(dec!(99.9375), dec!(99.9765625)));
        assert!(received.borrow().is_empty());
    }

    #[test]
    fn execution_service_forwards() {
        let mut exec = ExecutionService::new();
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        exec.add_listener(Box::new(backoffice_fabric::FnListener(
            move |o: &ExecutionOrder| sink.borrow_mut().push(o.clone()),
        )));

        let order = ExecutionOrder {
            product_id: "91282CAX9".into(),
            side: OrderSide::Bid,
            order_id: "1".into(),
            order_type: OrderType::Market,
            price: dec!(100),
            visible_quantity: dec!(1_000_000),
            hidden_quantity: dec!(1_000_000),
            parent_order_id: "1".into(),
            is_child: false,
        };
        exec.execute_order(&order);
        assert_eq!(received.borrow().len(), 1);
    }
}
