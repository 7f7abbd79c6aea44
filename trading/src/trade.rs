//! `Trade<Bond>` (§3), `TradeBookingService` (§4.9), and the bridging
//! listener that synthesizes trades from `ExecutionOrder`.

use backoffice_fabric::{error::BackOfficeError, FnvIndexMap, Keyed, Listener, Service};
use backoffice_instruments::{OrderSide, TradeSide};
use backoffice_marketdata::ExecutionOrder;
use rust_decimal::Decimal;

/// Book into which a trade is recorded. The synthesis rule in §4.9 cycles
/// through these three starting at TRSY2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Book {
    Trsy1,
    Trsy2,
    Trsy3,
}

impl Book {
    fn from_cycle(k: u64) -> Self {
        match (1 + k % 3) % 3 {
            1 => Book::Trsy1,
            2 => Book::Trsy2,
            _ => Book::Trsy3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Book::Trsy1 => "TRSY1",
            Book::Trsy2 => "TRSY2",
            Book::Trsy3 => "TRSY3",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    pub product_id: String,
    pub trade_id: String,
    pub price: Decimal,
    pub book: Book,
    pub quantity: Decimal,
    pub side: TradeSide,
}

impl Keyed<String> for Trade {
    fn key(&self) -> String {
        self.trade_id.clone()
    }
}

/// Ingests `Trade` from the inbound trades connector and from the
/// execution→booking bridge below. Cache is keyed by trade id; `OnMessage`
/// overwrites and notifies unconditionally (§4.9).
#[derive(Default)]
pub struct TradeBookingService {
    cache: FnvIndexMap<String, Trade>,
    listeners: Vec<Box<dyn Listener<Trade>>>,
}

impl TradeBookingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn book_trade(&mut self, trade: Trade) {
        self.on_message(trade);
    }
}

impl Service<String, Trade> for TradeBookingService {
    fn on_message(&mut self, value: Trade) {
        self.cache.insert(value.trade_id.clone(), value.clone());
        self.notify(&value);
    }

    fn add_listener(&mut self, listener: Box<dyn Listener<Trade>>) {
        self.listeners.push(listener);
    }

    fn notify(&mut self, value: &Trade) {
        for listener in &mut self.listeners {
            listener.on_add(value);
        }
    }

    fn get_data(&self, key: &String) -> Result<&Trade, BackOfficeError> {
        self.cache
            .get(key)
            .ok_or_else(|| BackOfficeError::MissingCacheEntry(key.clone()))
    }
}

impl Listener<Trade> for TradeBookingService {
    fn on_add(&mut self, trade: &Trade) {
        self.book_trade(trade.clone());
    }
}

/// Registered as a [`Listener<ExecutionOrder>`] on `ExecutionService`: the
/// one listener edge that closes the cycle back into `TradeBookingService`
/// without creating an ownership cycle, since the synthesized trade id
/// (the execution's order id) never collides with an inbound trade id
/// (§3, §4.9).
pub struct ExecutionBookingBridge {
    counter: u64,
    listeners: Vec<Box<dyn Listener<Trade>>>,
}

impl Default for ExecutionBookingBridge {
    fn default() -> Self {
        Self {
            counter: 0,
            listeners: Vec::new(),
        }
    }
}

impl ExecutionBookingBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, listener: Box<dyn Listener<Trade>>) {
        self.listeners.push(listener);
    }

    fn synthesize(&mut self, execution: &ExecutionOrder) -> Trade {
        self.counter += 1;
        let side = match execution.side {
            OrderSide::Bid => TradeSide::Buy,
            OrderSide::Offer => TradeSide::Sell,
        };
        Trade {
            product_id: execution.product_id.clone(),
            trade_id: execution.order_id.clone(),
            price: execution.price,
            book: Book::from_cycle(self.counter),
            quantity: execution.visible_quantity,
            side,
        }
    }
}

impl Listener<ExecutionOrder> for ExecutionBookingBridge {
    fn on_add(&mut self, execution: &ExecutionOrder) {
        let trade = self.synthesize(execution);
        for listener in &mut self.listeners {
            listener.on_add(&trade);
        }
    }
}
