//! Wires every domain service into the DAG of §2: four inbound entry points
//! feed Pricing, MarketData, TradeBooking, Inquiry; each derived feed ends
//! at a `HistoricalDataService` wrapping the matching outbound connector.
//!
//! Construction proceeds leaf-first: a terminal historical sink is built,
//! then the service that feeds it, which is registered as a listener on the
//! service upstream of it, and so on back to the four entry points. The one
//! cycle in the dataflow (Execution → TradeBooking → Position) is closed
//! with an `Rc<RefCell<TradeBookingService>>` rather than a second
//! ownership path, per §9: `TradeBookingService` is driven both directly
//! (inbound trades feed) and through `ExecutionBookingBridge`'s listener
//! edge, and a `Box<dyn Listener<Trade>>` cannot also be the handle `main`
//! drives, so the two callers share ownership instead.

use std::cell::RefCell;
use std::rc::Rc;

use backoffice_fabric::{BackOfficeError, FnListener, HistoricalDataService, Listener, OutboundConnector, Service};
use backoffice_inquiries::{Inquiry, InquiryService, LoopbackQuoteConnector};
use backoffice_instruments::BondCatalog;
use backoffice_marketdata::{
    AlgoExecutionService, ExecutionOrder, ExecutionService, MarketDataService, OrderBook,
};
use backoffice_pricing::{
    AlgoStreamingService, GuiService, GuiThrottleConfig, Price, PriceStream, PricingService,
    StreamingService,
};
use backoffice_risk::{Pv01, RiskService};
use backoffice_trading::{ExecutionBookingBridge, Position, PositionService, Trade, TradeBookingService};

/// The six outbound connectors the graph's terminal historical sinks write
/// through. Generic callers (tests) can plug in-memory `Vec<u8>` writers;
/// `main` plugs files.
pub struct OutboundConnectors {
    pub gui: Box<dyn OutboundConnector<Price>>,
    pub streaming: Box<dyn OutboundConnector<PriceStream>>,
    pub executions: Box<dyn OutboundConnector<ExecutionOrder>>,
    pub positions: Box<dyn OutboundConnector<Position>>,
    pub risk: Box<dyn OutboundConnector<Pv01>>,
    pub allinquiries: Box<dyn OutboundConnector<Inquiry>>,
}

type ShutdownFn = Box<dyn FnMut() -> Result<(), BackOfficeError>>;

/// The wired pipeline: the four entry points `main`'s driving loop pushes
/// records into, plus `shutdown` for the teardown sequence of §5.
pub struct Graph {
    pub pricing: PricingService,
    pub market_data: MarketDataService,
    trade_booking: Rc<RefCell<TradeBookingService>>,
    pub inquiry: InquiryService,
    shutdowns: Vec<ShutdownFn>,
}

impl Graph {
    pub fn ingest_trade(&mut self, trade: Trade) {
        self.trade_booking.borrow_mut().book_trade(trade);
    }

    pub fn ingest_market_data(&mut self, book: OrderBook) {
        self.market_data.on_message(book);
    }

    pub fn ingest_price(&mut self, price: Price) {
        self.pricing.on_message(price);
    }

    pub fn ingest_inquiry(&mut self, inquiry: Inquiry) {
        self.inquiry.on_message(inquiry);
    }

    /// Releases every terminal outbound channel, in construction order
    /// (§5: "outbound connectors signal end-of-stream to their sinks on
    /// teardown").
    pub fn shutdown(&mut self) -> Result<(), BackOfficeError> {
        for close in &mut self.shutdowns {
            close()?;
        }
        Ok(())
    }
}

/// Builds a `HistoricalDataService<T>` around `connector`, returning a
/// listener adapter that forwards to it (so the service it feeds never
/// needs to know about the `Rc`) and a shutdown closure that tears the
/// connector down independently of however many listener edges hold a
/// clone of the `Rc`.
fn historical_sink<T: 'static>(
    connector: Box<dyn OutboundConnector<T>>,
) -> (Box<dyn Listener<T>>, ShutdownFn) {
    let historical = Rc::new(RefCell::new(HistoricalDataService::new(connector)));
    let listener_handle = historical.clone();
    let listener: Box<dyn Listener<T>> = Box::new(FnListener(move |value: &T| {
        listener_handle.borrow_mut().on_add(value);
    }));
    let shutdown: ShutdownFn = Box::new(move || historical.borrow_mut().shutdown());
    (listener, shutdown)
}

pub fn build_graph(
    catalog: &'static BondCatalog,
    gui_config: GuiThrottleConfig,
    outbound: OutboundConnectors,
) -> Graph {
    let mut shutdowns = Vec::new();

    // Pricing -> GUI & AlgoStreaming -> Streaming -> historical.
    let (gui_listener, gui_shutdown) = historical_sink(outbound.gui);
    shutdowns.push(gui_shutdown);
    let mut gui_service = GuiService::new(gui_config, backoffice_integration::formats::clock::now_ms);
    gui_service.add_listener(gui_listener);

    let (streaming_listener, streaming_shutdown) = historical_sink(outbound.streaming);
    shutdowns.push(streaming_shutdown);
    let mut streaming_service = StreamingService::new();
    streaming_service.add_listener(streaming_listener);

    let mut algo_streaming = AlgoStreamingService::new();
    algo_streaming.add_listener(Box::new(streaming_service));

    let mut pricing = PricingService::new();
    pricing.add_listener(Box::new(gui_service));
    pricing.add_listener(Box::new(algo_streaming));

    // TradeBooking -> Position -> (historical, Risk -> historical).
    let (risk_listener, risk_shutdown) = historical_sink(outbound.risk);
    shutdowns.push(risk_shutdown);
    let mut risk_service = RiskService::new(catalog);
    risk_service.add_listener(risk_listener);

    let (position_listener, position_shutdown) = historical_sink(outbound.positions);
    shutdowns.push(position_shutdown);
    let mut position_service = PositionService::new(catalog);
    position_service.add_listener(position_listener);
    position_service.add_listener(Box::new(risk_service));

    let trade_booking = Rc::new(RefCell::new(TradeBookingService::new()));
    trade_booking.borrow_mut().add_listener(Box::new(position_service));

    // MarketData -> AlgoExecution -> Execution -> (historical, booking bridge).
    let mut bridge = ExecutionBookingBridge::new();
    {
        let trade_booking = trade_booking.clone();
        bridge.add_listener(Box::new(FnListener(move |trade: &Trade| {
            trade_booking.borrow_mut().book_trade(trade.clone());
        })));
    }

    let (executions_listener, executions_shutdown) = historical_sink(outbound.executions);
    shutdowns.push(executions_shutdown);
    let mut execution_service = ExecutionService::new();
    execution_service.add_listener(executions_listener);
    execution_service.add_listener(Box::new(bridge));

    let mut algo_execution = AlgoExecutionService::new();
    algo_execution.add_listener(Box::new(execution_service));

    let mut market_data = MarketDataService::new();
    market_data.add_listener(Box::new(algo_execution));

    // Inquiry loops through the quote connector, then historical.
    let (allinquiries_listener, allinquiries_shutdown) = historical_sink(outbound.allinquiries);
    shutdowns.push(allinquiries_shutdown);
    let mut inquiry = InquiryService::new(Box::new(LoopbackQuoteConnector));
    inquiry.add_listener(allinquiries_listener);

    Graph {
        pricing,
        market_data,
        trade_booking,
        inquiry,
        shutdowns,
    }
}
