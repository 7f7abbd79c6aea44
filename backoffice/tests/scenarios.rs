//! End-to-end scenarios S1–S6 (§8), each wiring the full graph in memory
//! and driving it through [`backoffice::build_graph`] with in-memory sinks
//! instead of files.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use backoffice::{build_graph, OutboundConnectors};
use backoffice_fabric::OutboundConnector;
use backoffice_instruments::BondCatalog;
use backoffice_integration::{formats, LineOutboundConnector};
use backoffice_pricing::GuiThrottleConfig;

/// A `Vec<u8>` sink two owners can hold: the connector writes through one
/// clone, the test reads the other after the run.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

fn sink<V: 'static>(
    format: impl FnMut(&V) -> String + 'static,
) -> (Box<dyn OutboundConnector<V>>, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let connector = LineOutboundConnector::new(buffer.clone(), format);
    (Box::new(connector), buffer)
}

struct Sinks {
    gui: SharedBuffer,
    streaming: SharedBuffer,
    executions: SharedBuffer,
    positions: SharedBuffer,
    risk: SharedBuffer,
    allinquiries: SharedBuffer,
}

fn wire() -> (backoffice::Graph, Sinks) {
    let catalog: &'static BondCatalog = Box::leak(Box::new(BondCatalog::new()));

    let (gui, gui_buf) = sink(formats::gui::format);
    let (streaming, streaming_buf) = sink(formats::streaming::format);
    let (executions, executions_buf) = sink(formats::executions::format);
    let (positions, positions_buf) = sink(formats::positions::format);
    let (risk, risk_buf) = sink(formats::risk::format);
    let (allinquiries, allinquiries_buf) = sink(formats::allinquiries::format);

    let graph = build_graph(
        catalog,
        GuiThrottleConfig::default(),
        OutboundConnectors {
            gui,
            streaming,
            executions,
            positions,
            risk,
            allinquiries,
        },
    );

    (
        graph,
        Sinks {
            gui: gui_buf,
            streaming: streaming_buf,
            executions: executions_buf,
            positions: positions_buf,
            risk: risk_buf,
            allinquiries: allinquiries_buf,
        },
    )
}

#[test]
fn s1_single_trade_books_position_and_risk() {
    let (mut graph, sinks) = wire();

    let trade = formats::trades::parse("91282CAX9,T1,TRSY1,100-000,BUY,1000000").unwrap();
    graph.ingest_trade(trade);

    assert!(sinks.positions.contents().contains(",91282CAX9,1000000,0,0,1000000"));
    assert!(sinks.risk.contents().contains(",91282CAX9,20000.00"));

    graph.shutdown().unwrap();
}

#[test]
fn s2_buy_then_sell_nets_aggregate() {
    let (mut graph, sinks) = wire();

    graph.ingest_trade(formats::trades::parse("91282CAX9,T1,TRSY1,100-000,BUY,1000000").unwrap());
    graph.ingest_trade(formats::trades::parse("91282CAX9,T2,TRSY2,100-000,SELL,400000").unwrap());

    let positions = sinks.positions.contents();
    let last = positions.lines().last().unwrap();
    assert!(last.ends_with(",91282CAX9,1000000,-400000,0,600000"));
    assert!(sinks.risk.contents().lines().last().unwrap().ends_with(",91282CAX9,12000.00"));

    graph.shutdown().unwrap();
}

#[test]
fn s3_tight_spread_alternates_aggressing_side() {
    let (mut graph, sinks) = wire();

    let line = "91282CAX9,99-300,99-305,99-308,99-310,99-311,99-312,99-313,99-315,99-318,99-320";
    let book = formats::marketdata::parse(line).unwrap();
    graph.ingest_market_data(book.clone());
    graph.ingest_market_data(book);

    let lines: Vec<&str> = sinks.executions.contents().lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains(",MARKET,BUY,99.97265625,1000000,1000000"));
    assert!(lines[1].contains(",MARKET,SELL,99.9765625,1000000,1000000"));

    graph.shutdown().unwrap();
}

#[test]
fn s4_wide_spread_emits_no_execution() {
    let (mut graph, sinks) = wire();

    // best bid 99-300, best offer 99-310: spread 10/256 > 1/128.
    let line = "91282CAX9,99-280,99-285,99-288,99-290,99-300,99-310,99-313,99-315,99-318,99-320";
    let book = formats::marketdata::parse(line).unwrap();
    graph.ingest_market_data(book);

    assert!(sinks.executions.contents().is_empty());

    graph.shutdown().unwrap();
}

#[test]
fn s5_price_drives_gui_and_streaming() {
    let (mut graph, sinks) = wire();

    let price = formats::prices::parse("91282CAX9,100-000,2").unwrap();
    graph.ingest_price(price.clone());
    graph.ingest_price(price);

    let streaming_lines: Vec<&str> = sinks.streaming.contents().lines().collect();
    assert_eq!(streaming_lines.len(), 2);
    assert!(streaming_lines[0].ends_with(",91282CAX9,99-316,100-002"));

    assert!(!sinks.gui.contents().is_empty());

    graph.shutdown().unwrap();
}

#[test]
fn s6_inquiry_reaches_done() {
    let (mut graph, sinks) = wire();

    let inquiry = formats::inquiries::parse("Q1,91282CAX9,BUY").unwrap();
    graph.ingest_inquiry(inquiry);

    let lines: Vec<&str> = sinks.allinquiries.contents().lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(",91282CAX9,100-000,DONE"));

    graph.shutdown().unwrap();
}
