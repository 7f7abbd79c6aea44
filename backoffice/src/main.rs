#![forbid(unsafe_code)]
#![warn(unused, rust_2018_idioms)]

//! CLI entry point: loads configuration, opens the four inbound feeds and
//! six outbound feeds as files, wires the DAG via [`backoffice::build_graph`],
//! and drives the feeds in the fixed startup order required by §5.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use clap::Parser;

use backoffice::{build_graph, BackOfficeConfig, OutboundConnectors};
use backoffice_fabric::{logging, InboundConnector};
use backoffice_instruments::BondCatalog;
use backoffice_integration::{formats, LineInboundConnector, LineOutboundConnector};
use backoffice_pricing::GuiThrottleConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Bond trading back-office dataflow pipeline", long_about = None)]
struct Cli {
    /// Optional TOML config file. Lower precedence than env vars and flags.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory containing trades.txt, marketdata.txt, prices.txt, inquiries.txt.
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Directory the six derived feeds are written to.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Emit structured JSON logs instead of human-readable ones.
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = BackOfficeConfig::load(cli.config.as_deref())?;
    if let Some(input_dir) = cli.input_dir {
        config.input_dir = input_dir;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }
    config.json_logs |= cli.json_logs;

    if config.json_logs {
        logging::init_json_logging();
    } else {
        logging::init_logging();
    }

    tracing::info!(
        input_dir = %config.input_dir.display(),
        output_dir = %config.output_dir.display(),
        "starting back office pipeline"
    );

    let catalog: &'static BondCatalog = Box::leak(Box::new(BondCatalog::new()));

    let outbound = OutboundConnectors {
        gui: Box::new(LineOutboundConnector::new(
            BufWriter::new(File::create(config.output_path("gui.txt"))?),
            formats::gui::format,
        )),
        streaming: Box::new(LineOutboundConnector::new(
            BufWriter::new(File::create(config.output_path("streaming.txt"))?),
            formats::streaming::format,
        )),
        executions: Box::new(LineOutboundConnector::new(
            BufWriter::new(File::create(config.output_path("executions.txt"))?),
            formats::executions::format,
        )),
        positions: Box::new(LineOutboundConnector::new(
            BufWriter::new(File::create(config.output_path("positions.txt"))?),
            formats::positions::format,
        )),
        risk: Box::new(LineOutboundConnector::new(
            BufWriter::new(File::create(config.output_path("risk.txt"))?),
            formats::risk::format,
        )),
        allinquiries: Box::new(LineOutboundConnector::new(
            BufWriter::new(File::create(config.output_path("allinquiries.txt"))?),
            formats::allinquiries::format,
        )),
    };

    let gui_config = GuiThrottleConfig {
        interval_ms: config.gui_interval_ms,
        max_samples: config.gui_max_samples,
    };
    let mut graph = build_graph(catalog, gui_config, outbound);

    // §5: the four inbound feeds are driven sequentially in a fixed
    // startup order — trades, market-data, prices, inquiries — never
    // interleaved.
    let mut trades_in = LineInboundConnector::new(
        BufReader::new(File::open(config.feed_path("trades.txt"))?),
        "trades",
        formats::trades::parse,
    );
    while let Some(trade) = trades_in.next_record()? {
        graph.ingest_trade(trade);
    }

    let mut marketdata_in = LineInboundConnector::new(
        BufReader::new(File::open(config.feed_path("marketdata.txt"))?),
        "marketdata",
        formats::marketdata::parse,
    );
    while let Some(book) = marketdata_in.next_record()? {
        graph.ingest_market_data(book);
    }

    let mut prices_in = LineInboundConnector::new(
        BufReader::new(File::open(config.feed_path("prices.txt"))?),
        "prices",
        formats::prices::parse,
    );
    while let Some(price) = prices_in.next_record()? {
        graph.ingest_price(price);
    }

    let mut inquiries_in = LineInboundConnector::new(
        BufReader::new(File::open(config.feed_path("inquiries.txt"))?),
        "inquiries",
        formats::inquiries::parse,
    );
    while let Some(inquiry) = inquiries_in.next_record()? {
        graph.ingest_inquiry(inquiry);
    }

    graph.shutdown()?;
    tracing::info!("back office pipeline finished");
    Ok(())
}
