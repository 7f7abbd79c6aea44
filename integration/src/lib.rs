#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    unused_crate_dependencies,
    unused_extern_crates,
    clippy::unused_self,
    missing_debug_implementations,
    rust_2018_idioms
)]

//! # Integration — the byte-level boundary (§6)
//!
//! [`line_protocol`] implements the shared newline-terminated
//! request-response transport; [`formats`] holds the per-feed record
//! parsers (prices, trades, marketdata, inquiries) and formatters
//! (positions, risk, executions, streaming, gui, allinquiries) that plug
//! into it.

pub mod formats;
pub mod line_protocol;

pub use line_protocol::{LineInboundConnector, LineOutboundConnector};
