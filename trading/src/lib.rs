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

//! # Trade booking and position tracking
//!
//! Implements §4.9–§4.10: [`trade::TradeBookingService`] books `Trade`
//! entities from the inbound connector and from
//! [`trade::ExecutionBookingBridge`], the listener that synthesizes trades
//! out of `ExecutionOrder`; [`position::PositionService`] derives signed
//! per-book `Position` from booked trades.

pub mod position;
pub mod trade;

pub use position::{Position, PositionService};
pub use trade::{Book, ExecutionBookingBridge, Trade, TradeBookingService};
