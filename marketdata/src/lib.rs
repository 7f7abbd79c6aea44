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

//! # Market data — top-of-book ingest and the algo execution decision
//!
//! Implements §4.6–§4.8: [`order::MarketDataService`] caches the latest
//! `OrderBook` per product, [`execution::AlgoExecutionService`] derives an
//! aggressing `ExecutionOrder` from it when the spread is inside the
//! minimum tradable tick, and [`execution::ExecutionService`] fans the
//! result out.

pub mod execution;
pub mod order;

pub use execution::{AlgoExecutionService, ExecutionOrder, ExecutionService, OrderType};
pub use order::{MarketDataService, Order, OrderBook};
