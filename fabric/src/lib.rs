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

//! # Fabric — the service/listener/connector dataflow primitives
//!
//! Generic, product-agnostic building blocks for a push-based, synchronous,
//! single-threaded event graph: [`service::Service`] (a keyed, notifying
//! store), [`listener::Listener`] (a non-owning bridge between two
//! services), and [`connector::InboundConnector`]/[`connector::OutboundConnector`]
//! (the byte-level boundary). Nothing here is aware of bonds, prices, or
//! trades — those live in the domain crates built on top.

pub mod collection;
pub mod connector;
pub mod error;
pub mod historical;
pub mod listener;
pub mod logging;
pub mod service;
pub mod shutdown;

pub use collection::{FnvIndexMap, FnvIndexSet};
pub use connector::{InboundConnector, OutboundConnector};
pub use error::{BackOfficeError, Result};
pub use historical::HistoricalDataService;
pub use listener::{FnListener, Listener};
pub use service::{BaseService, Keyed, Service};
pub use shutdown::{EndOfStream, SyncShutdown};
