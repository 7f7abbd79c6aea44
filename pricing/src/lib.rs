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

//! # Pricing — price ingest, algorithmic streaming, and the GUI throttle
//!
//! Implements §4.2–§4.5: [`price::PricingService`] ingests `Price`,
//! [`stream::AlgoStreamingService`] derives a two-sided `PriceStream` from
//! it, [`stream::StreamingService`] fans that out, and [`gui::GuiService`]
//! rate-limits prices into a GUI sink.

pub mod gui;
pub mod price;
pub mod stream;

pub use gui::{GuiService, GuiThrottleConfig};
pub use price::{Price, PricingService};
pub use stream::{AlgoStreamingService, PriceStream, PriceStreamOrder, StreamingService};
