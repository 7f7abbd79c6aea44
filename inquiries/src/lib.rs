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

//! # Inquiries — the customer inquiry state machine
//!
//! Implements §4.12: [`inquiry::InquiryService`] drives each `Inquiry`
//! through RECEIVED → QUOTED → DONE (or REJECTED on any unexpected state)
//! via a pseudo-loopback [`inquiry::QuoteConnector`].

pub mod inquiry;

pub use inquiry::{Inquiry, InquiryService, InquiryState, LoopbackQuoteConnector, QuoteConnector};
