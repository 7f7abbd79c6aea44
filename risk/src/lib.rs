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

//! # Risk — PV01 derivation and sector bucketing
//!
//! Implements §4.11: [`pv01::RiskService`] derives `PV01` from `Position`
//! updates and answers `get_bucketed_risk` sector queries over the bond
//! catalog.

pub mod pv01;

pub use pv01::{BucketedSectorPv01, Pv01, RiskService};
