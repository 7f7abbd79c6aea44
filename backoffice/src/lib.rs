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

//! # Back office — wires the domain crates into the pipeline of §2
//!
//! [`config`] loads [`config::BackOfficeConfig`]; [`builder`] constructs the
//! [`builder::Graph`] from it. `main.rs` is a thin CLI shell over this
//! library so integration tests can build and drive the same graph
//! in-process, against in-memory sinks, without a subprocess.

pub mod builder;
pub mod config;

pub use builder::{build_graph, Graph, OutboundConnectors};
pub use config::BackOfficeConfig;
