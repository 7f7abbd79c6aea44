//! Standardized `tracing` initialisation for the back-office pipeline.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use backoffice_fabric::logging::init_logging;
//!
//! fn main() {
//!     init_logging();
//!     tracing::info!("back office pipeline starting");
//! }
//! ```
//!
//! Level is controlled via `RUST_LOG`, e.g. `RUST_LOG=backoffice=debug`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialises human-readable logging at INFO by default.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::filter::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer())
        .init()
}

/// Initialises JSON logging, for shipping to a log aggregator.
pub fn init_json_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::filter::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
        .init()
}
