//! Central error taxonomy for the back-office dataflow fabric.
//!
//! Every subsystem (instrument catalog lookups, transport, inquiry state
//! machine) reports failures through [`BackOfficeError`] so that `main` has
//! one type to match on when deciding whether to abort the process.

use thiserror::Error;

/// Aggregated error type for the bond back-office pipeline.
///
/// Per the error handling design: unknown products and missing cache
/// entries are fatal (§7), malformed records are fatal for the offending
/// record, and transport failures are unrecoverable.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum BackOfficeError {
    /// A CUSIP was referenced that does not exist in the static catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(String),

    /// An inbound record could not be parsed according to its feed's format.
    #[error("malformed record on {feed} feed: {record:?}")]
    MalformedRecord { feed: &'static str, record: String },

    /// `Service::get_data` was called for a key with no cached value.
    ///
    /// Indicates a programming error: every service that depends on a
    /// pre-populated cache (e.g. `PositionService`) must seed it for every
    /// known CUSIP before any record is processed.
    #[error("missing cache entry for key {0}: this is a bug, not a transient failure")]
    MissingCacheEntry(String),

    /// The byte-level connection to a reader/writer process failed or
    /// closed unexpectedly.
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Convenience alias used throughout the fabric and domain crates.
pub type Result<T> = std::result::Result<T, BackOfficeError>;
