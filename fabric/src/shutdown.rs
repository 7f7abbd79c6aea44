//! Graceful shutdown of connectors.
//!
//! Per §5, cancellation is end-of-stream driven: every inbound feed reads an
//! `EOF` sentinel, and the process terminates once all four feeds have
//! reached it. Outbound connectors mirror this by sending their own `EOF`
//! on teardown.

/// A component that releases a resource deterministically on shutdown.
///
/// Every outbound [`crate::connector::Connector`] implements this to emit
/// its `EOF` sentinel exactly once, even if `shutdown` is called more than
/// once (idempotent).
pub trait SyncShutdown {
    type Result;

    fn shutdown(&mut self) -> Self::Result;
}

/// Marker signaling that an inbound feed has reached its `EOF` sentinel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EndOfStream;
