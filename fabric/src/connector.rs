//! `Connector<V>`: the adapter at the fabric's boundary.
//!
//! Inbound connectors read raw records and call `on_message` on a service;
//! outbound connectors receive entities via `publish` and push bytes out.
//! Both are instantiations of the same idea — a one-directional bridge
//! between the byte world and the entity world — but are modeled as two
//! traits here because their call shape differs (a driving loop vs. a
//! single push per entity).

use crate::{error::BackOfficeError, shutdown::SyncShutdown};

/// An outbound connector: receives entities and writes them to a sink.
///
/// Implementations own one long-lived byte channel opened at construction
/// and released deterministically on [`SyncShutdown::shutdown`] (§5).
pub trait OutboundConnector<V>: SyncShutdown<Result = Result<(), BackOfficeError>> {
    fn publish(&mut self, value: &V) -> Result<(), BackOfficeError>;
}

/// An inbound connector: drives a source of raw records into a service.
///
/// `next_record` returns `Ok(None)` on the feed's `EOF` sentinel.
pub trait InboundConnector<V> {
    fn next_record(&mut self) -> Result<Option<V>, BackOfficeError>;
}
