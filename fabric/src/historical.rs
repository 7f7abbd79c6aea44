//! `HistoricalDataService<T>`: the terminal fan-out every derived feed ends
//! at (§4.13).
//!
//! A monotonic counter produces string persistence keys; each received `T`
//! is forwarded to an [`OutboundConnector`]. The counter is never reset,
//! guaranteeing per-process uniqueness (testable property 9 in §8).

use crate::{connector::OutboundConnector, error::BackOfficeError, listener::Listener, shutdown::SyncShutdown};

pub struct HistoricalDataService<T> {
    connector: Box<dyn OutboundConnector<T>>,
    next_key: u64,
}

impl<T> HistoricalDataService<T> {
    pub fn new(connector: Box<dyn OutboundConnector<T>>) -> Self {
        Self {
            connector,
            next_key: 0,
        }
    }

    /// Persists `value`, returning the key it was stored under.
    pub fn persist(&mut self, value: &T) -> Result<u64, BackOfficeError> {
        let key = self.next_key;
        self.next_key += 1;
        self.connector.publish(value)?;
        Ok(key)
    }

    /// Releases the underlying outbound channel, emitting its `EOF`
    /// sentinel (§5 teardown).
    pub fn shutdown(&mut self) -> Result<(), BackOfficeError> {
        self.connector.shutdown()
    }
}

impl<T> Listener<T> for HistoricalDataService<T> {
    fn on_add(&mut self, value: &T) {
        // Transport failures are unrecoverable (§7): there is nothing a
        // downstream fan-out can do but surface and terminate, since the
        // `Listener` callback contract has no channel for propagating a
        // `Result` back through `Notify`.
        if let Err(err) = self.persist(value) {
            tracing::error!(error = %err, "historical transport failure, terminating");
            std::process::exit(1);
        }
    }
}
