//! The `Service<K, V>` abstraction: a keyed store of entities that notifies
//! registered listeners on every mutation.
//!
//! `Notify` is synchronous — a call to [`Service::on_message`] runs every
//! listener's [`crate::listener::Listener::on_add`] to completion, in
//! registration order, before returning. There is no suspension point
//! inside that call, which is what makes the whole downstream DAG
//! deterministic (§4.1).

use crate::{collection::FnvIndexMap, error::BackOfficeError, listener::Listener};
use std::hash::Hash;

/// A keyed store of entities of value type `V`, keyed by `K`.
///
/// Implementors own their cache exclusively; listeners and connectors only
/// ever hold a non-owning reference to a `Service`.
pub trait Service<K, V> {
    /// Ingests a value, updating the cache and notifying listeners.
    fn on_message(&mut self, value: V);

    /// Registers a listener to be invoked on every future [`Service::notify`].
    fn add_listener(&mut self, listener: Box<dyn Listener<V>>);

    /// Invokes every listener's `on_add` in registration order.
    fn notify(&mut self, value: &V);

    /// Returns the cached value for `key`, or `MissingCacheEntry` if absent.
    fn get_data(&self, key: &K) -> Result<&V, BackOfficeError>;
}

/// A minimal [`Service`] that only caches and fans out — no transform.
///
/// Used directly by `StreamingService` and `ExecutionService`, and as the
/// base that domain services like `PricingService` wrap with a transform
/// on ingest.
pub struct BaseService<K, V> {
    cache: FnvIndexMap<K, V>,
    listeners: Vec<Box<dyn Listener<V>>>,
}

impl<K, V> Default for BaseService<K, V> {
    fn default() -> Self {
        Self {
            cache: FnvIndexMap::default(),
            listeners: Vec::new(),
        }
    }
}

impl<K, V> BaseService<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cache(&self) -> &FnvIndexMap<K, V> {
        &self.cache
    }
}

impl<K, V> Service<K, V> for BaseService<K, V>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
    V: Clone + Keyed<K>,
{
    fn on_message(&mut self, value: V) {
        let key = value.key();
        self.cache.insert(key, value.clone());
        self.notify(&value);
    }

    fn add_listener(&mut self, listener: Box<dyn Listener<V>>) {
        self.listeners.push(listener);
    }

    fn notify(&mut self, value: &V) {
        for listener in &mut self.listeners {
            listener.on_add(value);
        }
    }

    fn get_data(&self, key: &K) -> Result<&V, BackOfficeError> {
        self.cache
            .get(key)
            .ok_or_else(|| BackOfficeError::MissingCacheEntry(format!("{key:?}")))
    }
}

/// Extracts the cache key from an entity, so `BaseService` can be generic
/// over any keyed value type without a separate key-extraction closure.
pub trait Keyed<K> {
    fn key(&self) -> K;
}
