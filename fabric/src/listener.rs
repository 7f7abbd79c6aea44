//! `Listener<V>`: a consumer of another service's notifications.
//!
//! Listeners bridge one service's output to another service's input,
//! forming the DAG described in §2. Only [`Listener::on_add`] is used by
//! the core graph; `on_remove`/`on_update` default to no-ops and exist only
//! for completeness (the pipeline never removes or updates an already
//! emitted entity).
//!
//! A listener holds a non-owning reference to the downstream service it
//! feeds — in practice a boxed closure capturing a `Rc<RefCell<..>>` or
//! `Arc<Mutex<..>>` handle, never the service itself. This is what keeps
//! the Execution→TradeBooking→Position dataflow cycle from being an
//! ownership cycle (§9).

pub trait Listener<V> {
    fn on_add(&mut self, value: &V);

    fn on_remove(&mut self, _value: &V) {}

    fn on_update(&mut self, _old: &V, _new: &V) {}
}

/// Adapts any `FnMut(&V)` into a [`Listener`], for the common case of a
/// bridging listener that just transforms and forwards.
pub struct FnListener<F>(pub F);

impl<V, F> Listener<V> for FnListener<F>
where
    F: FnMut(&V),
{
    fn on_add(&mut self, value: &V) {
        (self.0)(value)
    }
}
