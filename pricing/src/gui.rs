//! `GuiService`: rate-limits price updates into a GUI sink (§4.5).

use crate::price::Price;
use backoffice_fabric::Listener;

/// Throttle configuration: interval `T` (default 300 ms) and maximum
/// sample count `N` (default 100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuiThrottleConfig {
    pub interval_ms: u64,
    pub max_samples: u32,
}

impl Default for GuiThrottleConfig {
    fn default() -> Self {
        Self {
            interval_ms: 300,
            max_samples: 100,
        }
    }
}

/// Emits at most `max_samples` prices, no more often than every
/// `interval_ms`. Drops are silent and never retried (§4.5).
///
/// `last_emit_ms` is initialized to `0` rather than construction time, the
/// implementation choice the spec explicitly leaves open in §9: this
/// guarantees the first post-construction tick emits as long as the wall
/// clock is past `interval_ms` since the Unix epoch, which is always true
/// in practice, so the first tick always emits.
pub struct GuiService<Clock> {
    config: GuiThrottleConfig,
    last_emit_ms: u64,
    emitted: u32,
    clock: Clock,
    listeners: Vec<Box<dyn Listener<Price>>>,
}

impl<Clock> GuiService<Clock>
where
    Clock: FnMut() -> u64,
{
    pub fn new(config: GuiThrottleConfig, clock: Clock) -> Self {
        Self {
            config,
            last_emit_ms: 0,
            emitted: 0,
            clock,
            listeners: Vec::new(),
        }
    }

    pub fn add_listener(&mut self, listener: Box<dyn Listener<Price>>) {
        self.listeners.push(listener);
    }

    pub fn emitted_count(&self) -> u32 {
        self.emitted
    }

    fn on_price(&mut self, price: &Price) {
        if self.emitted >= self.config.max_samples {
            return;
        }
        let now = (self.clock)();
        if now.saturating_sub(self.last_emit_ms) < self.config.interval_ms {
            return;
        }
        self.last_emit_ms = now;
        self.emitted += 1;
        for listener in &mut self.listeners {
            listener.on_add(price);
        }
    }
}

impl<Clock> Listener<Price> for GuiService<Clock>
where
    Clock: FnMut() -> u64,
{
    fn on_add(&mut self, price: &Price) {
        self.on_price(price);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::{cell::RefCell, rc::Rc};

    fn counting_clock(ticks: Vec<u64>) -> impl FnMut() -> u64 {
        let mut ticks = ticks.into_iter();
        move || ticks.next().expect("ran out of clock ticks")
    }

    #[test]
    fn throttle_drops_rapid_ticks() {
        let received = Rc::new(RefCell::new(0u32));
        let sink = received.clone();
        let mut gui = GuiService::new(
            GuiThrottleConfig::default(),
            counting_clock(vec![1_000, 1_050, 1_100, 1_400]),
        );
        gui.add_listener(Box::new(backoffice_fabric::FnListener(move |_: &Price| {
            *sink.borrow_mut() += 1;
        })));

        let price = Price::new("91282CAX9", dec!(100), dec!(0));
        gui.on_add(&price); // t=1000, emits
        gui.on_add(&price); // t=1050, throttled
        gui.on_add(&price); // t=1100, throttled
        gui.on_add(&price); // t=1400, emits (>=300ms since 1000)

        assert_eq!(*received.borrow(), 2);
    }

    #[test]
    fn stops_after_max_samples() {
        let mut gui = GuiService::new(GuiThrottleConfig { interval_ms: 0, max_samples: 2 }, {
            let mut t = 0u64;
            move || {
                t += 1;
                t
            }
        });
        let price = Price::new("91282CAX9", dec!(100), dec!(0));
        for _ in 0..5 {
            gui.on_add(&price);
        }
        assert_eq!(gui.emitted_count(), 2);
    }
}
