//! `Inquiry<Bond>` (§3) and the `InquiryService` state machine, quoted
//! through a pseudo-loopback connector (§4.12).

use backoffice_fabric::{error::BackOfficeError, FnvIndexMap, Keyed, Listener};
use backoffice_instruments::TradeSide;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryState {
    Received,
    Quoted,
    Done,
    Rejected,
    CustomerRejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub inquiry_id: String,
    pub product_id: String,
    pub side: TradeSide,
    pub quantity: Decimal,
    pub price: Decimal,
    pub state: InquiryState,
}

impl Inquiry {
    pub fn new(inquiry_id: impl Into<String>, product_id: impl Into<String>, side: TradeSide) -> Self {
        Self {
            inquiry_id: inquiry_id.into(),
            product_id: product_id.into(),
            side,
            quantity: Decimal::ZERO,
            price: Decimal::ZERO,
            state: InquiryState::Received,
        }
    }
}

impl Keyed<String> for Inquiry {
    fn key(&self) -> String {
        self.inquiry_id.clone()
    }
}

/// A RECEIVED inquiry flips to QUOTED here; any other state passes through
/// unchanged, matching the no-op-on-DONE behavior required by §4.12.
pub trait QuoteConnector {
    fn request_quote(&mut self, inquiry: Inquiry) -> Inquiry;
}

#[derive(Debug, Default)]
pub struct LoopbackQuoteConnector;

impl QuoteConnector for LoopbackQuoteConnector {
    fn request_quote(&mut self, mut inquiry: Inquiry) -> Inquiry {
        if let InquiryState::Received = inquiry.state {
            inquiry.state = InquiryState::Quoted;
        }
        inquiry
    }
}

/// Drives each inquiry through RECEIVED → QUOTED → DONE, or to REJECTED on
/// any unexpected state. The quote connector's round trip is a same-thread
/// call, not a second dispatch through `Notify`: `on_message` resolves an
/// inquiry to its terminal state before returning, and notifies listeners
/// exactly once at that point — the service notifies on DONE directly
/// rather than through the connector (§9 open question).
pub struct InquiryService {
    quote: Box<dyn QuoteConnector>,
    cache: FnvIndexMap<String, Inquiry>,
    listeners: Vec<Box<dyn Listener<Inquiry>>>,
}

impl InquiryService {
    pub fn new(quote: Box<dyn QuoteConnector>) -> Self {
        Self {
            quote,
            cache: FnvIndexMap::default(),
            listeners: Vec::new(),
        }
    }

    pub fn add_listener(&mut self, listener: Box<dyn Listener<Inquiry>>) {
        self.listeners.push(listener);
    }

    pub fn get_data(&self, key: &String) -> Result<&Inquiry, BackOfficeError> {
        self.cache
            .get(key)
            .ok_or_else(|| BackOfficeError::MissingCacheEntry(key.clone()))
    }

    pub fn on_message(&mut self, mut inquiry: Inquiry) {
        match inquiry.state {
            InquiryState::Received => {
                inquiry.price = dec!(100);
                let quoted = self.quote.request_quote(inquiry);
                self.on_message(quoted);
            }
            InquiryState::Quoted => {
                inquiry.state = InquiryState::Done;
                self.cache.insert(inquiry.inquiry_id.clone(), inquiry.clone());
                self.notify(&inquiry);
            }
            InquiryState::Done => {
                self.cache.insert(inquiry.inquiry_id.clone(), inquiry.clone());
                self.notify(&inquiry);
            }
            InquiryState::Rejected | InquiryState::CustomerRejected => {
                inquiry.state = InquiryState::Rejected;
                self.cache.insert(inquiry.inquiry_id.clone(), inquiry.clone());
                self.notify(&inquiry);
            }
        }
    }

    fn notify(&mut self, inquiry: &Inquiry) {
        for listener in &mut self.listeners {
            listener.on_add(inquiry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn spec_example_s6_received_to_done() {
        let mut service = InquiryService::new(Box::new(LoopbackQuoteConnector));
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        service.add_listener(Box::new(backoffice_fabric::FnListener(
            move |i: &Inquiry| sink.borrow_mut().push(i.clone()),
        )));

        service.on_message(Inquiry::new("Q1", "91282CAX9", TradeSide::Buy));

        let received = received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].state, InquiryState::Done);
        assert_eq!(received[0].price, dec!(100));
    }

    #[test]
    fn unexpected_state_is_rejected() {
        let mut service = InquiryService::new(Box::new(LoopbackQuoteConnector));
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        service.add_listener(Box::new(backoffice_fabric::FnListener(
            move |i: &Inquiry| sink.borrow_mut().push(i.clone()),
        )));

        let mut stray = Inquiry::new("Q2", "91282CAX9", TradeSide::Sell);
        stray.state = InquiryState::CustomerRejected;
        service.on_message(stray);

        let received = received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].state, InquiryState::Rejected);
    }
}
