//! Outbound allinquiries feed: `ts,cusip,price,state` with `state` ∈
//! {DONE,REJECTED} (§6). `InquiryService` notifies exactly once per
//! inquiry, at the terminal state, so this formatter is only ever called
//! with a `Done` or `Rejected` inquiry.

use super::clock::now_ms;
use backoffice_inquiries::{Inquiry, InquiryState};
use backoffice_instruments::codec;

pub fn format(inquiry: &Inquiry) -> String {
    let state = match inquiry.state {
        InquiryState::Done => "DONE",
        InquiryState::Rejected => "REJECTED",
        other => {
            tracing::warn!(?other, inquiry_id = %inquiry.inquiry_id, "allinquiries record for non-terminal state");
            "REJECTED"
        }
    };
    format!(
        "{},{},{},{}",
        now_ms(),
        inquiry.product_id,
        codec::encode(inquiry.price),
        state,
    )
}
