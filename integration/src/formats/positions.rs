//! Outbound positions feed: `ts,cusip,q_TRSY1,q_TRSY2,q_TRSY3,aggregate` (§6).

use super::clock::now_ms;
use backoffice_trading::{Book, Position};
use rust_decimal::Decimal;

pub fn format(position: &Position) -> String {
    let q = |book: Book| position.books.get(&book).copied().unwrap_or(Decimal::ZERO);
    format!(
        "{},{},{},{},{},{}",
        now_ms(),
        position.product_id,
        q(Book::Trsy1),
        q(Book::Trsy2),
        q(Book::Trsy3),
        position.get_aggregate_position(),
    )
}
