//! Inbound marketdata feed: `cusip,b1,b2,b3,b4,b5,o1,o2,o3,o4,o5` (§6).
//!
//! Bid levels arrive tightest-last; offer levels arrive tightest-first.
//! Both are normalized into best-first stacks. Quantity at level `L`
//! (1-indexed from best) is `L · 1,000,000` on both sides.

use backoffice_fabric::error::BackOfficeError;
use backoffice_instruments::{codec, OrderSide};
use backoffice_marketdata::{Order, OrderBook};
use rust_decimal::Decimal;

const FEED: &str = "marketdata";
const LEVEL_SIZE: i64 = 1_000_000;

fn malformed(line: &str) -> BackOfficeError {
    BackOfficeError::MalformedRecord {
        feed: FEED,
        record: line.to_string(),
    }
}

fn level_orders(prices: &[&str], side: OrderSide, line: &str) -> Result<Vec<Order>, BackOfficeError> {
    prices
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let price = codec::decode(text)?;
            let quantity = Decimal::from((i as i64 + 1) * LEVEL_SIZE);
            Ok(Order::new(price, quantity, side))
        })
        .collect()
}

pub fn parse(line: &str) -> Result<OrderBook, BackOfficeError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 11 {
        return Err(malformed(line));
    }

    let cusip = fields[0];
    let mut bids_source = fields[1..6].to_vec();
    let offers_source = fields[6..11].to_vec();
    bids_source.reverse(); // tightest-last on the wire -> best-first in memory

    let bids = level_orders(&bids_source, OrderSide::Bid, line)?;
    let offers = level_orders(&offers_source, OrderSide::Offer, line)?;

    Ok(OrderBook::new(cusip, bids, offers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_spec_example_s3() {
        let line = "91282CAX9,99-300,99-305,99-308,99-310,99-311,99-312,99-313,99-315,99-318,99-320";
        let book = parse(line).unwrap();

        assert_eq!(book.best_bid().unwrap().price, dec!(99.97265625)); // 99-311
        assert_eq!(book.best_bid().unwrap().quantity, dec!(1_000_000));
        assert_eq!(book.best_offer().unwrap().price, dec!(99.9765625)); // 99-312
        assert_eq!(book.best_offer().unwrap().quantity, dec!(1_000_000));
        assert_eq!(book.bids[4].quantity, dec!(5_000_000));
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(parse("91282CAX9,100-000").is_err());
    }
}
