//! Inbound trades feed: `cusip,tradeId,book,price,side,quantity` (§6).

use backoffice_fabric::error::BackOfficeError;
use backoffice_instruments::codec;
use backoffice_trading::{Book, Trade};
use rust_decimal::Decimal;
use std::str::FromStr;

const FEED: &str = "trades";

fn malformed(line: &str) -> BackOfficeError {
    BackOfficeError::MalformedRecord {
        feed: FEED,
        record: line.to_string(),
    }
}

fn parse_book(text: &str, line: &str) -> Result<Book, BackOfficeError> {
    match text {
        "TRSY1" => Ok(Book::Trsy1),
        "TRSY2" => Ok(Book::Trsy2),
        "TRSY3" => Ok(Book::Trsy3),
        _ => Err(malformed(line)),
    }
}

fn parse_side(text: &str, line: &str) -> Result<backoffice_instruments::TradeSide, BackOfficeError> {
    match text {
        "BUY" => Ok(backoffice_instruments::TradeSide::Buy),
        "SELL" => Ok(backoffice_instruments::TradeSide::Sell),
        _ => Err(malformed(line)),
    }
}

pub fn parse(line: &str) -> Result<Trade, BackOfficeError> {
    let fields: Vec<&str> = line.split(',').collect();
    let [cusip, trade_id, book, price, side, quantity] = fields[..] else {
        return Err(malformed(line));
    };

    Ok(Trade {
        product_id: cusip.to_string(),
        trade_id: trade_id.to_string(),
        price: codec::decode(price)?,
        book: parse_book(book, line)?,
        quantity: Decimal::from_str(quantity).map_err(|_| malformed(line))?,
        side: parse_side(side, line)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_spec_example_s1() {
        let trade = parse("91282CAX9,T1,TRSY1,100-000,BUY,1000000").unwrap();
        assert_eq!(trade.trade_id, "T1");
        assert_eq!(trade.price, dec!(100));
        assert_eq!(trade.quantity, dec!(1000000));
        assert_eq!(trade.book, Book::Trsy1);
    }

    #[test]
    fn rejects_unknown_book() {
        assert!(parse("91282CAX9,T1,TRSY9,100-000,BUY,1000000").is_err());
    }
}
