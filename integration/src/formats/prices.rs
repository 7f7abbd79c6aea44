//! Inbound prices feed: `cusip,price,spread-digit` (§6).

use backoffice_fabric::error::BackOfficeError;
use backoffice_instruments::codec;
use backoffice_pricing::Price;
use rust_decimal::Decimal;

const FEED: &str = "prices";

pub fn parse(line: &str) -> Result<Price, BackOfficeError> {
    let fields: Vec<&str> = line.split(',').collect();
    let [cusip, price, spread_digit] = fields[..] else {
        return Err(BackOfficeError::MalformedRecord {
            feed: FEED,
            record: line.to_string(),
        });
    };

    let mid = codec::decode(price)?;
    let digit: i64 = spread_digit.parse().map_err(|_| BackOfficeError::MalformedRecord {
        feed: FEED,
        record: line.to_string(),
    })?;
    let spread = Decimal::from(digit) / Decimal::from(128);

    Ok(Price::new(cusip, mid, spread))
}
