//! Outbound GUI feed: `ts,cusip,mid,spread` in decimal (§6).

use super::clock::now_ms;
use backoffice_pricing::Price;

pub fn format(price: &Price) -> String {
    format!("{},{},{},{}", now_ms(), price.product_id, price.mid, price.bid_offer_spread)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn renders_mid_and_spread() {
        let price = Price::new("91282CAX9", dec!(100), dec!(0.015625));
        let line = format(&price);
        assert!(line.contains(",91282CAX9,100,0.015625"));
    }
}
