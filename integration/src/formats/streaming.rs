//! Outbound streaming feed: `ts,cusip,bidPrice,offerPrice` in fractional
//! notation (§6).

use super::clock::now_ms;
use backoffice_instruments::codec;
use backoffice_pricing::PriceStream;

pub fn format(stream: &PriceStream) -> String {
    format!(
        "{},{},{},{}",
        now_ms(),
        stream.product_id,
        codec::encode(stream.bid.price),
        codec::encode(stream.offer.price),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_instruments::OrderSide;
    use backoffice_pricing::PriceStreamOrder;
    use rust_decimal_macros::dec;

    #[test]
    fn spec_example_s5() {
        let stream = PriceStream {
            product_id: "91282CAX9".to_string(),
            bid: PriceStreamOrder {
                price: dec!(99.9921875),
                visible_quantity: dec!(2_000_000),
                hidden_quantity: dec!(4_000_000),
                side: OrderSide::Bid,
            },
            offer: PriceStreamOrder {
                price: dec!(100.0078125),
                visible_quantity: dec!(2_000_000),
                hidden_quantity: dec!(4_000_000),
                side: OrderSide::Offer,
            },
        };
        let line = format(&stream);
        assert!(line.contains("99-316"));
        assert!(line.contains("100-002"));
    }
}
