//! Inbound inquiries feed: `inquiryId,cusip,side` (§6). Quantity and price
//! default to zero on entry.

use backoffice_fabric::error::BackOfficeError;
use backoffice_inquiries::Inquiry;
use backoffice_instruments::TradeSide;

const FEED: &str = "inquiries";

fn malformed(line: &str) -> BackOfficeError {
    BackOfficeError::MalformedRecord {
        feed: FEED,
        record: line.to_string(),
    }
}

pub fn parse(line: &str) -> Result<Inquiry, BackOfficeError> {
    let fields: Vec<&str> = line.split(',').collect();
    let [inquiry_id, cusip, side] = fields[..] else {
        return Err(malformed(line));
    };

    let side = match side {
        "BUY" => TradeSide::Buy,
        "SELL" => TradeSide::Sell,
        _ => return Err(malformed(line)),
    };

    Ok(Inquiry::new(inquiry_id, cusip, side))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_spec_example_s6() {
        let inquiry = parse("Q1,91282CAX9,BUY").unwrap();
        assert_eq!(inquiry.inquiry_id, "Q1");
        assert_eq!(inquiry.side, TradeSide::Buy);
    }

    #[test]
    fn rejects_unknown_side() {
        assert!(parse("Q1,91282CAX9,HOLD").is_err());
    }
}
