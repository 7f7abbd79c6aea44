//! The Treasury fractional price codec (§6): `I-XYZ` = `I + XY/32 + Z/256`.
//!
//! `I` is whole dollars, `XY` is 32nds (`00`..`31`, with `+` in the Z
//! position meaning a half-32nd, i.e. `4/256`), and `Z` is 256ths (`0`..`7`).

use backoffice_fabric::{BackOfficeError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

/// Encodes a decimal price into `I-XYZ` fractional notation.
///
/// Floors into whole dollars `I`, then floors `32 * (price - I)` into the
/// two-digit 32nds `XY`, then floors `256 * (price - I - XY/32)` into the
/// 256ths digit `Z`.
pub fn encode(price: Decimal) -> String {
    let whole = price.trunc();
    let remainder_32 = (price - whole) * dec!(32);
    let xy = remainder_32.trunc();
    let remainder_256 = (price - whole - xy / dec!(32)) * dec!(256);
    let z = remainder_256.trunc();

    format!(
        "{}-{:02}{}",
        whole,
        xy.to_string().parse::<i64>().unwrap_or(0),
        z.to_string().parse::<i64>().unwrap_or(0)
    )
}

/// Decodes `I-XYZ` fractional notation into a decimal price.
///
/// A `Z` of `+` denotes a half-256th (`4/256`), matching the shipped
/// convention for the last position.
pub fn decode(text: &str) -> Result<Decimal> {
    let malformed = || BackOfficeError::MalformedRecord {
        feed: "price-fraction",
        record: text.to_string(),
    };

    let (whole_str, frac_str) = text.split_once('-').ok_or_else(malformed)?;
    if frac_str.len() != 3 {
        return Err(malformed());
    }

    let whole = Decimal::from_str(whole_str).map_err(|_| malformed())?;
    let xy: i64 = frac_str[0..2].parse().map_err(|_| malformed())?;
    let z: i64 = match &frac_str[2..3] {
        "+" => 4,
        digit => digit.parse().map_err(|_| malformed())?,
    };

    Ok(whole + Decimal::from(xy) / dec!(32) + Decimal::from(z) / dec!(256))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_par() {
        assert_eq!(decode("100-000").unwrap(), dec!(100));
    }

    #[test]
    fn decodes_spec_example() {
        // S3: best bid 99-311, best offer 99-312
        assert_eq!(decode("99-311").unwrap(), dec!(99) + dec!(31) / dec!(32) + dec!(1) / dec!(256));
    }

    #[test]
    fn round_trips_within_one_256th() {
        for raw in [dec!(100.0), dec!(99.96875), dec!(99.12890625), dec!(101.5)] {
            let encoded = encode(raw);
            let decoded = decode(&encoded).unwrap();
            assert!((decoded - raw).abs() <= dec!(1) / dec!(256));
        }
    }

    #[test]
    fn malformed_fraction_is_rejected() {
        assert!(decode("100").is_err());
        assert!(decode("100-00").is_err());
    }
}
