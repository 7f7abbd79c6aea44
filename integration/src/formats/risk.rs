//! Outbound risk feed: `ts,cusip,total_pv01` where `total_pv01 :=
//! quantity · per-unit-pv01` (§6).

use super::clock::now_ms;
use backoffice_risk::Pv01;

pub fn format(pv01: &Pv01) -> String {
    format!(
        "{},{},{}",
        now_ms(),
        pv01.product_id,
        pv01.quantity * pv01.pv01_per_unit,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn spec_example_s1() {
        let pv01 = Pv01 {
            product_id: "91282CAX9".to_string(),
            pv01_per_unit: dec!(0.02),
            quantity: dec!(1_000_000),
        };
        assert!(format(&pv01).ends_with(",91282CAX9,20000.00"));
    }
}
