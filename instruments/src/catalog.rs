//! The static bond catalog (§6, §9): a process-wide resource initialized
//! once at startup. Modeled here as an immutable value passed explicitly by
//! handle (an `Arc<BondCatalog>` in the wiring crate) rather than ambient
//! global state, per the design note in §9.

use crate::bond::Bond;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use backoffice_fabric::{BackOfficeError, FnvIndexMap, Result};

/// The seven on-the-run tenors the catalog carries, each with a fixed
/// per-unit PV01 (§6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tenor {
    Y2,
    Y3,
    Y5,
    Y7,
    Y10,
    Y20,
    Y30,
}

impl Tenor {
    pub fn pv01_per_unit(self) -> Decimal {
        match self {
            Tenor::Y2 => dec!(0.02),
            Tenor::Y3 => dec!(0.03),
            Tenor::Y5 => dec!(0.05),
            Tenor::Y7 => dec!(0.07),
            Tenor::Y10 => dec!(0.10),
            Tenor::Y20 => dec!(0.20),
            Tenor::Y30 => dec!(0.30),
        }
    }

    /// The bucketed-sector name this tenor is grouped under for
    /// `RiskService::get_bucketed_risk`.
    pub fn sector(self) -> &'static str {
        match self {
            Tenor::Y2 => "2Y",
            Tenor::Y3 => "3Y",
            Tenor::Y5 => "5Y",
            Tenor::Y7 => "7Y",
            Tenor::Y10 => "10Y",
            Tenor::Y20 => "20Y",
            Tenor::Y30 => "30Y",
        }
    }
}

struct Entry {
    bond: Bond,
    tenor: Tenor,
}

/// Seven U.S. Treasury CUSIPs with fixed coupons, maturities, and PV01
/// values, keyed by CUSIP (§6).
#[derive(Debug)]
pub struct BondCatalog {
    entries: FnvIndexMap<String, Entry>,
}

impl Default for BondCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("bond", &self.bond)
            .field("tenor", &self.tenor)
            .finish()
    }
}

impl BondCatalog {
    pub fn new() -> Self {
        let seed: [(&str, &str, Tenor, Decimal, NaiveDate); 7] = [
            (
                "91282CAX9",
                "T 2Y",
                Tenor::Y2,
                dec!(4.25),
                NaiveDate::from_ymd_opt(2027, 7, 31).unwrap(),
            ),
            (
                "91282CBA8",
                "T 3Y",
                Tenor::Y3,
                dec!(4.125),
                NaiveDate::from_ymd_opt(2028, 7, 15).unwrap(),
            ),
            (
                "91282CBB6",
                "T 5Y",
                Tenor::Y5,
                dec!(4.0),
                NaiveDate::from_ymd_opt(2030, 7, 31).unwrap(),
            ),
            (
                "91282CBC4",
                "T 7Y",
                Tenor::Y7,
                dec!(4.0),
                NaiveDate::from_ymd_opt(2032, 7, 31).unwrap(),
            ),
            (
                "91282CBD2",
                "T 10Y",
                Tenor::Y10,
                dec!(3.875),
                NaiveDate::from_ymd_opt(2035, 7, 15).unwrap(),
            ),
            (
                "912810TW8",
                "T 20Y",
                Tenor::Y20,
                dec!(4.25),
                NaiveDate::from_ymd_opt(2045, 7, 15).unwrap(),
            ),
            (
                "912810TV0",
                "T 30Y",
                Tenor::Y30,
                dec!(4.375),
                NaiveDate::from_ymd_opt(2055, 7, 15).unwrap(),
            ),
        ];

        let entries = seed
            .into_iter()
            .map(|(cusip, ticker, tenor, coupon, maturity)| {
                (
                    cusip.to_string(),
                    Entry {
                        bond: Bond::new(cusip, ticker, coupon, maturity),
                        tenor,
                    },
                )
            })
            .collect();

        Self { entries }
    }

    pub fn get(&self, cusip: &str) -> Result<&Bond> {
        self.entries
            .get(cusip)
            .map(|e| &e.bond)
            .ok_or_else(|| BackOfficeError::UnknownProduct(cusip.to_string()))
    }

    pub fn pv01_per_unit(&self, cusip: &str) -> Result<Decimal> {
        self.entries
            .get(cusip)
            .map(|e| e.tenor.pv01_per_unit())
            .ok_or_else(|| BackOfficeError::UnknownProduct(cusip.to_string()))
    }

    pub fn sector(&self, cusip: &str) -> Result<&'static str> {
        self.entries
            .get(cusip)
            .map(|e| e.tenor.sector())
            .ok_or_else(|| BackOfficeError::UnknownProduct(cusip.to_string()))
    }

    pub fn cusips_in_sector<'a>(&'a self, sector: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(_, e)| e.tenor.sector() == sector)
            .map(|(cusip, _)| cusip.as_str())
    }

    pub fn all_cusips(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_seven_entries() {
        let catalog = BondCatalog::new();
        assert_eq!(catalog.all_cusips().count(), 7);
    }

    #[test]
    fn known_cusip_has_expected_pv01() {
        let catalog = BondCatalog::new();
        assert_eq!(catalog.pv01_per_unit("91282CAX9").unwrap(), dec!(0.02));
        assert_eq!(catalog.sector("91282CAX9").unwrap(), "2Y");
    }

    #[test]
    fn unknown_cusip_is_fatal() {
        let catalog = BondCatalog::new();
        assert!(matches!(
            catalog.get("NOTREAL01"),
            Err(BackOfficeError::UnknownProduct(_))
        ));
    }
}
