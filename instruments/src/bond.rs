//! The `Bond` product (§3): the only product type the shipped pipeline
//! instantiates, though every service is generic over a product type
//! (§9 — parametric polymorphism, no dynamic dispatch needed).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;

/// Identifies how a product's identifier should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    Cusip,
}

/// A U.S. Treasury bond. Immutable after catalog load (§3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bond {
    pub cusip: String,
    pub identifier_kind: IdentifierKind,
    pub ticker: String,
    pub coupon: Decimal,
    pub maturity: NaiveDate,
}

impl Bond {
    pub fn new(
        cusip: impl Into<String>,
        ticker: impl Into<String>,
        coupon: Decimal,
        maturity: NaiveDate,
    ) -> Self {
        Self {
            cusip: cusip.into(),
            identifier_kind: IdentifierKind::Cusip,
            ticker: ticker.into(),
            coupon,
            maturity,
        }
    }

    pub fn id(&self) -> &str {
        &self.cusip
    }
}

impl fmt::Display for Bond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.ticker, self.cusip)
    }
}
