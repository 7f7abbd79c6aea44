//! The two side vocabularies used across the pipeline: order-book side
//! (`Bid`/`Offer`, used by quotes and executions) and trade side
//! (`Buy`/`Sell`, used by bookings and positions). §3 keeps these distinct
//! rather than collapsing them into one enum, since an `ExecutionOrder`'s
//! side and the `Trade` it produces are related but not identical labels.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrderSide {
    Bid,
    Offer,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Bid => write!(f, "BID"),
            OrderSide::Offer => write!(f, "OFFER"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TradeSide {
    Buy,
    Sell,
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeSide::Buy => write!(f, "BUY"),
            TradeSide::Sell => write!(f, "SELL"),
        }
    }
}

impl From<OrderSide> for TradeSide {
    /// The execution→booking synthesis rule of §4.9: BID becomes BUY,
    /// OFFER becomes SELL.
    fn from(side: OrderSide) -> Self {
        match side {
            OrderSide::Bid => TradeSide::Buy,
            OrderSide::Offer => TradeSide::Sell,
        }
    }
}

/// The signed delta `AddPosition` applies for a given trade side:
/// `+quantity` for BUY, `-quantity` for SELL (§4.10).
impl TradeSide {
    pub fn signum(self) -> i64 {
        match self {
            TradeSide::Buy => 1,
            TradeSide::Sell => -1,
        }
    }
}
