#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    unused_crate_dependencies,
    unused_extern_crates,
    clippy::unused_self,
    missing_debug_implementations,
    rust_2018_idioms
)]

//! # Instruments — the `Bond` product, its catalog, and the price codec
//!
//! The only product type the shipped pipeline instantiates services over
//! (§9). Every service in the other domain crates is generic over a
//! product type; nothing here precludes adding a second product later.

pub mod bond;
pub mod catalog;
pub mod codec;
pub mod side;

pub use bond::{Bond, IdentifierKind};
pub use catalog::{BondCatalog, Tenor};
pub use side::{OrderSide, TradeSide};
