//! `PV01<Bond>` and bucketed sector PV01 (§3), and the `RiskService` that
//! derives them from `Position` (§4.11).

use backoffice_fabric::{error::BackOfficeError, FnvIndexMap, Keyed, Listener};
use backoffice_instruments::BondCatalog;
use backoffice_trading::Position;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pv01 {
    pub product_id: String,
    pub pv01_per_unit: Decimal,
    pub quantity: Decimal,
}

impl Keyed<String> for Pv01 {
    fn key(&self) -> String {
        self.product_id.clone()
    }
}

/// Quantity-weighted mean PV01 across every product in a sector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketedSectorPv01 {
    pub sector: String,
    pub weighted_mean_pv01: Decimal,
    pub total_quantity: Decimal,
}

/// Registered as a [`Listener<Position>`] on `PositionService`. Looks up
/// the product's per-unit PV01 from the catalog on every position update,
/// caches it, and notifies listeners (§4.11).
pub struct RiskService<'catalog> {
    catalog: &'catalog BondCatalog,
    cache: FnvIndexMap<String, Pv01>,
    listeners: Vec<Box<dyn Listener<Pv01>>>,
}

impl<'catalog> RiskService<'catalog> {
    pub fn new(catalog: &'catalog BondCatalog) -> Self {
        Self {
            catalog,
            cache: FnvIndexMap::default(),
            listeners: Vec::new(),
        }
    }

    pub fn add_listener(&mut self, listener: Box<dyn Listener<Pv01>>) {
        self.listeners.push(listener);
    }

    pub fn get_data(&self, key: &String) -> Result<&Pv01, BackOfficeError> {
        self.cache
            .get(key)
            .ok_or_else(|| BackOfficeError::MissingCacheEntry(key.clone()))
    }

    /// Weighted mean Σ(qᵢ·pv01ᵢ)/Σqᵢ over every product in `sector`. A
    /// product with no cached PV01 contributes zero quantity. Returns zero
    /// when total quantity is zero rather than propagating the undefined
    /// ratio (§4.11).
    pub fn get_bucketed_risk(&self, sector: &str) -> BucketedSectorPv01 {
        let mut weighted_sum = Decimal::ZERO;
        let mut total_quantity = Decimal::ZERO;

        for cusip in self.catalog.cusips_in_sector(sector) {
            if let Some(pv01) = self.cache.get(cusip) {
                weighted_sum += pv01.quantity * pv01.pv01_per_unit;
                total_quantity += pv01.quantity;
            }
        }

        let weighted_mean_pv01 = if total_quantity.is_zero() {
            Decimal::ZERO
        } else {
            weighted_sum / total_quantity
        };

        BucketedSectorPv01 {
            sector: sector.to_string(),
            weighted_mean_pv01,
            total_quantity,
        }
    }
}

impl Listener<Position> for RiskService<'_> {
    fn on_add(&mut self, position: &Position) {
        let pv01_per_unit = match self.catalog.pv01_per_unit(&position.product_id) {
            Ok(v) => v,
            Err(err) => {
                tracing::error!(product_id = %position.product_id, %err, "risk lookup failed");
                return;
            }
        };
        let pv01 = Pv01 {
            product_id: position.product_id.clone(),
            pv01_per_unit,
            quantity: position.get_aggregate_position(),
        };
        self.cache.insert(pv01.product_id.clone(), pv01.clone());
        for listener in &mut self.listeners {
            listener.on_add(&pv01);
        }
    }
}
