//! Medicine records the counter screens pick lines from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::billing::GstRates;
use crate::search::Searchable;

/// A stocked medicine on the retail catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    /// Catalog ID.
    pub id: String,
    /// Brand name and strength.
    pub name: String,
    /// Batch on the shelf.
    pub batch: String,
    /// Expiry as printed (`MM/YY`).
    pub expiry: String,
    /// Units per pack.
    pub pack: u32,
    /// Strips per pack.
    pub strip: u32,
    /// Tablets per strip.
    pub tab: u32,
    /// Free units given with each sale.
    pub free: Decimal,
    /// Maximum retail price per unit.
    pub mrp: Decimal,
    /// Selling price per unit.
    pub price: Decimal,
    /// Default line discount percent.
    pub disc: Decimal,
    /// Combined GST percent.
    pub gst: Decimal,
    /// Salt composition.
    pub salt: String,
    /// Manufacturer.
    pub manufacturer: String,
    /// Therapeutic category.
    pub category: String,
    /// Units in stock.
    pub stock: u32,
}

impl Medicine {
    /// GST rates implied by the combined percent.
    #[must_use]
    pub fn gst_rates(&self) -> GstRates {
        GstRates::from_combined(self.gst)
    }
}

impl Searchable for Medicine {
    fn search_keys(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.salt.as_str()]
    }
}

/// A medicine on the distributor master list used for purchase entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterMedicine {
    /// Master list record ID.
    pub record_id: String,
    /// Medicine code.
    pub medicine_id: String,
    /// Brand name and strength.
    pub name: String,
    /// Manufacturer.
    pub manufacturer: String,
    /// Salt composition.
    pub salt: String,
    /// HSN classification code.
    pub hsn_code: String,
    /// GST rates for the HSN code.
    pub gst: GstRates,
    /// Units per pack.
    pub unit_per_pack: u32,
    /// Packing type, e.g. `STRIP`.
    pub packing_type: String,
}

impl Searchable for MasterMedicine {
    fn search_keys(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}
