//! Billing data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tapza_shared::types::LineId;

use super::calculator::BillingCalculator;

/// GST percentages attached to a catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstRates {
    /// State GST percent.
    pub sgst: Decimal,
    /// Central GST percent.
    pub cgst: Decimal,
    /// Integrated GST percent.
    pub igst: Decimal,
}

impl GstRates {
    /// Creates a rate set from three percentages.
    #[must_use]
    pub const fn new(sgst: Decimal, cgst: Decimal, igst: Decimal) -> Self {
        Self { sgst, cgst, igst }
    }

    /// The 6% + 6% / 12% slab most medicines fall into.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Decimal::from(6), Decimal::from(6), Decimal::from(12))
    }

    /// Splits a combined intrastate GST percent evenly into SGST and CGST,
    /// with IGST equal to the combined rate.
    #[must_use]
    pub fn from_combined(gst_percent: Decimal) -> Self {
        let half = gst_percent / Decimal::TWO;
        Self::new(half, half, gst_percent)
    }
}

impl Default for GstRates {
    fn default() -> Self {
        Self::standard()
    }
}

/// Which screen a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Retail sale to a customer.
    Sale,
    /// Stock purchase from a supplier.
    Purchase,
}

/// A line on a sales bill or purchase invoice.
///
/// `price` is the selling price for sales and the purchase rate for
/// purchases. The line amount is never stored; [`LineItem::amount`] derives
/// it from the current price, quantity and discount every time it is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Line ID.
    pub id: LineId,
    /// Sale or purchase.
    pub kind: LineKind,
    /// Catalog record the line was created from.
    pub product_id: String,
    /// Display name.
    pub name: String,
    /// Unit price (sales) or unit rate (purchases).
    pub price: Decimal,
    /// Unit MRP.
    pub mrp: Decimal,
    /// Billed quantity.
    pub qty: Decimal,
    /// Free quantity, not billed.
    pub free: Decimal,
    /// Per-line discount in percent.
    pub discount_percent: Decimal,
    /// GST rates from the catalog.
    pub gst: GstRates,
    /// Batch number, if known.
    pub batch: String,
    /// Expiry as printed on the pack.
    pub expiry: String,
}

impl LineItem {
    /// Creates a line with zero MRP, free quantity and discount, and
    /// standard GST rates.
    #[must_use]
    pub fn new(
        kind: LineKind,
        product_id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        qty: Decimal,
    ) -> Self {
        Self {
            id: LineId::new(),
            kind,
            product_id: product_id.into(),
            name: name.into(),
            price,
            mrp: Decimal::ZERO,
            qty,
            free: Decimal::ZERO,
            discount_percent: Decimal::ZERO,
            gst: GstRates::standard(),
            batch: String::new(),
            expiry: String::new(),
        }
    }

    /// Sets the MRP.
    #[must_use]
    pub fn with_mrp(mut self, mrp: Decimal) -> Self {
        self.mrp = mrp;
        self
    }

    /// Sets the per-line discount percent.
    #[must_use]
    pub fn with_discount_percent(mut self, discount_percent: Decimal) -> Self {
        self.discount_percent = discount_percent;
        self
    }

    /// Sets the GST rates.
    #[must_use]
    pub fn with_gst(mut self, gst: GstRates) -> Self {
        self.gst = gst;
        self
    }

    /// Sets the free quantity.
    #[must_use]
    pub fn with_free(mut self, free: Decimal) -> Self {
        self.free = free;
        self
    }

    /// `price × qty` before discount.
    #[must_use]
    pub fn gross(&self) -> Decimal {
        self.price.saturating_mul(self.qty)
    }

    /// Discount taken on this line.
    #[must_use]
    pub fn discount(&self) -> Decimal {
        self.gross().saturating_mul(self.discount_percent) / Decimal::ONE_HUNDRED
    }

    /// Line amount after the per-line discount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        BillingCalculator::compute_line_amount(self.price, self.qty, self.discount_percent)
    }
}

/// Intrastate bills carry SGST + CGST, interstate bills carry IGST.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxMode {
    /// Same state: SGST + CGST.
    #[default]
    Intrastate,
    /// Different state: IGST only.
    Interstate,
}

/// Bill-level inputs that are not line items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingModifiers {
    /// Tax mode.
    pub tax_mode: TaxMode,
    /// Absolute cash discount taken off the bill total.
    pub cash_discount: Decimal,
    /// Wallet or credit balance held against the counterparty, if any.
    pub wallet_balance: Option<Decimal>,
    /// Whether the balance should be applied to this bill.
    pub apply_wallet: bool,
}

impl BillingModifiers {
    /// Builds modifiers from the raw cash-discount text of the form.
    ///
    /// Unparsable text is a zero discount.
    #[must_use]
    pub fn from_input(
        tax_mode: TaxMode,
        cash_discount_input: &str,
        wallet_balance: Option<Decimal>,
        apply_wallet: bool,
    ) -> Self {
        Self {
            tax_mode,
            cash_discount: super::input::parse_amount(cash_discount_input),
            wallet_balance,
            apply_wallet,
        }
    }
}

/// Totals derived from line items and modifiers. Never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedTotals {
    /// Σ(mrp × qty).
    pub mrp_value: Decimal,
    /// Σ(price × qty).
    pub sub_total: Decimal,
    /// Σ(price × qty × discount% / 100).
    pub item_discount: Decimal,
    /// `sub_total - item_discount`.
    pub taxable_value: Decimal,
    /// State GST.
    pub sgst: Decimal,
    /// Central GST.
    pub cgst: Decimal,
    /// Integrated GST.
    pub igst: Decimal,
    /// `sgst + cgst + igst`.
    pub gst_total: Decimal,
    /// `taxable_value + gst_total`.
    pub bill_total: Decimal,
    /// Cash discount as entered.
    pub cash_discount: Decimal,
    /// Wallet or credit actually applied.
    pub credit_deducted: Decimal,
    /// Amount still to be paid, never below zero.
    pub final_payable: Decimal,
    /// Σ free quantity.
    pub free_qty: Decimal,
}

