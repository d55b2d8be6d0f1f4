//! GST split for a bill.
//!
//! Intrastate bills carry SGST and CGST; interstate bills carry IGST. The two
//! are never computed together. Rates come either from one flat set for the
//! whole bill or from each line's own catalog rates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tapza_shared::config::{BillingConfig, TaxPolicyKind};

use super::types::{GstRates, LineItem, TaxMode};

/// How GST rates are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TaxPolicy {
    /// Apply one rate set to the bill's taxable value.
    Flat {
        /// Rates applied to every line.
        rates: GstRates,
    },
    /// Apply each line's own rates to that line's amount, then sum.
    PerItem,
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self::Flat {
            rates: GstRates::standard(),
        }
    }
}

impl From<&BillingConfig> for TaxPolicy {
    fn from(config: &BillingConfig) -> Self {
        match config.tax_policy {
            TaxPolicyKind::Flat => Self::Flat {
                rates: GstRates::new(config.sgst_rate, config.cgst_rate, config.igst_rate),
            },
            TaxPolicyKind::PerItem => Self::PerItem,
        }
    }
}

/// The three GST components of a bill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaxSplit {
    /// State GST.
    pub sgst: Decimal,
    /// Central GST.
    pub cgst: Decimal,
    /// Integrated GST.
    pub igst: Decimal,
}

impl TaxSplit {
    /// Sum of all components.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.sgst.saturating_add(self.cgst).saturating_add(self.igst)
    }
}

impl TaxPolicy {
    /// Computes the GST split for `items`, whose combined taxable value is
    /// `taxable_value`.
    #[must_use]
    pub fn split(&self, items: &[LineItem], taxable_value: Decimal, mode: TaxMode) -> TaxSplit {
        match self {
            Self::Flat { rates } => apply_rates(*rates, taxable_value, mode),
            Self::PerItem => items.iter().fold(TaxSplit::default(), |acc, item| {
                let line = apply_rates(item.gst, item.amount(), mode);
                TaxSplit {
                    sgst: acc.sgst.saturating_add(line.sgst),
                    cgst: acc.cgst.saturating_add(line.cgst),
                    igst: acc.igst.saturating_add(line.igst),
                }
            }),
        }
    }
}

fn apply_rates(rates: GstRates, taxable: Decimal, mode: TaxMode) -> TaxSplit {
    match mode {
        TaxMode::Intrastate => TaxSplit {
            sgst: percent_of(taxable, rates.sgst),
            cgst: percent_of(taxable, rates.cgst),
            igst: Decimal::ZERO,
        },
        TaxMode::Interstate => TaxSplit {
            sgst: Decimal::ZERO,
            cgst: Decimal::ZERO,
            igst: percent_of(taxable, rates.igst),
        },
    }
}

fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    amount.saturating_mul(percent) / Decimal::ONE_HUNDRED
}
