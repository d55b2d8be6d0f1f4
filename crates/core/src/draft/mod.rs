//! Transaction drafts owned by the counter screens.
//!
//! A draft is the only mutable copy of a bill in progress: its lines and
//! modifiers. Totals are never stored on it; every read goes through
//! [`BillingCalculator`](crate::billing::BillingCalculator). A draft is
//! created when a screen opens and consumed by `finalize` on save.

pub mod error;
pub mod purchase;
pub mod sales;

use serde::{Deserialize, Serialize};
use tapza_shared::config::BillingConfig;
use tapza_shared::types::LineId;

use crate::billing::{LineItem, TaxPolicy};

pub use error::DraftError;
pub use purchase::{LineField, PurchaseDraft};
pub use sales::SalesDraft;

/// Settings shared by every draft a screen opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSettings {
    /// State the pharmacy is registered in.
    pub home_state: String,
    /// GST rate selection.
    pub tax_policy: TaxPolicy,
}

impl Default for DraftSettings {
    fn default() -> Self {
        Self::from(&BillingConfig::default())
    }
}

impl From<&BillingConfig> for DraftSettings {
    fn from(config: &BillingConfig) -> Self {
        Self {
            home_state: config.home_state.clone(),
            tax_policy: TaxPolicy::from(config),
        }
    }
}

/// Ordered lines of a draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct DraftLines(Vec<LineItem>);

impl DraftLines {
    fn push(&mut self, item: LineItem) -> LineId {
        let id = item.id;
        self.0.push(item);
        id
    }

    fn get_mut(&mut self, id: LineId) -> Result<&mut LineItem, DraftError> {
        self.0
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(DraftError::LineNotFound(id))
    }

    fn remove(&mut self, id: LineId) -> Result<LineItem, DraftError> {
        let index = self
            .0
            .iter()
            .position(|item| item.id == id)
            .ok_or(DraftError::LineNotFound(id))?;
        Ok(self.0.remove(index))
    }

    fn as_slice(&self) -> &[LineItem] {
        &self.0
    }
}
