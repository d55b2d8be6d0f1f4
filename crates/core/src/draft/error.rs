//! Draft error types.

use tapza_shared::AppError;
use tapza_shared::types::LineId;
use thiserror::Error;

use crate::billing::BillingValidationError;

/// Errors from editing or saving a draft.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    /// No line with this ID on the draft.
    #[error("Line not found: {0}")]
    LineNotFound(LineId),

    /// Purchase saved without choosing a supplier.
    #[error("A supplier must be selected before saving")]
    NoSupplier,

    /// Purchase saved without the supplier's invoice number.
    #[error("Supplier invoice number is required")]
    MissingInvoiceNumber,

    /// Bill contents failed validation.
    #[error(transparent)]
    Validation(#[from] BillingValidationError),
}

impl From<DraftError> for AppError {
    fn from(err: DraftError) -> Self {
        match err {
            DraftError::LineNotFound(_) => Self::NotFound(err.to_string()),
            DraftError::NoSupplier | DraftError::MissingInvoiceNumber => {
                Self::BusinessRule(err.to_string())
            }
            DraftError::Validation(_) => Self::Validation(err.to_string()),
        }
    }
}
