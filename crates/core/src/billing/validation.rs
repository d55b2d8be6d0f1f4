//! Strict validation applied when a bill is saved.
//!
//! Editing is permissive; these checks run only when a draft is finalized.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;
use tapza_shared::types::LineId;

use super::types::{BillingModifiers, LineItem};

/// Date format used by the entry forms.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation errors for bill contents.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BillingValidationError {
    /// Bill has no lines.
    #[error("Bill must have at least one line")]
    NoLines,

    /// Quantity is negative.
    #[error("Line {line}: quantity cannot be negative ({value})")]
    NegativeQuantity {
        /// Offending line.
        line: LineId,
        /// Value entered.
        value: Decimal,
    },

    /// Free quantity is negative.
    #[error("Line {line}: free quantity cannot be negative ({value})")]
    NegativeFreeQuantity {
        /// Offending line.
        line: LineId,
        /// Value entered.
        value: Decimal,
    },

    /// Price, rate or MRP is negative.
    #[error("Line {line}: price cannot be negative ({value})")]
    NegativePrice {
        /// Offending line.
        line: LineId,
        /// Value entered.
        value: Decimal,
    },

    /// Discount percent outside `[0, 100]`.
    #[error("Line {line}: discount must be between 0 and 100 percent ({value})")]
    DiscountOutOfRange {
        /// Offending line.
        line: LineId,
        /// Value entered.
        value: Decimal,
    },

    /// Cash discount is negative.
    #[error("Cash discount cannot be negative ({0})")]
    NegativeCashDiscount(Decimal),

    /// Date text is not `YYYY-MM-DD`.
    #[error("Malformed date: {0:?}")]
    MalformedDate(String),
}

/// Validates a single line.
///
/// # Errors
///
/// Returns the first rule the line breaks.
pub fn validate_line_item(item: &LineItem) -> Result<(), BillingValidationError> {
    if item.qty < Decimal::ZERO {
        return Err(BillingValidationError::NegativeQuantity {
            line: item.id,
            value: item.qty,
        });
    }

    if item.free < Decimal::ZERO {
        return Err(BillingValidationError::NegativeFreeQuantity {
            line: item.id,
            value: item.free,
        });
    }

    for value in [item.price, item.mrp] {
        if value < Decimal::ZERO {
            return Err(BillingValidationError::NegativePrice {
                line: item.id,
                value,
            });
        }
    }

    if item.discount_percent < Decimal::ZERO || item.discount_percent > Decimal::ONE_HUNDRED {
        return Err(BillingValidationError::DiscountOutOfRange {
            line: item.id,
            value: item.discount_percent,
        });
    }

    Ok(())
}

/// Validates a whole bill.
///
/// # Errors
///
/// Returns `NoLines` for an empty bill, otherwise the first failing line or
/// a negative cash discount.
pub fn validate_bill(
    items: &[LineItem],
    modifiers: &BillingModifiers,
) -> Result<(), BillingValidationError> {
    if items.is_empty() {
        return Err(BillingValidationError::NoLines);
    }

    items.iter().try_for_each(validate_line_item)?;

    if modifiers.cash_discount < Decimal::ZERO {
        return Err(BillingValidationError::NegativeCashDiscount(
            modifiers.cash_discount,
        ));
    }

    Ok(())
}

/// Parses a form date.
///
/// # Errors
///
/// Returns `MalformedDate` unless the text is a real `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, BillingValidationError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| BillingValidationError::MalformedDate(input.to_string()))
}
