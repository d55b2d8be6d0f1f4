//! Bill total calculation for sales and purchase entry.
//!
//! This module holds the only business rules of the counter screens:
//! - Line amounts and per-line discounts
//! - Subtotal, taxable value and GST split (SGST + CGST or IGST)
//! - Cash discount and wallet/credit deduction
//! - Lenient numeric parsing for form fields
//! - Strict validation applied when a bill is saved

pub mod calculator;
pub mod input;
pub mod tax;
pub mod types;
pub mod validation;

#[cfg(test)]
mod calculator_props;

pub use calculator::BillingCalculator;
pub use input::parse_amount;
pub use tax::{TaxPolicy, TaxSplit};
pub use types::{BillingModifiers, DerivedTotals, GstRates, LineItem, LineKind, TaxMode};
pub use validation::{BillingValidationError, parse_date, validate_bill, validate_line_item};
