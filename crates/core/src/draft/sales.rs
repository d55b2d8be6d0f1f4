//! Retail sales bill in progress.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tapza_shared::types::{DraftId, LineId};
use tracing::{debug, info};

use super::{DraftError, DraftLines, DraftSettings};
use crate::billing::{
    BillingCalculator, BillingModifiers, DerivedTotals, LineItem, LineKind, TaxMode, parse_amount,
    validate_bill, validation::DATE_FORMAT,
};
use crate::catalog::Medicine;
use crate::counterparty::Customer;
use crate::history::{HistoryRecord, HistoryStatus, ItemSummary};

/// Smallest quantity a retail line can hold.
pub const MIN_SALE_QTY: Decimal = Decimal::ONE;

/// A retail bill being rung up at the counter.
///
/// Retail bills are always intrastate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesDraft {
    id: DraftId,
    bill_date: NaiveDate,
    customer_name: String,
    customer: Option<Customer>,
    lines: DraftLines,
    cash_discount_input: String,
    use_credits: bool,
    settings: DraftSettings,
}

impl SalesDraft {
    /// Opens an empty bill.
    #[must_use]
    pub fn new(bill_date: NaiveDate, settings: DraftSettings) -> Self {
        Self {
            id: DraftId::new(),
            bill_date,
            customer_name: String::new(),
            customer: None,
            lines: DraftLines::default(),
            cash_discount_input: String::new(),
            use_credits: false,
            settings,
        }
    }

    /// Draft ID.
    #[must_use]
    pub const fn id(&self) -> DraftId {
        self.id
    }

    /// Lines in the order they were added.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.lines.as_slice()
    }

    /// Name printed on the bill.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Selected customer account, if any.
    #[must_use]
    pub const fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    /// Whether store credit is applied.
    #[must_use]
    pub const fn use_credits(&self) -> bool {
        self.use_credits
    }

    /// Adds a catalog medicine with quantity 1.
    pub fn add_item(&mut self, medicine: &Medicine) -> LineId {
        let mut item = LineItem::new(
            LineKind::Sale,
            medicine.id.clone(),
            medicine.name.clone(),
            medicine.price,
            MIN_SALE_QTY,
        )
        .with_mrp(medicine.mrp)
        .with_discount_percent(medicine.disc)
        .with_free(medicine.free)
        .with_gst(medicine.gst_rates());
        item.batch.clone_from(&medicine.batch);
        item.expiry.clone_from(&medicine.expiry);

        let id = self.lines.push(item);
        debug!(draft_id = %self.id, line_id = %id, product = %medicine.name, "Added sale line");
        id
    }

    /// Sets a line's quantity, raising anything below 1 to 1.
    pub fn set_qty(&mut self, id: LineId, qty: Decimal) -> Result<(), DraftError> {
        let item = self.lines.get_mut(id)?;
        item.qty = qty.max(MIN_SALE_QTY);
        debug!(draft_id = %self.id, line_id = %id, qty = %item.qty, "Updated sale quantity");
        Ok(())
    }

    /// Sets a line's quantity from the text typed into the quantity cell.
    pub fn set_qty_input(&mut self, id: LineId, input: &str) -> Result<(), DraftError> {
        self.set_qty(id, parse_amount(input))
    }

    /// Removes a line.
    pub fn remove_item(&mut self, id: LineId) -> Result<LineItem, DraftError> {
        let removed = self.lines.remove(id)?;
        debug!(draft_id = %self.id, line_id = %id, "Removed sale line");
        Ok(removed)
    }

    /// Bills a customer account. Credit use must be confirmed again.
    pub fn select_customer(&mut self, customer: Customer) {
        self.customer_name.clone_from(&customer.name);
        self.customer = Some(customer);
        self.use_credits = false;
    }

    /// Bills a walk-in customer by name only, dropping any selected account.
    pub fn set_customer_name(&mut self, name: &str) {
        self.customer_name = name.to_string();
        self.customer = None;
        self.use_credits = false;
    }

    /// Applies or withdraws the customer's store credit.
    pub fn set_use_credits(&mut self, use_credits: bool) {
        self.use_credits = use_credits;
    }

    /// Stores the raw cash-discount text.
    pub fn set_cash_discount_input(&mut self, input: &str) {
        self.cash_discount_input = input.to_string();
    }

    /// Bill-level inputs as the calculator sees them.
    #[must_use]
    pub fn modifiers(&self) -> BillingModifiers {
        BillingModifiers::from_input(
            TaxMode::Intrastate,
            &self.cash_discount_input,
            self.customer.as_ref().and_then(|c| c.credits),
            self.use_credits,
        )
    }

    /// Current totals.
    #[must_use]
    pub fn totals(&self) -> DerivedTotals {
        BillingCalculator::compute_totals_with_policy(
            self.items(),
            &self.modifiers(),
            &self.settings.tax_policy,
        )
    }

    /// Resets to an empty bill for the same date.
    pub fn clear(&mut self) {
        *self = Self::new(self.bill_date, self.settings.clone());
    }

    /// Validates and saves the bill as a paid history record.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::Validation` if any line or the cash discount is
    /// invalid, or the bill is empty.
    pub fn finalize(self, bill_no: &str) -> Result<HistoryRecord, DraftError> {
        let modifiers = self.modifiers();
        validate_bill(self.items(), &modifiers)?;

        let totals = self.totals();
        let record = HistoryRecord {
            id: bill_no.to_string(),
            bill_no: bill_no.to_string(),
            date: self.bill_date.format(DATE_FORMAT).to_string(),
            amount: totals.final_payable,
            status: HistoryStatus::Paid,
            items: self
                .items()
                .iter()
                .map(ItemSummary::from_line)
                .collect(),
        };

        info!(
            draft_id = %self.id,
            bill_no = %record.bill_no,
            amount = %record.amount,
            lines = record.items.len(),
            "Sales bill saved"
        );
        Ok(record)
    }
}
