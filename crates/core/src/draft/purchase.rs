//! Purchase invoice entry.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tapza_shared::types::{DraftId, LineId};
use tracing::{debug, info};

use super::{DraftError, DraftLines, DraftSettings};
use crate::billing::{
    BillingCalculator, BillingModifiers, DerivedTotals, LineItem, LineKind, TaxMode, parse_amount,
    parse_date, validate_bill, validation::DATE_FORMAT,
};
use crate::catalog::MasterMedicine;
use crate::counterparty::Supplier;
use crate::history::{HistoryRecord, HistoryStatus, ItemSummary};

/// Numeric cells of a purchase line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineField {
    /// Billed quantity.
    Qty,
    /// Free quantity.
    Free,
    /// MRP per unit.
    Mrp,
    /// Purchase rate per unit.
    Rate,
    /// Line discount percent.
    DiscountPercent,
}

/// A supplier invoice being keyed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseDraft {
    id: DraftId,
    purchase_date: NaiveDate,
    invoice_no: String,
    supplier: Option<Supplier>,
    lines: DraftLines,
    cash_discount_input: String,
    due_date: Option<NaiveDate>,
    use_wallet: bool,
    tax_mode: TaxMode,
    settings: DraftSettings,
}

impl PurchaseDraft {
    /// Opens an empty purchase entry.
    #[must_use]
    pub fn new(purchase_date: NaiveDate, settings: DraftSettings) -> Self {
        Self {
            id: DraftId::new(),
            purchase_date,
            invoice_no: String::new(),
            supplier: None,
            lines: DraftLines::default(),
            cash_discount_input: String::new(),
            due_date: None,
            use_wallet: false,
            tax_mode: TaxMode::Intrastate,
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

    /// Selected supplier.
    #[must_use]
    pub const fn supplier(&self) -> Option<&Supplier> {
        self.supplier.as_ref()
    }

    /// Current tax mode.
    #[must_use]
    pub const fn tax_mode(&self) -> TaxMode {
        self.tax_mode
    }

    /// Whether the supplier wallet is applied.
    #[must_use]
    pub const fn use_wallet(&self) -> bool {
        self.use_wallet
    }

    /// Payment due date, if credit terms were entered.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Adds a master-list medicine. Quantities and prices start at zero
    /// and are keyed in from the supplier's invoice.
    pub fn add_master_medicine(&mut self, master: &MasterMedicine) -> LineId {
        let item = LineItem::new(
            LineKind::Purchase,
            master.medicine_id.clone(),
            master.name.clone(),
            Decimal::ZERO,
            Decimal::ZERO,
        )
        .with_gst(master.gst);

        let id = self.lines.push(item);
        debug!(draft_id = %self.id, line_id = %id, product = %master.name, "Added purchase line");
        id
    }

    /// Updates a numeric cell from its text. Unparsable text is zero.
    pub fn update_field(
        &mut self,
        id: LineId,
        field: LineField,
        input: &str,
    ) -> Result<(), DraftError> {
        let value = parse_amount(input);
        let item = self.lines.get_mut(id)?;
        match field {
            LineField::Qty => item.qty = value,
            LineField::Free => item.free = value,
            LineField::Mrp => item.mrp = value,
            LineField::Rate => item.price = value,
            LineField::DiscountPercent => item.discount_percent = value,
        }
        debug!(
            draft_id = %self.id,
            line_id = %id,
            ?field,
            %value,
            amount = %item.amount(),
            "Updated purchase line"
        );
        Ok(())
    }

    /// Sets a line's batch number.
    pub fn set_batch(&mut self, id: LineId, batch: &str) -> Result<(), DraftError> {
        self.lines.get_mut(id)?.batch = batch.to_string();
        Ok(())
    }

    /// Sets a line's expiry as printed on the pack.
    pub fn set_expiry(&mut self, id: LineId, expiry: &str) -> Result<(), DraftError> {
        self.lines.get_mut(id)?.expiry = expiry.to_string();
        Ok(())
    }

    /// Removes a line.
    pub fn remove_item(&mut self, id: LineId) -> Result<LineItem, DraftError> {
        let removed = self.lines.remove(id)?;
        debug!(draft_id = %self.id, line_id = %id, "Removed purchase line");
        Ok(removed)
    }

    /// Chooses the supplier. Wallet use must be confirmed again, and the tax
    /// mode follows the supplier's state.
    pub fn select_supplier(&mut self, supplier: Supplier) {
        self.tax_mode = supplier.tax_mode(&self.settings.home_state);
        self.use_wallet = false;
        debug!(
            draft_id = %self.id,
            supplier = %supplier.id,
            tax_mode = ?self.tax_mode,
            "Selected supplier"
        );
        self.supplier = Some(supplier);
    }

    /// Overrides the tax mode.
    pub fn set_tax_mode(&mut self, tax_mode: TaxMode) {
        self.tax_mode = tax_mode;
    }

    /// Applies or withdraws the supplier wallet.
    pub fn set_use_wallet(&mut self, use_wallet: bool) {
        self.use_wallet = use_wallet;
    }

    /// Flips the wallet switch.
    pub fn toggle_wallet(&mut self) {
        self.use_wallet = !self.use_wallet;
    }

    /// Stores the raw cash-discount text.
    pub fn set_cash_discount_input(&mut self, input: &str) {
        self.cash_discount_input = input.to_string();
    }

    /// Sets the supplier's invoice number.
    pub fn set_invoice_no(&mut self, invoice_no: &str) {
        self.invoice_no = invoice_no.trim().to_string();
    }

    /// Sets the payment due date from `YYYY-MM-DD` text. Blank text clears it.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::Validation` for a malformed date; the previous
    /// due date is kept.
    pub fn set_due_date(&mut self, input: &str) -> Result<(), DraftError> {
        self.due_date = if input.trim().is_empty() {
            None
        } else {
            Some(parse_date(input)?)
        };
        Ok(())
    }

    /// Bill-level inputs as the calculator sees them.
    #[must_use]
    pub fn modifiers(&self) -> BillingModifiers {
        BillingModifiers::from_input(
            self.tax_mode,
            &self.cash_discount_input,
            self.supplier.as_ref().and_then(|s| s.wallet_balance),
            self.use_wallet,
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

    /// Resets to an empty entry for the same date.
    pub fn clear(&mut self) {
        *self = Self::new(self.purchase_date, self.settings.clone());
    }

    /// Validates and saves the invoice as a history record.
    ///
    /// The record is `Pending` when a due date was given and something is
    /// still payable, otherwise `Paid`.
    ///
    /// # Errors
    ///
    /// Returns `NoSupplier` or `MissingInvoiceNumber` when the header is
    /// incomplete, or `Validation` for invalid lines.
    pub fn finalize(self) -> Result<HistoryRecord, DraftError> {
        let Some(supplier) = &self.supplier else {
            return Err(DraftError::NoSupplier);
        };
        if self.invoice_no.is_empty() {
            return Err(DraftError::MissingInvoiceNumber);
        }
        validate_bill(self.items(), &self.modifiers())?;

        let totals = self.totals();
        let status = if self.due_date.is_some() && totals.final_payable > Decimal::ZERO {
            HistoryStatus::Pending
        } else {
            HistoryStatus::Paid
        };

        let record = HistoryRecord {
            id: format!("{}/{}", supplier.id, self.invoice_no),
            bill_no: self.invoice_no.clone(),
            date: self.purchase_date.format(DATE_FORMAT).to_string(),
            amount: totals.final_payable,
            status,
            items: self
                .items()
                .iter()
                .map(ItemSummary::from_line)
                .collect(),
        };

        info!(
            draft_id = %self.id,
            supplier = %supplier.id,
            invoice_no = %record.bill_no,
            amount = %record.amount,
            wallet_used = %totals.credit_deducted,
            status = ?record.status,
            "Purchase invoice saved"
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::{BillingValidationError, TaxPolicy};
    use crate::fixtures;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 28).unwrap()
    }

    fn draft() -> PurchaseDraft {
        PurchaseDraft::new(date(), DraftSettings::default())
    }

    fn master(name: &str) -> MasterMedicine {
        fixtures::master_medicines()
            .into_iter()
            .find(|m| m.name == name)
            .unwrap()
    }

    fn supplier(id: &str) -> Supplier {
        fixtures::suppliers()
            .into_iter()
            .find(|s| s.id == id)
            .unwrap()
    }

    /// Dolo 650: 2 × 32.50, no discount.
    fn draft_with_dolo() -> (PurchaseDraft, LineId) {
        let mut d = draft();
        let id = d.add_master_medicine(&master("Dolo 650"));
        d.update_field(id, LineField::Rate, "32.50").unwrap();
        d.update_field(id, LineField::Qty, "2").unwrap();
        (d, id)
    }

    #[test]
    fn test_new_line_starts_at_zero() {
        let mut d = draft();
        d.add_master_medicine(&master("Amoxyclav 625"));

        let item = &d.items()[0];
        assert_eq!(item.product_id, "MED000000005");
        assert_eq!(item.qty, dec!(0));
        assert_eq!(item.price, dec!(0));
        assert_eq!(item.mrp, dec!(0));
        assert_eq!(item.free, dec!(0));
        assert_eq!(item.discount_percent, dec!(0));
        assert_eq!(item.amount(), dec!(0));
        assert_eq!(item.gst.igst, dec!(18));
    }

    #[test]
    fn test_amount_follows_every_edit() {
        let (mut d, id) = draft_with_dolo();
        assert_eq!(d.items()[0].amount(), dec!(65.00));

        d.update_field(id, LineField::DiscountPercent, "10").unwrap();
        assert_eq!(d.items()[0].amount(), dec!(58.50));

        d.update_field(id, LineField::Qty, "4").unwrap();
        assert_eq!(d.items()[0].amount(), dec!(117.00));

        d.update_field(id, LineField::Rate, "junk").unwrap();
        assert_eq!(d.items()[0].amount(), dec!(0));
    }

    #[test]
    fn test_free_and_mrp_do_not_change_amount() {
        let (mut d, id) = draft_with_dolo();
        d.update_field(id, LineField::Free, "1").unwrap();
        d.update_field(id, LineField::Mrp, "35").unwrap();

        assert_eq!(d.items()[0].amount(), dec!(65.00));
        assert_eq!(d.totals().free_qty, dec!(1));
        assert_eq!(d.totals().mrp_value, dec!(70));
    }

    #[test]
    fn test_largest_accepted_inputs_keep_totals_finite() {
        let mut d = draft();
        let id = d.add_master_medicine(&master("Dolo 650"));
        for field in [LineField::Rate, LineField::Qty, LineField::Mrp] {
            d.update_field(id, field, "999999999999").unwrap();
        }

        let totals = d.totals();
        assert_eq!(totals.sub_total, dec!(999_999_999_998_000_000_000_001));
        assert_eq!(totals.mrp_value, totals.sub_total);
        assert_eq!(totals.bill_total, dec!(1_119_999_999_997_760_000_000_001.12));

        d.update_field(id, LineField::DiscountPercent, "999999999999").unwrap();
        let totals = d.totals();
        assert!(totals.taxable_value.is_sign_negative());
        assert_eq!(totals.final_payable, dec!(0));

        d.set_tax_mode(TaxMode::Interstate);
        assert_eq!(d.totals().final_payable, dec!(0));
    }

    #[test]
    fn test_local_totals() {
        let (d, _) = draft_with_dolo();
        let totals = d.totals();
        assert_eq!(totals.sgst, dec!(3.90));
        assert_eq!(totals.cgst, dec!(3.90));
        assert_eq!(totals.bill_total, dec!(72.80));
        assert_eq!(totals.final_payable, dec!(72.80));
    }

    #[test]
    fn test_supplier_outside_home_state_switches_to_igst() {
        let (mut d, _) = draft_with_dolo();
        d.select_supplier(supplier("S001"));

        assert_eq!(d.tax_mode(), TaxMode::Interstate);
        let totals = d.totals();
        assert_eq!(totals.igst, dec!(7.80));
        assert_eq!(totals.sgst + totals.cgst, dec!(0));
        assert_eq!(totals.bill_total, dec!(72.80));

        d.select_supplier(supplier("S002"));
        assert_eq!(d.tax_mode(), TaxMode::Intrastate);
    }

    #[test]
    fn test_home_state_comes_from_settings() {
        let settings = DraftSettings {
            home_state: "Hyderabad".to_string(),
            tax_policy: TaxPolicy::default(),
        };
        let mut d = PurchaseDraft::new(date(), settings);
        d.select_supplier(supplier("S001"));
        assert_eq!(d.tax_mode(), TaxMode::Intrastate);
    }

    #[test]
    fn test_wallet_covers_bill_after_cash_discount() {
        let (mut d, _) = draft_with_dolo();
        d.select_supplier(supplier("S002"));
        d.set_cash_discount_input("10");
        d.select_supplier(Supplier {
            wallet_balance: Some(dec!(1000)),
            ..supplier("S002")
        });
        d.toggle_wallet();

        let totals = d.totals();
        assert_eq!(totals.credit_deducted, dec!(62.80));
        assert_eq!(totals.final_payable, dec!(0));
    }

    #[test]
    fn test_selecting_supplier_resets_wallet() {
        let (mut d, _) = draft_with_dolo();
        d.select_supplier(supplier("S001"));
        d.set_use_wallet(true);
        assert!(d.use_wallet());
        assert_eq!(d.totals().credit_deducted, dec!(72.80));

        d.select_supplier(supplier("S001"));
        assert!(!d.use_wallet());
        assert_eq!(d.totals().credit_deducted, dec!(0));
    }

    #[test]
    fn test_manual_tax_mode_does_not_touch_discounts() {
        let (mut d, id) = draft_with_dolo();
        d.update_field(id, LineField::DiscountPercent, "10").unwrap();
        let before = d.totals();

        d.set_tax_mode(TaxMode::Interstate);
        let after = d.totals();
        assert_eq!(after.item_discount, before.item_discount);
        assert_eq!(after.igst, before.sgst + before.cgst);
    }

    #[test]
    fn test_due_date() {
        let mut d = draft();
        d.set_due_date("2025-10-28").unwrap();
        assert_eq!(d.due_date(), NaiveDate::from_ymd_opt(2025, 10, 28));

        assert!(matches!(
            d.set_due_date("28-10-2025"),
            Err(DraftError::Validation(BillingValidationError::MalformedDate(_)))
        ));
        assert_eq!(d.due_date(), NaiveDate::from_ymd_opt(2025, 10, 28));

        d.set_due_date("  ").unwrap();
        assert_eq!(d.due_date(), None);
    }

    #[test]
    fn test_line_setters_and_unknown_line() {
        let (mut d, id) = draft_with_dolo();
        d.set_batch(id, "D774").unwrap();
        d.set_expiry(id, "2027-03").unwrap();
        assert_eq!(d.items()[0].batch, "D774");
        assert_eq!(d.items()[0].expiry, "2027-03");

        let stranger = LineId::new();
        assert_eq!(
            d.update_field(stranger, LineField::Qty, "1"),
            Err(DraftError::LineNotFound(stranger))
        );
        assert_eq!(
            d.set_batch(stranger, "X"),
            Err(DraftError::LineNotFound(stranger))
        );
    }

    #[test]
    fn test_finalize_requires_supplier_and_invoice() {
        let (d, _) = draft_with_dolo();
        assert_eq!(d.clone().finalize(), Err(DraftError::NoSupplier));

        let mut d = d;
        d.select_supplier(supplier("S002"));
        assert_eq!(d.clone().finalize(), Err(DraftError::MissingInvoiceNumber));

        d.set_invoice_no("  ");
        assert_eq!(d.finalize(), Err(DraftError::MissingInvoiceNumber));
    }

    #[test]
    fn test_finalize_rejects_out_of_range_discount() {
        let (mut d, id) = draft_with_dolo();
        d.select_supplier(supplier("S002"));
        d.set_invoice_no("SUN/7781");
        d.update_field(id, LineField::DiscountPercent, "120").unwrap();

        assert!(matches!(
            d.finalize(),
            Err(DraftError::Validation(
                BillingValidationError::DiscountOutOfRange { .. }
            ))
        ));
    }

    #[test]
    fn test_finalize_pending_with_due_date() {
        let (mut d, id) = draft_with_dolo();
        d.update_field(id, LineField::Free, "1").unwrap();
        d.select_supplier(supplier("S002"));
        d.set_invoice_no("SUN/7781");
        d.set_due_date("2025-10-28").unwrap();

        let record = d.finalize().unwrap();
        assert_eq!(record.id, "S002/SUN/7781");
        assert_eq!(record.bill_no, "SUN/7781");
        assert_eq!(record.status, HistoryStatus::Pending);
        assert_eq!(record.amount, dec!(72.80));
        assert_eq!(record.items[0].qty, dec!(3));
    }

    #[test]
    fn test_finalize_paid_when_wallet_settles() {
        let (mut d, _) = draft_with_dolo();
        d.select_supplier(supplier("S001"));
        d.set_invoice_no("APL-5531");
        d.set_due_date("2025-10-28").unwrap();
        d.set_use_wallet(true);

        let record = d.finalize().unwrap();
        assert_eq!(record.amount, dec!(0));
        assert_eq!(record.status, HistoryStatus::Paid);
    }

    #[test]
    fn test_clear() {
        let (mut d, _) = draft_with_dolo();
        d.select_supplier(supplier("S001"));
        d.set_invoice_no("APL-5531");

        d.clear();
        assert!(d.items().is_empty());
        assert!(d.supplier().is_none());
        assert_eq!(d.tax_mode(), TaxMode::Intrastate);
        assert_eq!(d.finalize(), Err(DraftError::NoSupplier));
    }
}
