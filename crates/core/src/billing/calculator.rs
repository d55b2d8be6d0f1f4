//! Bill total calculation.

use rust_decimal::Decimal;

use super::input::parse_amount;
use super::tax::TaxPolicy;
use super::types::{BillingModifiers, DerivedTotals, LineItem};

/// Pure bill calculator. Holds no state and never fails.
///
/// Products and sums saturate at the `Decimal` range instead of panicking.
pub struct BillingCalculator;

impl BillingCalculator {
    /// Line amount after the per-line discount:
    /// `price × qty − price × qty × discount_percent / 100`.
    ///
    /// No clamping happens here; editors clamp quantities before calling.
    #[must_use]
    pub fn compute_line_amount(price: Decimal, qty: Decimal, discount_percent: Decimal) -> Decimal {
        let base = price.saturating_mul(qty);
        base.saturating_sub(base.saturating_mul(discount_percent) / Decimal::ONE_HUNDRED)
    }

    /// Computes bill totals with the flat 6% / 6% / 12% GST rates.
    #[must_use]
    pub fn compute_totals(items: &[LineItem], modifiers: &BillingModifiers) -> DerivedTotals {
        Self::compute_totals_with_policy(items, modifiers, &TaxPolicy::default())
    }

    /// Computes bill totals under the given tax policy.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tapza_core::billing::{BillingCalculator, BillingModifiers, LineItem, LineKind};
    ///
    /// let items = vec![LineItem::new(LineKind::Sale, "4", "Dolo 650", dec!(32.50), dec!(2))];
    /// let totals = BillingCalculator::compute_totals(&items, &BillingModifiers::default());
    /// assert_eq!(totals.bill_total, dec!(72.80));
    /// ```
    #[must_use]
    pub fn compute_totals_with_policy(
        items: &[LineItem],
        modifiers: &BillingModifiers,
        policy: &TaxPolicy,
    ) -> DerivedTotals {
        let mut totals = DerivedTotals::default();

        for item in items {
            totals.mrp_value = totals.mrp_value.saturating_add(item.mrp.saturating_mul(item.qty));
            totals.sub_total = totals.sub_total.saturating_add(item.gross());
            totals.item_discount = totals.item_discount.saturating_add(item.discount());
            totals.free_qty = totals.free_qty.saturating_add(item.free);
        }

        totals.taxable_value = totals.sub_total.saturating_sub(totals.item_discount);

        let split = policy.split(items, totals.taxable_value, modifiers.tax_mode);
        totals.sgst = split.sgst;
        totals.cgst = split.cgst;
        totals.igst = split.igst;
        totals.gst_total = split.total();
        totals.bill_total = totals.taxable_value.saturating_add(totals.gst_total);

        totals.cash_discount = modifiers.cash_discount;
        totals.credit_deducted = Self::apply_wallet_or_credit(
            totals.bill_total,
            modifiers.cash_discount,
            modifiers.wallet_balance,
            modifiers.apply_wallet,
        );
        totals.final_payable = totals
            .bill_total
            .saturating_sub(totals.cash_discount)
            .saturating_sub(totals.credit_deducted)
            .max(Decimal::ZERO);

        totals
    }

    /// Applies a cash discount typed into the form and returns what is still
    /// owed before wallet or credit.
    ///
    /// Unparsable or empty input is a zero discount. The result is not
    /// clamped; a discount larger than the bill gives a negative remainder,
    /// which the final payable later floors at zero.
    #[must_use]
    pub fn apply_cash_discount(bill_total: Decimal, cash_discount_input: &str) -> Decimal {
        bill_total.saturating_sub(parse_amount(cash_discount_input))
    }

    /// Amount taken from the counterparty's wallet or credit balance.
    ///
    /// Zero unless `use_balance` is set. Otherwise the lesser of the balance
    /// and what remains after the cash discount, and never negative. A
    /// missing balance counts as zero.
    #[must_use]
    pub fn apply_wallet_or_credit(
        bill_total: Decimal,
        cash_discount: Decimal,
        available_balance: Option<Decimal>,
        use_balance: bool,
    ) -> Decimal {
        if !use_balance {
            return Decimal::ZERO;
        }

        let balance = available_balance.unwrap_or(Decimal::ZERO);
        let remaining = bill_total.saturating_sub(cash_discount);
        balance.min(remaining).max(Decimal::ZERO)
    }
}
