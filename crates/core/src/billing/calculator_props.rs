//! Property-based tests for BillingCalculator.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::calculator::BillingCalculator;
use super::input::MAX_INPUT_MAGNITUDE;
use super::tax::TaxPolicy;
use super::types::{BillingModifiers, GstRates, LineItem, LineKind, TaxMode};

/// Strategy to generate unit prices (0.00 to 10,000.00).
fn price() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|paise| Decimal::new(paise, 2))
}

/// Strategy to generate quantities (0 to 500).
fn qty() -> impl Strategy<Value = Decimal> {
    (0i64..=500i64).prop_map(Decimal::from)
}

/// Strategy to generate discount percents (0.00 to 100.00).
fn discount_percent() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|bp| Decimal::new(bp, 2))
}

/// Strategy to generate a GST slab seen in the catalog.
fn gst_rates() -> impl Strategy<Value = GstRates> {
    prop_oneof![
        Just(GstRates::from_combined(Decimal::from(5))),
        Just(GstRates::from_combined(Decimal::from(12))),
        Just(GstRates::from_combined(Decimal::from(18))),
    ]
}

fn line_item() -> impl Strategy<Value = LineItem> {
    (price(), qty(), discount_percent(), gst_rates()).prop_map(|(price, qty, disc, gst)| {
        LineItem::new(LineKind::Sale, "P", "Item", price, qty)
            .with_discount_percent(disc)
            .with_gst(gst)
    })
}

fn tax_mode() -> impl Strategy<Value = TaxMode> {
    prop_oneof![Just(TaxMode::Intrastate), Just(TaxMode::Interstate)]
}

fn policy() -> impl Strategy<Value = TaxPolicy> {
    prop_oneof![Just(TaxPolicy::default()), Just(TaxPolicy::PerItem)]
}

/// Strategy spanning every value a form field accepts.
fn form_value() -> impl Strategy<Value = Decimal> {
    let bound = MAX_INPUT_MAGNITUDE.mantissa();
    (-bound..=bound).prop_map(|units| Decimal::from_i128_with_scale(units, 0))
}

fn modifiers() -> impl Strategy<Value = BillingModifiers> {
    (
        tax_mode(),
        (0i64..5_000_000i64).prop_map(|p| Decimal::new(p, 2)),
        proptest::option::of((0i64..5_000_000i64).prop_map(|p| Decimal::new(p, 2))),
        any::<bool>(),
    )
        .prop_map(|(tax_mode, cash_discount, wallet_balance, apply_wallet)| BillingModifiers {
            tax_mode,
            cash_discount,
            wallet_balance,
            apply_wallet,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Line amount equals price × qty × (1 − d/100).
    #[test]
    fn prop_line_amount_formula(p in price(), q in qty(), d in discount_percent()) {
        let amount = BillingCalculator::compute_line_amount(p, q, d);
        let expected = p * q * (Decimal::ONE - d / Decimal::ONE_HUNDRED);
        prop_assert_eq!(amount, expected);
    }

    /// A larger discount never yields a larger line amount.
    #[test]
    fn prop_line_amount_non_increasing_in_discount(
        p in price(),
        q in qty(),
        d1 in discount_percent(),
        d2 in discount_percent(),
    ) {
        let (low, high) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
        prop_assert!(
            BillingCalculator::compute_line_amount(p, q, high)
                <= BillingCalculator::compute_line_amount(p, q, low)
        );
    }

    /// subTotal − itemDiscount = taxableValue and taxableValue + GST = billTotal.
    #[test]
    fn prop_totals_chain(
        items in proptest::collection::vec(line_item(), 0..8),
        m in modifiers(),
        pol in policy(),
    ) {
        let t = BillingCalculator::compute_totals_with_policy(&items, &m, &pol);
        prop_assert_eq!(t.sub_total - t.item_discount, t.taxable_value);
        prop_assert_eq!(t.taxable_value + t.sgst + t.cgst + t.igst, t.bill_total);
        prop_assert_eq!(t.gst_total, t.sgst + t.cgst + t.igst);
    }

    /// SGST/CGST and IGST are never both non-zero.
    #[test]
    fn prop_tax_exclusivity(
        items in proptest::collection::vec(line_item(), 0..8),
        m in modifiers(),
        pol in policy(),
    ) {
        let t = BillingCalculator::compute_totals_with_policy(&items, &m, &pol);
        match m.tax_mode {
            TaxMode::Intrastate => prop_assert!(t.igst.is_zero()),
            TaxMode::Interstate => prop_assert!(t.sgst.is_zero() && t.cgst.is_zero()),
        }
        prop_assert!(!((t.sgst > Decimal::ZERO || t.cgst > Decimal::ZERO) && t.igst > Decimal::ZERO));
    }

    /// Payable is never negative and credit never exceeds what is owed.
    #[test]
    fn prop_final_payable_non_negative(
        items in proptest::collection::vec(line_item(), 0..8),
        m in modifiers(),
    ) {
        let t = BillingCalculator::compute_totals(&items, &m);
        prop_assert!(t.final_payable >= Decimal::ZERO);
        prop_assert!(t.credit_deducted >= Decimal::ZERO);
        prop_assert!(t.credit_deducted <= (t.bill_total - t.cash_discount).max(Decimal::ZERO));
        if !m.apply_wallet {
            prop_assert!(t.credit_deducted.is_zero());
        }
    }

    /// Same inputs give identical output, down to the decimal scale.
    #[test]
    fn prop_compute_totals_idempotent(
        items in proptest::collection::vec(line_item(), 0..8),
        m in modifiers(),
    ) {
        let first = BillingCalculator::compute_totals(&items, &m);
        let second = BillingCalculator::compute_totals(&items, &m);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.final_payable.serialize(), second.final_payable.serialize());
    }

    /// Switching tax mode changes only the GST split, not line discounts.
    #[test]
    fn prop_tax_mode_switch_keeps_discounts(
        items in proptest::collection::vec(line_item(), 0..8),
        m in modifiers(),
    ) {
        let local = BillingCalculator::compute_totals(
            &items,
            &BillingModifiers { tax_mode: TaxMode::Intrastate, ..m.clone() },
        );
        let inter = BillingCalculator::compute_totals(
            &items,
            &BillingModifiers { tax_mode: TaxMode::Interstate, ..m },
        );
        prop_assert_eq!(local.item_discount, inter.item_discount);
        prop_assert_eq!(local.taxable_value, inter.taxable_value);
        // Flat 6% + 6% and 12% slabs give the same bill total either way.
        prop_assert_eq!(local.bill_total, inter.bill_total);
    }

    /// Totals stay finite and non-negative across the full accepted input range.
    #[test]
    fn prop_extreme_form_values_do_not_overflow(
        price in form_value(),
        qty in form_value(),
        mrp in form_value(),
        disc in form_value(),
        mode in tax_mode(),
        policy in policy(),
    ) {
        let items = vec![
            LineItem::new(LineKind::Purchase, "P", "Item", price, qty)
                .with_mrp(mrp)
                .with_discount_percent(disc),
        ];
        let modifiers = BillingModifiers { tax_mode: mode, ..BillingModifiers::default() };
        let totals = BillingCalculator::compute_totals_with_policy(&items, &modifiers, &policy);
        prop_assert!(totals.final_payable >= Decimal::ZERO);
    }
}
