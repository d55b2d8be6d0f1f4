//! Tapza bill preview
//!
//! Builds one retail bill and one purchase invoice from the mock datasets
//! and prints their billing summaries, the way the counter screens show them.
//!
//! Usage: cargo run --bin preview
//!
//! Failures print their error code and exit with [`AppError::exit_code`].

use std::process::ExitCode;

use anyhow::Context;
use chrono::NaiveDate;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tapza_core::billing::DerivedTotals;
use tapza_core::draft::{DraftError, DraftSettings, LineField, PurchaseDraft, SalesDraft};
use tapza_core::fixtures;
use tapza_core::history::HistoryBook;
use tapza_core::search::SearchFilter;
use tapza_shared::types::{Currency, Money};
use tapza_shared::{AppConfig, AppError};

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let err = into_app_error(err);
            eprintln!("error [{}]: {err}", err.error_code());
            ExitCode::from(err.exit_code())
        }
    }
}

/// Recovers the typed error behind an `anyhow` chain.
fn into_app_error(err: anyhow::Error) -> AppError {
    match err.downcast::<AppError>() {
        Ok(app) => app,
        Err(err) => match err.downcast::<DraftError>() {
            Ok(draft) => draft.into(),
            Err(other) => AppError::Internal(format!("{other:#}")),
        },
    }
}

fn run() -> anyhow::Result<()> {
    let config = AppConfig::load().map_err(AppError::from)?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = DraftSettings::from(&config.billing);
    info!(
        home_state = %settings.home_state,
        tax_policy = ?settings.tax_policy,
        "Billing configured"
    );

    let bill_date = NaiveDate::from_ymd_opt(2025, 9, 28).context("invalid bill date")?;
    let currency = config.billing.currency;

    let mut sales_history = HistoryBook::new(fixtures::sales_history());
    let sale = retail_bill(bill_date, settings.clone())?;
    print_summary("Sales Retail", &sale.totals(), currency);
    sales_history.record(sale.finalize("A000102")?);

    let mut purchase_history = HistoryBook::new(fixtures::purchase_history());
    let purchase = purchase_invoice(bill_date, settings)?;
    print_summary("Purchase Entry", &purchase.totals(), currency);
    purchase_history.record(purchase.finalize()?);

    for (title, book) in [("Sales", &sales_history), ("Purchases", &purchase_history)] {
        println!("\n{title} history");
        for record in book.recent() {
            println!(
                "  {:<14} {:<18} {:>12}  {:?}",
                record.bill_no,
                record.date,
                Money::new(record.amount, currency).to_string(),
                record.status
            );
        }
        println!(
            "  pending: {}",
            Money::new(book.pending_total(), currency)
        );
    }

    Ok(())
}

/// Opening retail bill: the first three catalog medicines, two units of the last.
fn retail_bill(bill_date: NaiveDate, settings: DraftSettings) -> anyhow::Result<SalesDraft> {
    let mut draft = SalesDraft::new(bill_date, settings);
    draft.set_customer_name("Walk-in");

    let medicines = fixtures::retail_medicines();
    let lines: Vec<_> = medicines.iter().take(3).map(|m| draft.add_item(m)).collect();
    if let Some(&last) = lines.last() {
        draft.set_qty_input(last, "2")?;
    }

    Ok(draft)
}

/// Purchase from a local supplier with a cash discount and 30-day terms.
fn purchase_invoice(
    purchase_date: NaiveDate,
    settings: DraftSettings,
) -> anyhow::Result<PurchaseDraft> {
    let suppliers = fixtures::suppliers();
    let masters = fixtures::master_medicines();

    let mut draft = PurchaseDraft::new(purchase_date, settings);
    let supplier = SearchFilter::new("sun pharma")
        .apply(&suppliers)
        .first()
        .copied()
        .cloned()
        .ok_or_else(|| AppError::NotFound("supplier 'sun pharma'".to_string()))?;
    draft.select_supplier(supplier);
    draft.set_invoice_no("SUN/7781");

    for (name, qty, free, rate, mrp, disc) in [
        ("dolo", "100", "10", "18.50", "35", "5"),
        ("amoxyclav", "20", "0", "80", "120", "0"),
    ] {
        let master = SearchFilter::new(name)
            .apply(&masters)
            .first()
            .copied()
            .ok_or_else(|| AppError::NotFound(format!("medicine '{name}'")))?;
        let id = draft.add_master_medicine(master);
        draft.update_field(id, LineField::Qty, qty)?;
        draft.update_field(id, LineField::Free, free)?;
        draft.update_field(id, LineField::Rate, rate)?;
        draft.update_field(id, LineField::Mrp, mrp)?;
        draft.update_field(id, LineField::DiscountPercent, disc)?;
    }

    draft.set_cash_discount_input("50");
    draft.set_due_date("2025-10-28")?;

    Ok(draft)
}

fn print_summary(title: &str, totals: &DerivedTotals, currency: Currency) {
    let money = |amount| Money::new(amount, currency).to_string();

    println!("\n{title}");
    for (label, amount) in [
        ("MRP value", totals.mrp_value),
        ("Sub total", totals.sub_total),
        ("Item discount", -totals.item_discount),
        ("Taxable value", totals.taxable_value),
        ("SGST", totals.sgst),
        ("CGST", totals.cgst),
        ("IGST", totals.igst),
        ("Bill total", totals.bill_total),
        ("Cash discount", -totals.cash_discount),
        ("Wallet / credit", -totals.credit_deducted),
        ("Payable", totals.final_payable),
    ] {
        println!("  {label:<16} {:>12}", money(amount));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_errors_keep_their_code() {
        let err = into_app_error(DraftError::MissingInvoiceNumber.into());
        assert_eq!(err.error_code(), "BUSINESS_RULE_VIOLATION");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_config_errors_exit_with_config_code() {
        let err = into_app_error(AppError::Configuration("sgst_rate".into()).into());
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_untyped_errors_are_internal() {
        let err = into_app_error(anyhow::anyhow!("invalid bill date"));
        assert!(matches!(err, AppError::Internal(ref m) if m == "invalid bill date"));
        assert_eq!(err.exit_code(), 1);
    }
}
