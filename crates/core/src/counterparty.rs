//! Customers and suppliers a bill is made out to.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::billing::TaxMode;
use crate::search::Searchable;

/// A retail customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer ID.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Postal address.
    pub address: Option<String>,
    /// Store credit available, if the customer has an account.
    pub credits: Option<Decimal>,
}

impl Searchable for Customer {
    fn search_keys(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.phone.as_str()]
    }
}

/// How a supplier sits in the supply chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplierType {
    /// Distributor or wholesaler.
    Wholesaler,
    /// Direct from the manufacturer.
    Manufacturer,
}

/// Bank details for supplier payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    /// Bank name.
    pub bank_name: String,
    /// Account number.
    pub account_number: String,
    /// IFSC code.
    pub ifsc_code: String,
    /// UPI handle.
    pub upi_id: Option<String>,
}

/// A stock supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    /// Supplier ID.
    pub id: String,
    /// Trading name.
    pub name: String,
    /// Order email.
    pub email: String,
    /// Mobile number.
    pub mobile: String,
    /// Postal address.
    pub address: Option<String>,
    /// Supplier type.
    pub supplier_type: SupplierType,
    /// Drug license number.
    pub drug_license_no: Option<String>,
    /// GST identification number.
    pub gstin: Option<String>,
    /// Bank details.
    pub bank: Option<BankDetails>,
    /// Prepaid wallet balance held with the supplier.
    pub wallet_balance: Option<Decimal>,
}

impl Supplier {
    /// Tax mode for bills from this supplier, given the pharmacy's state.
    ///
    /// A supplier whose address does not mention `home_state` is interstate.
    /// A supplier without an address is treated as local.
    #[must_use]
    pub fn tax_mode(&self, home_state: &str) -> TaxMode {
        let home = home_state.trim().to_lowercase();
        match &self.address {
            Some(address) if !address.to_lowercase().contains(&home) => TaxMode::Interstate,
            _ => TaxMode::Intrastate,
        }
    }

    /// Wallet balance, zero when the supplier has none.
    #[must_use]
    pub fn wallet_or_zero(&self) -> Decimal {
        self.wallet_balance.unwrap_or(Decimal::ZERO)
    }
}

impl Searchable for Supplier {
    fn search_keys(&self) -> Vec<&str> {
        let mut keys = vec![self.name.as_str()];
        if let Some(gstin) = &self.gstin {
            keys.push(gstin.as_str());
        }
        keys
    }
}
