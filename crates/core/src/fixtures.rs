//! Mock data standing in for the catalog and counterparty services.
//!
//! Every list is rebuilt on each call so callers own their copy.

use rust_decimal::Decimal;

use crate::billing::GstRates;
use crate::catalog::{MasterMedicine, Medicine};
use crate::counterparty::{BankDetails, Customer, Supplier, SupplierType};
use crate::history::{HistoryRecord, HistoryStatus, ItemSummary};

fn whole(n: i64) -> Decimal {
    Decimal::from(n)
}

#[allow(clippy::too_many_arguments)]
fn medicine(
    id: &str,
    name: &str,
    (batch, expiry): (&str, &str),
    (pack, strip, free): (u32, u32, i64),
    (mrp, price, disc, gst): (i64, i64, i64, i64),
    salt: &str,
    manufacturer: &str,
    category: &str,
    stock: u32,
) -> Medicine {
    Medicine {
        id: id.to_string(),
        name: name.to_string(),
        batch: batch.to_string(),
        expiry: expiry.to_string(),
        pack,
        strip,
        tab: 1,
        free: whole(free),
        mrp: whole(mrp),
        price: whole(price),
        disc: whole(disc),
        gst: whole(gst),
        salt: salt.to_string(),
        manufacturer: manufacturer.to_string(),
        category: category.to_string(),
        stock,
    }
}

/// Retail catalog.
#[must_use]
pub fn retail_medicines() -> Vec<Medicine> {
    vec![
        medicine(
            "1",
            "Paracetamol 500mg",
            ("B2023", "12/27"),
            (10, 10, 0),
            (20, 15, 0, 12),
            "Paracetamol IP 500mg",
            "GSK Pharmaceuticals",
            "Analgesic",
            240,
        ),
        medicine(
            "2",
            "Amoxyclav 625",
            ("A9921", "10/25"),
            (6, 1, 0),
            (120, 105, 5, 18),
            "Amoxicillin 500mg + Clavulanic Acid 125mg",
            "Sun Pharma",
            "Antibiotic",
            50,
        ),
        medicine(
            "3",
            "Pantop 40",
            ("P442", "05/26"),
            (15, 1, 1),
            (140, 110, 0, 12),
            "Pantoprazole 40mg",
            "Aristo Pharma",
            "Antacid",
            120,
        ),
        medicine(
            "4",
            "Dolo 650",
            ("D001", "01/26"),
            (15, 1, 0),
            (35, 28, 2, 12),
            "Paracetamol IP 650mg",
            "Micro Labs",
            "Analgesic",
            400,
        ),
        medicine(
            "5",
            "Montair LC",
            ("M882", "09/25"),
            (10, 1, 0),
            (180, 150, 10, 18),
            "Montelukast 10mg + Levocetirizine 5mg",
            "Cipla",
            "Anti-Allergic",
            85,
        ),
    ]
}

/// Distributor master list for purchase entry.
#[must_use]
pub fn master_medicines() -> Vec<MasterMedicine> {
    vec![
        MasterMedicine {
            record_id: "693dc24fa4519ca048c03c87".to_string(),
            medicine_id: "MED000000004".to_string(),
            name: "Dolo 650".to_string(),
            manufacturer: "Micro Labs Limited".to_string(),
            salt: "Paracetamol 650mg".to_string(),
            hsn_code: "30049099".to_string(),
            gst: GstRates::new(whole(6), whole(6), whole(12)),
            unit_per_pack: 10,
            packing_type: "STRIP".to_string(),
        },
        MasterMedicine {
            record_id: "693dc24fa4519ca048c03c88".to_string(),
            medicine_id: "MED000000005".to_string(),
            name: "Amoxyclav 625".to_string(),
            manufacturer: "Sun Pharma".to_string(),
            salt: "Amoxicillin + Clavulanic Acid".to_string(),
            hsn_code: "30049000".to_string(),
            gst: GstRates::new(whole(9), whole(9), whole(18)),
            unit_per_pack: 6,
            packing_type: "STRIP".to_string(),
        },
    ]
}

/// Registered suppliers.
#[must_use]
pub fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: "S001".to_string(),
            name: "Apollo Pharmacy Distributors".to_string(),
            email: "orders@apollo.com".to_string(),
            mobile: "9876543210".to_string(),
            address: Some("Plot 45, Ind. Area, Hyderabad".to_string()),
            supplier_type: SupplierType::Wholesaler,
            drug_license_no: Some("TG/20B/1234".to_string()),
            gstin: Some("36ABCDE1234F1Z5".to_string()),
            bank: Some(BankDetails {
                bank_name: "HDFC Bank".to_string(),
                account_number: "50100234567890".to_string(),
                ifsc_code: "HDFC0001234".to_string(),
                upi_id: Some("apollo@hdfcbank".to_string()),
            }),
            wallet_balance: Some(whole(2500)),
        },
        Supplier {
            id: "S002".to_string(),
            name: "Sun Pharma Agencies".to_string(),
            email: "sales@sunpharma.com".to_string(),
            mobile: "8877665544".to_string(),
            address: Some("Koti, Hyderabad, Telangana".to_string()),
            supplier_type: SupplierType::Manufacturer,
            drug_license_no: Some("TG/21B/5678".to_string()),
            gstin: Some("36XYZDE9876F1Z5".to_string()),
            bank: Some(BankDetails {
                bank_name: "SBI".to_string(),
                account_number: "30201040506".to_string(),
                ifsc_code: "SBIN0004567".to_string(),
                upi_id: Some("sunpharma@sbi".to_string()),
            }),
            wallet_balance: Some(Decimal::ZERO),
        },
    ]
}

/// Walk-in customers with accounts.
#[must_use]
pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "C001".to_string(),
            name: "Ravi Kumar".to_string(),
            phone: "9848012345".to_string(),
            address: Some("Ameerpet, Hyderabad, Telangana".to_string()),
            credits: Some(Decimal::new(15_000, 2)),
        },
        Customer {
            id: "C002".to_string(),
            name: "Lakshmi Devi".to_string(),
            phone: "9000011122".to_string(),
            address: None,
            credits: None,
        },
    ]
}

fn summary(name: &str, qty: i64) -> ItemSummary {
    ItemSummary {
        name: name.to_string(),
        qty: whole(qty),
    }
}

/// Recent retail bills, oldest first.
#[must_use]
pub fn sales_history() -> Vec<HistoryRecord> {
    vec![
        HistoryRecord {
            id: "A000099".to_string(),
            bill_no: "A000099".to_string(),
            date: "Yesterday".to_string(),
            amount: Decimal::new(120_000, 2),
            status: HistoryStatus::Pending,
            items: vec![summary("Shelcal 500", 30)],
        },
        HistoryRecord {
            id: "A000100".to_string(),
            bill_no: "A000100".to_string(),
            date: "Today, 09:15 AM".to_string(),
            amount: Decimal::new(45_050, 2),
            status: HistoryStatus::Paid,
            items: vec![summary("Azithral 500", 3), summary("Limcee", 2)],
        },
        HistoryRecord {
            id: "A000101".to_string(),
            bill_no: "A000101".to_string(),
            date: "Today, 10:42 AM".to_string(),
            amount: Decimal::new(12_000, 2),
            status: HistoryStatus::Paid,
            items: vec![summary("Dolo 650", 8)],
        },
    ]
}

/// Recent purchase invoices, oldest first.
#[must_use]
pub fn purchase_history() -> Vec<HistoryRecord> {
    vec![HistoryRecord {
        id: "P001".to_string(),
        bill_no: "PUR-2025-001".to_string(),
        date: "2025-09-20".to_string(),
        amount: Decimal::new(1_540_000, 2),
        status: HistoryStatus::Paid,
        items: vec![summary("Dolo 650", 500)],
    }]
}
