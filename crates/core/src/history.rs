//! Saved bills shown in the history panel.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::billing::LineItem;
use crate::search::Searchable;

/// Settlement state of a saved bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryStatus {
    /// Settled in full.
    Paid,
    /// Amount still due.
    Pending,
}

/// One line of a saved bill, as shown in the history panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSummary {
    /// Medicine name.
    pub name: String,
    /// Units that moved through stock: billed plus free.
    pub qty: Decimal,
}

impl ItemSummary {
    /// Summarises a bill line for the history panel.
    #[must_use]
    pub fn from_line(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            qty: item.qty.saturating_add(item.free),
        }
    }
}

/// A saved sales bill or purchase invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Record ID.
    pub id: String,
    /// Bill or invoice number.
    pub bill_no: String,
    /// Date as displayed.
    pub date: String,
    /// Amount payable on the bill.
    pub amount: Decimal,
    /// Settlement state.
    pub status: HistoryStatus,
    /// Line summaries.
    pub items: Vec<ItemSummary>,
}

impl Searchable for HistoryRecord {
    fn search_keys(&self) -> Vec<&str> {
        vec![self.bill_no.as_str()]
    }
}

/// In-memory list of saved bills, oldest first.
#[derive(Debug, Clone, Default)]
pub struct HistoryBook {
    records: Vec<HistoryRecord>,
}

impl HistoryBook {
    /// Creates a book from existing records, oldest first.
    #[must_use]
    pub fn new(records: Vec<HistoryRecord>) -> Self {
        Self { records }
    }

    /// Appends a newly saved bill.
    pub fn record(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    /// Newest bills first, as the panel lists them.
    pub fn recent(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter().rev()
    }

    /// Finds a bill by its number.
    #[must_use]
    pub fn find(&self, bill_no: &str) -> Option<&HistoryRecord> {
        self.records.iter().find(|r| r.bill_no == bill_no)
    }

    /// Total still due across pending bills.
    #[must_use]
    pub fn pending_total(&self) -> Decimal {
        self.records
            .iter()
            .filter(|r| r.status == HistoryStatus::Pending)
            .map(|r| r.amount)
            .sum()
    }

    /// Number of saved bills.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::search::SearchFilter;
    use rust_decimal_macros::dec;

    #[test]
    fn test_recent_lists_newest_first() {
        let book = HistoryBook::new(fixtures::sales_history());
        let numbers: Vec<_> = book.recent().map(|r| r.bill_no.as_str()).collect();
        assert_eq!(numbers, ["A000101", "A000100", "A000099"]);
    }

    #[test]
    fn test_search_by_bill_number() {
        let records = fixtures::sales_history();
        let hits = SearchFilter::new("a00010").apply(&records);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_pending_total() {
        let book = HistoryBook::new(fixtures::sales_history());
        assert_eq!(book.pending_total(), dec!(1200.00));
    }

    #[test]
    fn test_record_and_find() {
        let mut book = HistoryBook::default();
        assert!(book.is_empty());

        book.record(HistoryRecord {
            id: "P002".into(),
            bill_no: "PUR-2025-002".into(),
            date: "2025-09-28".into(),
            amount: dec!(980.50),
            status: HistoryStatus::Pending,
            items: vec![ItemSummary {
                name: "Amoxyclav 625".into(),
                qty: dec!(10),
            }],
        });

        assert_eq!(book.len(), 1);
        assert_eq!(book.find("PUR-2025-002").unwrap().amount, dec!(980.50));
        assert!(book.find("PUR-2025-001").is_none());
    }
}
