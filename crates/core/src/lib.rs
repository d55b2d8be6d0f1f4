//! Billing logic for the Tapza pharmacy counter.
//!
//! This crate contains pure business logic with ZERO network or storage
//! dependencies. Every record is an in-memory value.
//!
//! # Modules
//!
//! - `billing` - Line amounts, GST split, discounts and wallet/credit deduction
//! - `draft` - Sales and purchase drafts that own a bill in progress
//! - `catalog` - Retail catalog and distributor master list records
//! - `counterparty` - Customers and suppliers
//! - `history` - Saved bills
//! - `search` - Linear substring search
//! - `fixtures` - Mock datasets

pub mod billing;
pub mod catalog;
pub mod counterparty;
pub mod draft;
pub mod fixtures;
pub mod history;
pub mod search;
