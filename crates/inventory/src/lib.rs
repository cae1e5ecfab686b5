//! Inventory domain: the stock map, its mutations, and the session journal.
//!
//! This crate contains the business rules only. Persistence lives in
//! `stockpile-persistence` and console output in the CLI driver.

pub mod journal;
pub mod report;
pub mod store;

pub use journal::{Journal, JournalEntry, StockAction};
pub use report::StockReport;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory, Removal, StockMap};
