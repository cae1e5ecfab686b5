//! Storage for the stock map.
//!
//! [`StockStore`] abstracts over where the map lives. [`JsonFileStore`] is
//! the real backend (one JSON object, whole-file overwrite per save);
//! [`InMemoryStockStore`] backs tests and dev tooling.

pub mod json_file;
pub mod memory;
pub mod store;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStockStore;
pub use store::{StockStore, StockStoreError, load_or_empty};
