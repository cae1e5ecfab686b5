//! In-memory stock store.

use std::io;
use std::path::PathBuf;
use std::sync::RwLock;

use stockpile_inventory::StockMap;

use crate::store::{StockStore, StockStoreError};

/// Stock store held entirely in memory.
///
/// Intended for tests/dev. Mirrors the file store's semantics: loading
/// before anything was saved behaves like a missing file.
#[derive(Debug, Default)]
pub struct InMemoryStockStore {
    stock: RwLock<Option<StockMap>>,
}

impl InMemoryStockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the store, as if a file already existed.
    pub fn with_stock(stock: StockMap) -> Self {
        Self {
            stock: RwLock::new(Some(stock)),
        }
    }
}

impl StockStore for InMemoryStockStore {
    fn load(&self) -> Result<StockMap, StockStoreError> {
        let guard = self.stock.read().map_err(|_| poisoned())?;
        match guard.as_ref() {
            Some(stock) => Ok(stock.clone()),
            None => Err(StockStoreError::Missing(PathBuf::from("<in-memory>"))),
        }
    }

    fn save(&self, stock: &StockMap) -> Result<(), StockStoreError> {
        let mut guard = self.stock.write().map_err(|_| poisoned())?;
        *guard = Some(stock.clone());
        Ok(())
    }
}

fn poisoned() -> StockStoreError {
    StockStoreError::Io(io::Error::other("lock poisoned"))
}
