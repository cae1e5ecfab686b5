//! Stock store abstraction and the load-recovery policy.

use std::path::PathBuf;

use thiserror::Error;
use tracing::{error, warn};

use stockpile_inventory::StockMap;

/// Stock map storage.
///
/// Loads and saves are whole-map operations; there is no partial update.
pub trait StockStore {
    /// Read the whole stock map.
    fn load(&self) -> Result<StockMap, StockStoreError>;

    /// Overwrite storage with the whole stock map.
    fn save(&self, stock: &StockMap) -> Result<(), StockStoreError>;
}

/// Stock store error.
#[derive(Debug, Error)]
pub enum StockStoreError {
    /// The backing file does not exist yet.
    #[error("stock file not found: {0}")]
    Missing(PathBuf),

    /// The backing file exists but its content is not a valid stock map.
    #[error("could not decode stock file: {0}")]
    Malformed(String),

    /// Any other I/O failure.
    #[error("stock storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load the stock map, recovering locally from an absent or malformed file.
///
/// `Missing` and `Malformed` are substituted with an empty map (and a log
/// line). An `Io` failure is returned to the caller, which decides whether
/// to terminate.
pub fn load_or_empty(store: &dyn StockStore) -> Result<StockMap, StockStoreError> {
    match store.load() {
        Ok(stock) => Ok(stock),
        Err(StockStoreError::Missing(path)) => {
            warn!(
                path = %path.display(),
                "stock file not found, starting with empty inventory"
            );
            Ok(StockMap::new())
        }
        Err(StockStoreError::Malformed(reason)) => {
            error!(
                reason = %reason,
                "could not decode stock file, starting with empty inventory"
            );
            Ok(StockMap::new())
        }
        Err(err @ StockStoreError::Io(_)) => Err(err),
    }
}
