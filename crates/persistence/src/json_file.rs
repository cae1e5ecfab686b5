//! JSON-file-backed stock store.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use stockpile_inventory::StockMap;

use crate::store::{StockStore, StockStoreError};

/// Stock store backed by a single JSON file.
///
/// The whole map is read and written in one shot. No locking is performed;
/// external processes racing on the same file are out of scope.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StockStore for JsonFileStore {
    fn load(&self) -> Result<StockMap, StockStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StockStoreError::Missing(self.path.clone()));
            }
            Err(err) => return Err(StockStoreError::Io(err)),
        };

        let stock: StockMap =
            serde_json::from_str(&raw).map_err(|err| StockStoreError::Malformed(err.to_string()))?;

        debug!(path = %self.path.display(), items = stock.len(), "stock loaded");
        Ok(stock)
    }

    fn save(&self, stock: &StockMap) -> Result<(), StockStoreError> {
        // Four-space indentation, matching the established file format.
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        stock.serialize(&mut serializer).map_err(io::Error::from)?;

        fs::write(&self.path, buf)?;
        debug!(path = %self.path.display(), items = stock.len(), "stock saved");
        Ok(())
    }
}
