//! The inventory store: validated mutations over the stock map.

use std::collections::BTreeMap;

use tracing::{info, warn};

use stockpile_core::{DomainError, DomainResult, ItemName};

use crate::journal::{Journal, JournalEntry, StockAction};
use crate::report::StockReport;

/// Item-to-quantity mapping.
///
/// Sorted by name, so low-stock listings and reports come out in a
/// deterministic order.
pub type StockMap = BTreeMap<ItemName, u64>;

/// Threshold applied by callers that do not supply one.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 5;

/// Outcome of a successful removal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Removal {
    /// Quantity the caller asked for.
    pub requested: u64,
    /// Quantity actually removed (clamped to what was on hand).
    pub removed: u64,
    /// Quantity left after the removal.
    pub remaining: u64,
    /// True when `requested` exceeded available stock.
    pub clamped: bool,
    /// True when the removal emptied the item and its key was deleted.
    pub drained: bool,
}

/// The inventory store.
///
/// Owns the stock map and the session journal. All mutations go through
/// [`Inventory::add`] and [`Inventory::remove`], which uphold the invariant
/// that no zero-quantity entry exists in the map.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    stock: StockMap,
    journal: Journal,
}

impl Inventory {
    /// Empty inventory with an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory from a previously persisted stock map.
    ///
    /// Zero-quantity entries are dropped so the invariant holds even for
    /// hand-edited files. The journal starts empty: it records this session's
    /// mutations, not history.
    pub fn from_stock(mut stock: StockMap) -> Self {
        stock.retain(|item, qty| {
            if *qty == 0 {
                warn!(item = %item, "dropping zero-quantity entry from loaded stock");
            }
            *qty > 0
        });
        Self {
            stock,
            journal: Journal::new(),
        }
    }

    /// Add `qty` units of `item`, creating the entry if absent.
    ///
    /// Returns the quantity on hand after the addition. Adding zero is valid
    /// (and journaled) but never materializes a zero-quantity entry.
    pub fn add(&mut self, item: &str, qty: u64) -> DomainResult<u64> {
        let item = ItemName::new(item)?;

        let on_hand = self
            .stock
            .get(&item)
            .copied()
            .unwrap_or(0)
            .saturating_add(qty);
        if on_hand > 0 {
            self.stock.insert(item.clone(), on_hand);
        }

        info!(item = %item, qty, on_hand, "stock added");
        self.journal
            .append(JournalEntry::record(StockAction::Added, item, qty, false));
        Ok(on_hand)
    }

    /// Remove `qty` units of `item`.
    ///
    /// A request for more than is on hand removes what remains (clamped
    /// removal, reported in the outcome rather than treated as a failure).
    /// Draining an item to zero deletes its key.
    pub fn remove(&mut self, item: &str, qty: u64) -> DomainResult<Removal> {
        let item = ItemName::new(item)?;
        let Some(available) = self.stock.get(&item).copied() else {
            return Err(DomainError::not_found(item.as_str()));
        };

        let removed = if qty > available {
            warn!(
                item = %item,
                requested = qty,
                available,
                "not enough stock, removing what remains"
            );
            available
        } else {
            qty
        };
        let remaining = available - removed;

        let drained = remaining == 0;
        if drained {
            self.stock.remove(&item);
        } else {
            self.stock.insert(item.clone(), remaining);
        }

        info!(item = %item, removed, remaining, "stock removed");
        self.journal.append(JournalEntry::record(
            StockAction::Removed,
            item,
            removed,
            drained,
        ));

        Ok(Removal {
            requested: qty,
            removed,
            remaining,
            clamped: removed < qty,
            drained,
        })
    }

    /// Quantity on hand, or 0 when the item is absent.
    pub fn quantity(&self, item: &str) -> u64 {
        ItemName::new(item)
            .ok()
            .and_then(|item| self.stock.get(&item).copied())
            .unwrap_or(0)
    }

    /// Item names with quantity strictly below `threshold`, sorted by name.
    pub fn low_stock(&self, threshold: u64) -> Vec<ItemName> {
        self.stock
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }

    /// Formatted listing of every item and quantity.
    pub fn report(&self) -> StockReport<'_> {
        StockReport::new(&self.stock)
    }

    pub fn stock(&self) -> &StockMap {
        &self.stock
    }

    /// This session's mutation journal, in insertion order.
    pub fn journal(&self) -> &[JournalEntry] {
        self.journal.entries()
    }

    /// Number of distinct items on hand.
    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }
}
