//! In-memory journal of stock mutations.
//!
//! Entries are facts: immutable, append-only, insertion-ordered. The journal
//! lives for the process only; nothing persists it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use stockpile_core::ItemName;

/// What a journal entry records.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StockAction {
    Added,
    Removed,
}

impl StockAction {
    fn verb(self) -> &'static str {
        match self {
            StockAction::Added => "Added",
            StockAction::Removed => "Removed",
        }
    }
}

/// One successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    pub entry_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub action: StockAction,
    pub item: ItemName,
    /// Quantity actually applied (for removals, after clamping).
    pub qty: u64,
    /// Set when a removal drained the item and its key was deleted.
    pub drained: bool,
}

impl JournalEntry {
    pub(crate) fn record(action: StockAction, item: ItemName, qty: u64, drained: bool) -> Self {
        Self {
            entry_id: Uuid::now_v7(),
            occurred_at: Utc::now(),
            action,
            item,
            qty,
            drained,
        }
    }
}

impl core::fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: {} {} of {}",
            self.occurred_at,
            self.action.verb(),
            self.qty,
            self.item
        )?;
        if self.drained {
            write!(f, ". Item '{}' removed from stock.", self.item)?;
        }
        Ok(())
    }
}

/// Append-only sequence of journal entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
