//! Driver wiring: configuration, command dispatch, exit-status mapping.
//!
//! Domain errors surface here as console diagnostics and the process carries
//! on; the only error [`run`] returns is an unexpected I/O failure while
//! loading, which the binary turns into a non-zero exit status.

pub mod cli;

use std::path::PathBuf;

use anyhow::Context;
use tracing::{error, info, warn};

use stockpile_core::DomainError;
use stockpile_inventory::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory};
use stockpile_persistence::{StockStore, load_or_empty};

use crate::cli::Commands;

/// Environment variable overriding the default inventory file path.
pub const FILE_ENV_VAR: &str = "STOCKPILE_FILE";

/// Backing file used when neither `--file` nor the environment is set.
pub const DEFAULT_FILE: &str = "inventory.json";

/// Resolve the backing file path: flag, then environment, then default.
pub fn resolve_file(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var(FILE_ENV_VAR).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE))
}

/// Run one CLI invocation against the given store.
pub fn run(command: Commands, store: &dyn StockStore) -> anyhow::Result<()> {
    let stock = load_or_empty(store).context("loading inventory data")?;
    let mut inventory = Inventory::from_stock(stock);

    match command {
        Commands::Add { item, qty } => match inventory.add(&item, qty) {
            Ok(_) => save(store, &inventory),
            Err(err) => warn!(error = %err, "add rejected"),
        },
        Commands::Remove { item, qty } => match inventory.remove(&item, qty) {
            Ok(_) => save(store, &inventory),
            Err(err @ DomainError::NotFound(_)) => info!("{err}, cannot remove"),
            Err(err) => warn!(error = %err, "remove rejected"),
        },
        Commands::Qty { item } => {
            println!("{}", inventory.quantity(&item));
        }
        Commands::Low { threshold } => {
            for item in inventory.low_stock(threshold) {
                println!("{item}");
            }
        }
        Commands::Report => {
            println!("{}", inventory.report());
        }
        Commands::Demo => demo(store, &mut inventory),
    }

    Ok(())
}

/// Persist the stock map, reporting (but surviving) failure.
fn save(store: &dyn StockStore, inventory: &Inventory) {
    if let Err(err) = store.save(inventory.stock()) {
        error!(error = %err, "could not save data");
    }
}

/// The scripted walkthrough: a few adds (one invalid), removals against
/// present and missing items, the queries, the report, a save, and the
/// session journal dump.
fn demo(store: &dyn StockStore, inventory: &mut Inventory) {
    demo_add(inventory, "apple", 10);
    demo_add(inventory, "banana", 5);
    // The typed API cannot be handed a number for a name or a word for a
    // quantity; an empty name is the invalid input that remains expressible.
    demo_add(inventory, "", 10);

    demo_remove(inventory, "apple", 3);
    demo_remove(inventory, "orange", 1);

    println!("\nApple stock: {}", inventory.quantity("apple"));
    let low: Vec<String> = inventory
        .low_stock(DEFAULT_LOW_STOCK_THRESHOLD)
        .into_iter()
        .map(|item| item.to_string())
        .collect();
    println!("Low items: {low:?}");

    println!("{}", inventory.report());
    save(store, inventory);

    println!("\n--- Session Journal ---");
    for entry in inventory.journal() {
        println!("{entry}");
    }

    println!("\nSystem check complete.");
}

fn demo_add(inventory: &mut Inventory, item: &str, qty: u64) {
    if let Err(err) = inventory.add(item, qty) {
        warn!(error = %err, "add rejected");
    }
}

fn demo_remove(inventory: &mut Inventory, item: &str, qty: u64) {
    match inventory.remove(item, qty) {
        Ok(_) => {}
        Err(err @ DomainError::NotFound(_)) => info!("{err}, cannot remove"),
        Err(err) => warn!(error = %err, "remove rejected"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_takes_precedence_over_the_default() {
        let path = resolve_file(Some(PathBuf::from("elsewhere.json")));
        assert_eq!(path, PathBuf::from("elsewhere.json"));
    }

    #[test]
    fn default_applies_when_nothing_is_given() {
        // STOCKPILE_FILE is not set under the test harness.
        if std::env::var(FILE_ENV_VAR).is_err() {
            assert_eq!(resolve_file(None), PathBuf::from(DEFAULT_FILE));
        }
    }
}
