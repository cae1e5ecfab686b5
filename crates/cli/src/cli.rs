//! Command-line interface definitions using clap derive API.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use stockpile_inventory::DEFAULT_LOW_STOCK_THRESHOLD;

/// Single-user inventory tracker
#[derive(Debug, Parser)]
#[command(name = "stockpile")]
#[command(about = "Track item quantities in a JSON-backed inventory")]
#[command(version)]
pub struct Cli {
    /// Inventory file (falls back to STOCKPILE_FILE, then inventory.json)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add stock for an item
    Add {
        /// Item name
        item: String,
        /// Quantity to add
        qty: u64,
    },
    /// Remove stock for an item; asking for more than is on hand removes
    /// what remains
    Remove {
        /// Item name
        item: String,
        /// Quantity to remove
        qty: u64,
    },
    /// Print the quantity on hand for an item
    Qty {
        /// Item name
        item: String,
    },
    /// List items with stock below a threshold
    Low {
        /// Report items strictly below this quantity
        #[arg(long, default_value_t = DEFAULT_LOW_STOCK_THRESHOLD)]
        threshold: u64,
    },
    /// Print the items report
    Report,
    /// Run the scripted walkthrough scenario
    Demo,
}
