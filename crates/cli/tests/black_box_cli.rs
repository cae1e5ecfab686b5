use std::fs;

use stockpile_cli::cli::Commands;
use stockpile_cli::run;
use stockpile_core::ItemName;
use stockpile_inventory::StockMap;
use stockpile_persistence::{JsonFileStore, StockStore};

struct TestStore {
    // Held so the directory outlives the store.
    _dir: tempfile::TempDir,
    store: JsonFileStore,
}

impl TestStore {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = JsonFileStore::new(dir.path().join("inventory.json"));
        Self { _dir: dir, store }
    }

    fn seed(&self, raw: &str) {
        fs::write(self.store.path(), raw).expect("failed to seed inventory file");
    }

    fn loaded(&self) -> StockMap {
        self.store.load().expect("failed to load inventory file")
    }
}

fn name(s: &str) -> ItemName {
    ItemName::new(s).expect("valid item name")
}

#[test]
fn add_persists_and_accumulates_across_invocations() {
    let ts = TestStore::new();

    run(
        Commands::Add {
            item: "apple".into(),
            qty: 10,
        },
        &ts.store,
    )
    .unwrap();
    run(
        Commands::Add {
            item: "apple".into(),
            qty: 5,
        },
        &ts.store,
    )
    .unwrap();

    assert_eq!(ts.loaded().get(&name("apple")), Some(&15));
}

#[test]
fn clamped_removal_drains_the_item_from_the_file() {
    let ts = TestStore::new();
    ts.seed("{\"apple\": 10}");

    run(
        Commands::Remove {
            item: "apple".into(),
            qty: 20,
        },
        &ts.store,
    )
    .unwrap();

    assert!(ts.loaded().is_empty());
}

#[test]
fn rejected_add_mutates_nothing() {
    let ts = TestStore::new();

    run(
        Commands::Add {
            item: "".into(),
            qty: 10,
        },
        &ts.store,
    )
    .unwrap();

    // Nothing was saved, so the file was never created.
    assert!(!ts.store.path().exists());
}

#[test]
fn removing_a_missing_item_is_survivable() {
    let ts = TestStore::new();

    run(
        Commands::Remove {
            item: "orange".into(),
            qty: 1,
        },
        &ts.store,
    )
    .unwrap();

    assert!(!ts.store.path().exists());
}

#[test]
fn malformed_file_recovers_to_an_empty_inventory() {
    let ts = TestStore::new();
    ts.seed("{broken");

    run(
        Commands::Add {
            item: "banana".into(),
            qty: 5,
        },
        &ts.store,
    )
    .unwrap();

    let stock = ts.loaded();
    assert_eq!(stock.len(), 1);
    assert_eq!(stock.get(&name("banana")), Some(&5));
}

#[test]
fn queries_do_not_create_the_file() {
    let ts = TestStore::new();

    run(
        Commands::Qty {
            item: "apple".into(),
        },
        &ts.store,
    )
    .unwrap();
    run(Commands::Report, &ts.store).unwrap();
    run(Commands::Low { threshold: 5 }, &ts.store).unwrap();

    assert!(!ts.store.path().exists());
}

#[test]
fn unexpected_load_failure_surfaces_as_an_error() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    // A directory is readable as a path but not as a file: not NotFound.
    let store = JsonFileStore::new(dir.path());

    assert!(
        run(
            Commands::Qty {
                item: "apple".into(),
            },
            &store,
        )
        .is_err()
    );
}

#[test]
fn demo_scenario_leaves_the_expected_stock_behind() {
    let ts = TestStore::new();

    run(Commands::Demo, &ts.store).unwrap();

    let stock = ts.loaded();
    assert_eq!(stock.get(&name("apple")), Some(&7));
    assert_eq!(stock.get(&name("banana")), Some(&5));
    assert_eq!(stock.len(), 2);
}
