//! `stockpile` entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use stockpile_cli::cli::Cli;
use stockpile_cli::{resolve_file, run};
use stockpile_persistence::JsonFileStore;

fn main() -> ExitCode {
    stockpile_observability::init();

    let args = Cli::parse();
    let store = JsonFileStore::new(resolve_file(args.file));

    match run(args.command, &store) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // The one fatal path: an unexpected error while loading data.
            error!(error = ?err, "an unexpected error occurred loading data");
            ExitCode::FAILURE
        }
    }
}
