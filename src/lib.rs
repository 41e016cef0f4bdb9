pub mod commands;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

use clap::Parser;
use commands::Cli;
use std::process::ExitCode;
use tracing::error;

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let store = cli.store();
    let _guard = utils::logging::init(store.as_ref().ok().map(|s| s.log_dir()), cli.verbose);

    match store.and_then(|store| commands::execute(&cli, store)) {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            eprintln!("Error: {err}");
            if err.is_validation() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
