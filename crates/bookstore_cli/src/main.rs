//! `bookstore` binary entry point.
//!
//! # Responsibility
//! - Resolve configuration and start file logging.
//! - Create and seed the inventory store, then hand stdin/stdout to the menu.
//!
//! # Invariants
//! - Logging problems never stop the program; they only disable logging.
//! - Operation failures are handled inside the menu; only startup and console
//!   I/O failures reach this entry point.

mod config;

use bookstore_core::{init_logging, BookStore, Menu, Prompter};
use config::AppConfig;
use log::{error, info};
use std::error::Error;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=app_exit module=cli status=error error={err}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    let store = BookStore::new(&config.db_path);
    let inserted = store.initialize()?;
    info!(
        "event=store_ready module=cli status=ok path={} seeded={}",
        store.path().display(),
        inserted
    );

    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout());
    Menu::new(&store, prompter).run()?;

    info!("event=app_exit module=cli status=ok");
    Ok(())
}
