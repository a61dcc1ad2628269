//! Core domain logic for the bookstore inventory manager.
//! This crate is the single source of truth for catalog invariants.

pub mod console;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use console::menu::{Menu, MenuChoice, MenuState, Outcome};
pub use console::prompt::Prompter;
pub use db::{BookStore, DbError, DbResult, DEFAULT_DB_FILE_NAME};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::book::{Book, BookId, BookPatch, BookValidationError, FieldUpdate};
pub use repo::book_repo::{BookRepository, RepoError, RepoResult, SqliteBookRepository};
pub use service::book_service::{AddOutcome, BookService, DeleteOutcome, UpdateOutcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
