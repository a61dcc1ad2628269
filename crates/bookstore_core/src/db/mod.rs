//! SQLite storage bootstrap for the bookstore inventory.
//!
//! # Responsibility
//! - Open and configure SQLite connections.
//! - Create the `book` table when it is absent.
//! - Seed the starter catalog on startup.
//!
//! # Invariants
//! - An existing `book` table is used as-is; no versioning is tracked.
//! - Seeding never duplicates or overwrites an existing row.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
mod seed;
mod store;

pub use open::{open_db, open_db_in_memory};
pub use seed::{seed_books, SEED_BOOKS};
pub use store::{BookStore, DEFAULT_DB_FILE_NAME};

pub type DbResult<T> = Result<T, DbError>;

/// Failure opening, preparing or seeding the inventory database.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "storage error: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
