//! File-backed store handle.
//!
//! # Responsibility
//! - Remember where the inventory database lives.
//! - Hand out short-lived connections, one per record operation.
//!
//! # Invariants
//! - `initialize` is the only path that seeds data.
//! - Connections are owned by the caller and closed when dropped.

use super::{open_db, seed_books, DbResult};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Database file used when no path is configured.
pub const DEFAULT_DB_FILE_NAME: &str = "ebookstore.db";

#[derive(Debug, Clone)]
pub struct BookStore {
    path: PathBuf,
}

impl BookStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensures the table exists and the seed rows are present.
    ///
    /// Returns how many seed rows were newly inserted.
    pub fn initialize(&self) -> DbResult<usize> {
        let mut conn = open_db(&self.path)?;
        seed_books(&mut conn)
    }

    /// Opens a fresh connection without seeding.
    pub fn connect(&self) -> DbResult<Connection> {
        open_db(&self.path)
    }
}
