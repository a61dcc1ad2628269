//! Book repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide point CRUD over the `book` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths validate before issuing SQL.
//! - Every write is a single statement, so SQLite autocommit makes it atomic.
//! - Read paths reject invalid persisted rows instead of masking them.

use crate::db::DbError;
use crate::model::book::{Book, BookId, BookPatch, BookValidationError, FieldUpdate};
use log::{debug, info};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, ErrorCode, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const BOOK_SELECT_SQL: &str = "SELECT id, title, author, qty FROM book";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for book persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(BookValidationError),
    Db(DbError),
    DuplicateId(BookId),
    NotFound(BookId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "a book with id {id} already exists"),
            Self::NotFound(id) => write!(f, "book not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted book data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::DuplicateId(_) | Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<BookValidationError> for RepoError {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for book CRUD operations.
pub trait BookRepository {
    fn create_book(&self, book: &Book) -> RepoResult<BookId>;
    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>>;
    fn book_exists(&self, id: BookId) -> RepoResult<bool>;
    /// Writes every `Set` field of `patch` in one statement.
    ///
    /// An empty patch is rejected by callers before reaching storage.
    fn update_book(&self, id: BookId, patch: &BookPatch) -> RepoResult<()>;
    /// Returns whether a row was actually removed.
    fn delete_book(&self, id: BookId) -> RepoResult<bool>;
}

/// SQLite-backed book repository.
pub struct SqliteBookRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BookRepository for SqliteBookRepository<'_> {
    fn create_book(&self, book: &Book) -> RepoResult<BookId> {
        book.validate()?;

        let result = self.conn.execute(
            "INSERT INTO book (id, title, author, qty) VALUES (?1, ?2, ?3, ?4);",
            params![book.id, book.title.as_str(), book.author.as_str(), book.qty],
        );

        match result {
            Ok(_) => {
                info!("event=book_create module=repo status=ok id={}", book.id);
                Ok(book.id)
            }
            Err(err) if is_primary_key_violation(&err) => Err(RepoError::DuplicateId(book.id)),
            Err(err) => Err(err.into()),
        }
    }

    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        let found = match rows.next()? {
            Some(row) => Some(parse_book_row(row)?),
            None => None,
        };

        debug!(
            "event=book_get module=repo status=ok id={} found={}",
            id,
            found.is_some()
        );
        Ok(found)
    }

    fn book_exists(&self, id: BookId) -> RepoResult<bool> {
        let exists = self
            .conn
            .query_row("SELECT 1 FROM book WHERE id = ?1;", [id], |_| Ok(()))
            .optional()?
            .is_some();
        Ok(exists)
    }

    fn update_book(&self, id: BookId, patch: &BookPatch) -> RepoResult<()> {
        patch.validate()?;

        let mut assignments: Vec<&str> = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();

        if let FieldUpdate::Set(title) = &patch.title {
            assignments.push("title = ?");
            bind_values.push(Value::Text(title.clone()));
        }
        if let FieldUpdate::Set(author) = &patch.author {
            assignments.push("author = ?");
            bind_values.push(Value::Text(author.clone()));
        }
        if let FieldUpdate::Set(qty) = &patch.qty {
            assignments.push("qty = ?");
            bind_values.push(Value::Integer(*qty));
        }

        if assignments.is_empty() {
            return Err(RepoError::InvalidData(format!(
                "update for book {id} has no fields to write"
            )));
        }

        let sql = format!("UPDATE book SET {} WHERE id = ?;", assignments.join(", "));
        bind_values.push(Value::Integer(id));

        let changed = self.conn.execute(&sql, params_from_iter(bind_values))?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        info!(
            "event=book_update module=repo status=ok id={} fields={}",
            id,
            assignments.len()
        );
        Ok(())
    }

    fn delete_book(&self, id: BookId) -> RepoResult<bool> {
        let changed = self.conn.execute("DELETE FROM book WHERE id = ?1;", [id])?;
        info!(
            "event=book_delete module=repo status=ok id={} removed={}",
            id, changed
        );
        Ok(changed > 0)
    }
}

fn parse_book_row(row: &Row<'_>) -> RepoResult<Book> {
    let book = Book {
        id: row.get("id")?,
        title: row.get("title")?,
        author: row.get("author")?,
        qty: row.get("qty")?,
    };
    book.validate().map_err(|err| {
        RepoError::InvalidData(format!("row {} in book violates field rules: {err}", book.id))
    })?;
    Ok(book)
}

fn is_primary_key_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation
                && failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}
