//! Book domain model.
//!
//! # Responsibility
//! - Define the single inventory record managed by the bookstore.
//! - Own the field rules shared by storage writes and console input.
//! - Model partial updates as explicit per-field intent.
//!
//! # Invariants
//! - `id` is caller-assigned and never negative.
//! - `title` and `author` are non-empty after trimming.
//! - `author` never contains digit characters.
//! - `qty` is never negative.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

// decimal digits in any script; fractions and numerals like `½`, `Ⅻ` pass
static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Nd}").expect("valid digit regex"));

/// Caller-assigned primary key of a book row.
pub type BookId = i64;

/// Field-level rule violation for a book value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookValidationError {
    NegativeId,
    EmptyTitle,
    EmptyAuthor,
    AuthorContainsDigit,
    NegativeQuantity,
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeId => write!(f, "Book ID must be a positive integer"),
            Self::EmptyTitle => write!(f, "Book title cannot be empty"),
            Self::EmptyAuthor => write!(f, "Author name cannot be empty"),
            Self::AuthorContainsDigit => write!(f, "Author name cannot contain numbers"),
            Self::NegativeQuantity => write!(f, "Book quantity must be a positive integer"),
        }
    }
}

impl Error for BookValidationError {}

/// Inventory record for one catalog title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub qty: i64,
}

impl Book {
    /// Builds a validated book.
    ///
    /// Title and author are stored trimmed.
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        qty: i64,
    ) -> Result<Self, BookValidationError> {
        let title: String = title.into();
        let author: String = author.into();
        let book = Self {
            id,
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            qty,
        };
        book.validate()?;
        Ok(book)
    }

    /// Checks every field rule.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        validate_book_id(self.id)?;
        validate_title(&self.title)?;
        validate_author(&self.author)?;
        validate_quantity(self.qty)?;
        Ok(())
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {} | Title: {} | Author: {} | Qty: {}",
            self.id, self.title, self.author, self.qty
        )
    }
}

pub fn validate_book_id(id: BookId) -> Result<(), BookValidationError> {
    if id < 0 {
        return Err(BookValidationError::NegativeId);
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), BookValidationError> {
    if title.trim().is_empty() {
        return Err(BookValidationError::EmptyTitle);
    }
    Ok(())
}

/// Author names must be non-empty and free of decimal digits, including
/// non-ASCII ones.
pub fn validate_author(author: &str) -> Result<(), BookValidationError> {
    let trimmed = author.trim();
    if trimmed.is_empty() {
        return Err(BookValidationError::EmptyAuthor);
    }
    if DIGIT_RE.is_match(trimmed) {
        return Err(BookValidationError::AuthorContainsDigit);
    }
    Ok(())
}

pub fn validate_quantity(qty: i64) -> Result<(), BookValidationError> {
    if qty < 0 {
        return Err(BookValidationError::NegativeQuantity);
    }
    Ok(())
}

/// Intent for one field of a partial update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    /// Keep the stored value.
    #[default]
    Unchanged,
    /// Replace the stored value.
    Set(T),
}

impl<T> FieldUpdate<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    pub fn as_set(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unchanged => None,
        }
    }
}

impl<T: PartialEq> FieldUpdate<T> {
    fn pruned_against(self, current: &T) -> Self {
        match self {
            Self::Set(value) if value == *current => Self::Unchanged,
            other => other,
        }
    }
}

/// Partial update for an existing book.
///
/// The row identity is not part of the patch; it is passed alongside.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookPatch {
    pub title: FieldUpdate<String>,
    pub author: FieldUpdate<String>,
    pub qty: FieldUpdate<i64>,
}

impl BookPatch {
    /// Returns true when no field would be written.
    pub fn is_empty(&self) -> bool {
        !self.title.is_set() && !self.author.is_set() && !self.qty.is_set()
    }

    /// Checks field rules for every `Set` value.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if let Some(title) = self.title.as_set() {
            validate_title(title)?;
        }
        if let Some(author) = self.author.as_set() {
            validate_author(author)?;
        }
        if let Some(qty) = self.qty.as_set() {
            validate_quantity(*qty)?;
        }
        Ok(())
    }

    /// Drops `Set` values that equal what is already stored.
    pub fn pruned_against(self, current: &Book) -> Self {
        Self {
            title: self.title.pruned_against(&current.title),
            author: self.author.pruned_against(&current.author),
            qty: self.qty.pruned_against(&current.qty),
        }
    }

    /// Applies every `Set` value to `book`.
    pub fn apply_to(&self, book: &mut Book) {
        if let Some(title) = self.title.as_set() {
            book.title = title.clone();
        }
        if let Some(author) = self.author.as_set() {
            book.author = author.clone();
        }
        if let Some(qty) = self.qty.as_set() {
            book.qty = *qty;
        }
    }
}
