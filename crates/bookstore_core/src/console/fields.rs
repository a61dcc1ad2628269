//! Pure field parsers behind the interactive prompts.
//!
//! Each parser takes one raw input line and either yields a validated value
//! or a `FieldError` describing why the line was rejected. Update variants
//! treat an empty line as `FieldUpdate::Unchanged`.

use crate::model::book::{
    validate_author, validate_book_id, validate_quantity, validate_title, BookId,
    BookValidationError, FieldUpdate,
};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reason a raw input line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NotAnInteger { field: &'static str },
    /// The line was not valid UTF-8.
    NotText,
    /// Update quantities accept ASCII digits only.
    NotDigits,
    Rule(BookValidationError),
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnInteger { field } => {
                write!(f, "Invalid input. Please enter a valid {field}")
            }
            Self::NotText => write!(f, "Input must be readable text"),
            Self::NotDigits => write!(f, "The book quantity must be a positive number"),
            Self::Rule(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FieldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rule(err) => Some(err),
            Self::NotAnInteger { .. } | Self::NotText | Self::NotDigits => None,
        }
    }
}

impl From<BookValidationError> for FieldError {
    fn from(value: BookValidationError) -> Self {
        Self::Rule(value)
    }
}

pub fn parse_book_id(raw: &str) -> Result<BookId, FieldError> {
    let id = raw
        .trim()
        .parse::<BookId>()
        .map_err(|_| FieldError::NotAnInteger { field: "book ID" })?;
    validate_book_id(id)?;
    Ok(id)
}

pub fn parse_title(raw: &str) -> Result<String, FieldError> {
    let title = raw.trim();
    validate_title(title)?;
    Ok(title.to_string())
}

pub fn parse_author(raw: &str) -> Result<String, FieldError> {
    let author = raw.trim();
    validate_author(author)?;
    Ok(author.to_string())
}

pub fn parse_quantity(raw: &str) -> Result<i64, FieldError> {
    let qty = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| FieldError::NotAnInteger {
            field: "book quantity",
        })?;
    validate_quantity(qty)?;
    Ok(qty)
}

pub fn parse_updated_title(raw: &str) -> Result<FieldUpdate<String>, FieldError> {
    let title = raw.trim();
    if title.is_empty() {
        return Ok(FieldUpdate::Unchanged);
    }
    Ok(FieldUpdate::Set(title.to_string()))
}

pub fn parse_updated_author(raw: &str) -> Result<FieldUpdate<String>, FieldError> {
    let author = raw.trim();
    if author.is_empty() {
        return Ok(FieldUpdate::Unchanged);
    }
    validate_author(author)?;
    Ok(FieldUpdate::Set(author.to_string()))
}

/// Accepts an empty line or a run of ASCII digits.
///
/// Signs are rejected, and `0` is a real update to zero stock.
pub fn parse_updated_quantity(raw: &str) -> Result<FieldUpdate<i64>, FieldError> {
    let qty = raw.trim();
    if qty.is_empty() {
        return Ok(FieldUpdate::Unchanged);
    }
    if !qty.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError::NotDigits);
    }
    // digit runs past i64::MAX
    let value = qty.parse::<i64>().map_err(|_| FieldError::NotDigits)?;
    Ok(FieldUpdate::Set(value))
}
