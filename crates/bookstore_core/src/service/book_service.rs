//! Book use-case service.
//!
//! # Responsibility
//! - Turn repository calls into explicit use-case outcomes.
//! - Decide conflict, not-found and no-op cases before touching storage.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Service layer remains storage-agnostic.

use crate::model::book::{Book, BookId, BookPatch};
use crate::repo::book_repo::{BookRepository, RepoError, RepoResult};

/// Result of adding a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added(BookId),
    /// A row with this id already exists and was left untouched.
    DuplicateId(BookId),
}

/// Result of a partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Carries the book as stored after the write.
    Updated(Book),
    /// Nothing differed from the stored row; no write was issued.
    NoChanges,
    NotFound(BookId),
}

/// Result of a delete. Both variants are a success for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(BookId),
    NothingToDelete(BookId),
}

/// Use-case service wrapper for book inventory operations.
pub struct BookService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> BookService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn book_exists(&self, id: BookId) -> RepoResult<bool> {
        self.repo.book_exists(id)
    }

    /// Inserts `book` unless its id is already taken.
    pub fn add_book(&self, book: &Book) -> RepoResult<AddOutcome> {
        if self.repo.book_exists(book.id)? {
            return Ok(AddOutcome::DuplicateId(book.id));
        }

        match self.repo.create_book(book) {
            Ok(id) => Ok(AddOutcome::Added(id)),
            Err(RepoError::DuplicateId(id)) => Ok(AddOutcome::DuplicateId(id)),
            Err(err) => Err(err),
        }
    }

    pub fn find_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        self.repo.get_book(id)
    }

    /// Applies the fields of `patch` that differ from the stored row.
    ///
    /// # Contract
    /// - Missing row -> `NotFound`, no write.
    /// - Nothing differs -> `NoChanges`, no write.
    /// - Otherwise one write carrying only the changed fields.
    pub fn update_book(&self, id: BookId, patch: BookPatch) -> RepoResult<UpdateOutcome> {
        let Some(mut current) = self.repo.get_book(id)? else {
            return Ok(UpdateOutcome::NotFound(id));
        };

        let patch = patch.pruned_against(&current);
        if patch.is_empty() {
            return Ok(UpdateOutcome::NoChanges);
        }

        match self.repo.update_book(id, &patch) {
            Ok(()) => {
                patch.apply_to(&mut current);
                Ok(UpdateOutcome::Updated(current))
            }
            Err(RepoError::NotFound(id)) => Ok(UpdateOutcome::NotFound(id)),
            Err(err) => Err(err),
        }
    }

    pub fn delete_book(&self, id: BookId) -> RepoResult<DeleteOutcome> {
        if self.repo.delete_book(id)? {
            Ok(DeleteOutcome::Deleted(id))
        } else {
            Ok(DeleteOutcome::NothingToDelete(id))
        }
    }
}
