//! Menu loop and record operations.
//!
//! # Responsibility
//! - Dispatch menu choices to add/update/delete/search.
//! - Render operation outcomes back to the user.
//!
//! # Invariants
//! - Each record operation opens its own connection and drops it before
//!   returning; no connection is open while waiting for input.
//! - Storage failures end the current operation only; the loop continues.
//! - The loop ends on choice `0` or when input is closed.

use super::prompt::Prompter;
use crate::db::BookStore;
use crate::model::book::{Book, BookId, BookPatch};
use crate::repo::book_repo::{RepoError, RepoResult, SqliteBookRepository};
use crate::service::book_service::{AddOutcome, BookService, DeleteOutcome, UpdateOutcome};
use log::{error, info};
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

const MENU_TEXT: &str = "\nBookstore Management System\n\
1. Enter book\n\
2. Update book\n\
3. Delete book\n\
4. Search books\n\
0. Exit";
const FAREWELL: &str = "Exiting the program. Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    UpdateBook,
    DeleteBook,
    SearchBook,
    Exit,
}

impl MenuChoice {
    /// Maps a typed menu line to a choice.
    pub fn parse(input: &str) -> Option<Self> {
        // trimmed, so " 1 " selects add where an exact match would reject it
        match input.trim() {
            "1" => Some(Self::AddBook),
            "2" => Some(Self::UpdateBook),
            "3" => Some(Self::DeleteBook),
            "4" => Some(Self::SearchBook),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::AddBook => "add",
            Self::UpdateBook => "update",
            Self::DeleteBook => "delete",
            Self::SearchBook => "search",
            Self::Exit => "exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Exiting,
}

/// User-facing result of one record operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(BookId),
    DuplicateId(BookId),
    Found(Book),
    NotFound(BookId),
    Updated(Book),
    NoChanges,
    Deleted(BookId),
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Added(_) => write!(f, "Book added successfully!"),
            Self::DuplicateId(_) => write!(
                f,
                "A book with this ID already exists. Please use a unique ID."
            ),
            Self::Found(book) => write!(f, "Book found: {book}"),
            Self::NotFound(_) => write!(f, "Book not found."),
            Self::Updated(book) => write!(f, "Book updated successfully!\nNow: {book}"),
            Self::NoChanges => write!(f, "No changes were made."),
            Self::Deleted(_) => write!(f, "Book deleted successfully!"),
        }
    }
}

#[derive(Debug)]
enum OperationError {
    Input(io::Error),
    Storage(RepoError),
}

impl From<io::Error> for OperationError {
    fn from(value: io::Error) -> Self {
        Self::Input(value)
    }
}

impl From<RepoError> for OperationError {
    fn from(value: RepoError) -> Self {
        Self::Storage(value)
    }
}

type OperationResult = Result<Outcome, OperationError>;

/// Interactive session over one store.
pub struct Menu<'store, R, W> {
    store: &'store BookStore,
    prompter: Prompter<R, W>,
}

impl<'store, R: BufRead, W: Write> Menu<'store, R, W> {
    pub fn new(store: &'store BookStore, prompter: Prompter<R, W>) -> Self {
        Self { store, prompter }
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Runs until the user exits or input is closed.
    ///
    /// # Errors
    /// - Returns I/O errors other than end of input.
    pub fn run(&mut self) -> io::Result<()> {
        info!("event=menu_start module=console status=ok");
        let mut state = MenuState::Running;
        while state == MenuState::Running {
            state = match self.step() {
                Ok(next) => next,
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                    info!("event=menu_exit module=console status=ok reason=input_closed");
                    self.prompter.say("")?;
                    self.prompter.say(FAREWELL)?;
                    MenuState::Exiting
                }
                Err(err) => return Err(err),
            };
        }
        Ok(())
    }

    /// Shows the menu, reads one choice and performs it.
    pub fn step(&mut self) -> io::Result<MenuState> {
        self.prompter.say(MENU_TEXT)?;
        let line = self.prompter.read_line("Enter your choice: ")?;

        let Some(choice) = line.as_deref().and_then(MenuChoice::parse) else {
            self.prompter.say("Invalid choice. Please try again.")?;
            return Ok(MenuState::Running);
        };
        info!(
            "event=menu_dispatch module=console choice={}",
            choice.label()
        );

        let result = match choice {
            MenuChoice::AddBook => self.add_book(),
            MenuChoice::UpdateBook => self.update_book(),
            MenuChoice::DeleteBook => self.delete_book(),
            MenuChoice::SearchBook => self.search_book(),
            MenuChoice::Exit => {
                info!("event=menu_exit module=console status=ok reason=user_choice");
                self.prompter.say(FAREWELL)?;
                return Ok(MenuState::Exiting);
            }
        };

        match result {
            Ok(outcome) => self.prompter.say(outcome)?,
            Err(OperationError::Storage(err)) => {
                error!(
                    "event=operation_failed module=console status=error choice={} error={}",
                    choice.label(),
                    err
                );
                self.prompter.say(format_args!("Error: {err}"))?;
            }
            Err(OperationError::Input(err)) => return Err(err),
        }
        Ok(MenuState::Running)
    }

    fn add_book(&mut self) -> OperationResult {
        let id = self.prompter.book_id("Enter book ID: ")?;
        if with_book_service(self.store, |service| service.book_exists(id))? {
            return Ok(Outcome::DuplicateId(id));
        }

        let title = self.prompter.title()?;
        let author = self.prompter.author()?;
        let qty = self.prompter.quantity()?;
        let book = Book::new(id, title, author, qty).map_err(RepoError::from)?;

        match with_book_service(self.store, |service| service.add_book(&book))? {
            AddOutcome::Added(id) => Ok(Outcome::Added(id)),
            AddOutcome::DuplicateId(id) => Ok(Outcome::DuplicateId(id)),
        }
    }

    fn search_book(&mut self) -> OperationResult {
        let id = self.prompter.book_id("Enter book ID to search: ")?;
        match with_book_service(self.store, |service| service.find_book(id))? {
            Some(book) => Ok(Outcome::Found(book)),
            None => Ok(Outcome::NotFound(id)),
        }
    }

    fn update_book(&mut self) -> OperationResult {
        let id = self.prompter.book_id("Enter book ID to update: ")?;
        let Some(current) = with_book_service(self.store, |service| service.find_book(id))? else {
            return Ok(Outcome::NotFound(id));
        };
        self.prompter
            .say(format_args!("Current book details: {current}"))?;

        let patch = BookPatch {
            title: self.prompter.updated_title()?,
            author: self.prompter.updated_author()?,
            qty: self.prompter.updated_quantity()?,
        };

        match with_book_service(self.store, |service| service.update_book(id, patch))? {
            UpdateOutcome::Updated(book) => Ok(Outcome::Updated(book)),
            UpdateOutcome::NoChanges => Ok(Outcome::NoChanges),
            UpdateOutcome::NotFound(id) => Ok(Outcome::NotFound(id)),
        }
    }

    fn delete_book(&mut self) -> OperationResult {
        let id = self.prompter.book_id("Enter book ID to delete: ")?;
        match with_book_service(self.store, |service| service.delete_book(id))? {
            DeleteOutcome::Deleted(id) | DeleteOutcome::NothingToDelete(id) => {
                Ok(Outcome::Deleted(id))
            }
        }
    }
}

/// Opens a connection, runs `f` against a service over it, then closes it.
fn with_book_service<T>(
    store: &BookStore,
    f: impl FnOnce(&BookService<SqliteBookRepository<'_>>) -> RepoResult<T>,
) -> RepoResult<T> {
    let conn = store.connect()?;
    let service = BookService::new(SqliteBookRepository::new(&conn));
    f(&service)
}

#[cfg(test)]
mod tests {
    use super::{MenuChoice, Outcome};
    use crate::model::book::Book;

    #[test]
    fn menu_choice_parses_known_keys_only() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddBook));
        assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::SearchBook));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn found_outcome_renders_full_row() {
        let book = Book::new(3001, "A Tale of Two Cities", "Charles Dickens", 30).unwrap();
        let rendered = Outcome::Found(book).to_string();
        assert!(rendered.starts_with("Book found: "));
        assert!(rendered.contains("3001"));
        assert!(rendered.contains("Charles Dickens"));
        assert!(rendered.contains("Qty: 30"));
    }
}
