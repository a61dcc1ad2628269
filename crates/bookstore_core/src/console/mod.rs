//! Interactive console front end.
//!
//! # Responsibility
//! - Read and validate field input line by line (`fields`, `prompt`).
//! - Drive the add/update/delete/search menu (`menu`).
//!
//! # Invariants
//! - Validation errors are recovered locally by re-prompting.
//! - Only I/O failures on the console itself escape `Menu::run`.

pub mod fields;
pub mod menu;
pub mod prompt;
