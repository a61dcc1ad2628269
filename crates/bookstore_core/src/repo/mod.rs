//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes enforce `Book` field rules before persistence.
//! - Repository APIs return semantic errors (`DuplicateId`, `NotFound`) in
//!   addition to DB transport errors.

pub mod book_repo;
