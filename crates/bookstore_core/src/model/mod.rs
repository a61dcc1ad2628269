//! Bookstore domain model.
//!
//! # Responsibility
//! - Define the canonical `Book` record and its field rules.
//! - Express partial updates without nullable columns.

pub mod book;
