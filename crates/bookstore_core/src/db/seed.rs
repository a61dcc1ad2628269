//! Starter catalog inserted on startup.

use super::DbResult;
use log::info;
use rusqlite::{params, Connection};

/// Fixed starter rows as `(id, title, author, qty)`.
pub const SEED_BOOKS: [(i64, &str, &str, i64); 5] = [
    (3001, "A Tale of Two Cities", "Charles Dickens", 30),
    (
        3002,
        "Harry Potter and the Philosopher's Stone",
        "J.K. Rowling",
        40,
    ),
    (3003, "The Lion, the Witch and the Wardrobe", "C. S. Lewis", 25),
    (3004, "The Lord of the Rings", "J.R.R Tolkien", 37),
    (3005, "Alice in Wonderland", "Lewis Carroll", 12),
];

/// Inserts every seed row whose id is not present yet.
///
/// Returns the number of rows actually inserted. Existing rows, including
/// ones edited by the user, are left untouched.
pub fn seed_books(conn: &mut Connection) -> DbResult<usize> {
    let tx = conn.transaction()?;
    let mut inserted = 0;
    {
        let mut stmt = tx.prepare(
            "INSERT OR IGNORE INTO book (id, title, author, qty) VALUES (?1, ?2, ?3, ?4);",
        )?;
        for (id, title, author, qty) in SEED_BOOKS {
            inserted += stmt.execute(params![id, title, author, qty])?;
        }
    }
    tx.commit()?;

    info!(
        "event=db_seed module=db status=ok inserted={} total={}",
        inserted,
        SEED_BOOKS.len()
    );
    Ok(inserted)
}
