use bookstore_core::db::{open_db_in_memory, seed_books};
use bookstore_core::{
    AddOutcome, Book, BookPatch, BookRepository, BookService, DeleteOutcome, FieldUpdate,
    RepoError, SqliteBookRepository, UpdateOutcome,
};
use rusqlite::Connection;

fn seeded() -> Connection {
    let mut conn = open_db_in_memory().unwrap();
    seed_books(&mut conn).unwrap();
    conn
}

fn dune() -> Book {
    Book::new(9000, "Dune", "Frank Herbert", 5).unwrap()
}

#[test]
fn create_then_get_returns_same_tuple() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let id = repo.create_book(&dune()).unwrap();
    assert_eq!(id, 9000);
    assert_eq!(repo.get_book(9000).unwrap(), Some(dune()));
    assert!(repo.book_exists(9000).unwrap());
    assert!(!repo.book_exists(9001).unwrap());
}

#[test]
fn create_then_find_returns_each_tuple_exactly() {
    let conn = open_db_in_memory().unwrap();
    let service = BookService::new(SqliteBookRepository::new(&conn));

    let cases: &[(i64, &str, &str, i64)] = &[
        (0, "Zero", "Nobody In Particular", 0),
        (1, "1984", "George Orwell", 3),
        (42, "Catch-22: A Novel!", "Joseph Heller", 7),
        (77, "Crime & Punishment (2nd ed.)", "Фёдор Достоевский", 12),
        (9_999_999, "百年孤独", "Gabriel García Márquez", 1_000_000),
        (i64::MAX, "It's \"quoted\"; DROP TABLE book;--", "O'Brien", i64::MAX),
    ];

    for &(id, title, author, qty) in cases {
        let book = Book::new(id, title, author, qty).unwrap();
        assert_eq!(service.add_book(&book).unwrap(), AddOutcome::Added(id));
        assert_eq!(service.find_book(id).unwrap(), Some(book), "round trip of id {id}");
    }
}

#[test]
fn repository_maps_primary_key_conflict_to_duplicate_id() {
    let conn = seeded();
    let repo = SqliteBookRepository::new(&conn);

    let clash = Book::new(3001, "Other", "Someone Else", 1).unwrap();
    let err = repo.create_book(&clash).unwrap_err();
    assert!(matches!(err, RepoError::DuplicateId(3001)));
}

#[test]
fn add_with_existing_id_leaves_row_untouched() {
    let conn = seeded();
    let service = BookService::new(SqliteBookRepository::new(&conn));
    let before = service.find_book(3001).unwrap().unwrap();

    let clash = Book::new(3001, "Other", "Someone Else", 1).unwrap();
    assert_eq!(
        service.add_book(&clash).unwrap(),
        AddOutcome::DuplicateId(3001)
    );
    assert_eq!(service.find_book(3001).unwrap(), Some(before));
}

#[test]
fn create_rejects_invalid_book_before_sql() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let mut invalid = dune();
    invalid.author = "HAL 9000".to_string();
    let err = repo.create_book(&invalid).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(repo.get_book(9000).unwrap(), None);
}

#[test]
fn update_only_quantity_keeps_title_and_author() {
    let conn = seeded();
    let service = BookService::new(SqliteBookRepository::new(&conn));
    service.add_book(&dune()).unwrap();

    let patch = BookPatch {
        qty: FieldUpdate::Set(10),
        ..BookPatch::default()
    };
    let outcome = service.update_book(9000, patch).unwrap();

    let expected = Book::new(9000, "Dune", "Frank Herbert", 10).unwrap();
    assert_eq!(outcome, UpdateOutcome::Updated(expected.clone()));
    assert_eq!(service.find_book(9000).unwrap(), Some(expected));
}

#[test]
fn update_with_blank_patch_reports_no_changes() {
    let conn = seeded();
    let service = BookService::new(SqliteBookRepository::new(&conn));
    let before = service.find_book(3002).unwrap().unwrap();

    let outcome = service.update_book(3002, BookPatch::default()).unwrap();
    assert_eq!(outcome, UpdateOutcome::NoChanges);
    assert_eq!(service.find_book(3002).unwrap(), Some(before));
}

#[test]
fn update_with_identical_values_reports_no_changes() {
    let conn = seeded();
    let service = BookService::new(SqliteBookRepository::new(&conn));

    let patch = BookPatch {
        title: FieldUpdate::Set("Alice in Wonderland".to_string()),
        qty: FieldUpdate::Set(12),
        ..BookPatch::default()
    };
    assert_eq!(
        service.update_book(3005, patch).unwrap(),
        UpdateOutcome::NoChanges
    );
}

#[test]
fn update_to_zero_quantity_is_written() {
    let conn = seeded();
    let service = BookService::new(SqliteBookRepository::new(&conn));

    let patch = BookPatch {
        qty: FieldUpdate::Set(0),
        ..BookPatch::default()
    };
    service.update_book(3003, patch).unwrap();
    assert_eq!(service.find_book(3003).unwrap().unwrap().qty, 0);
}

#[test]
fn update_missing_book_reports_not_found() {
    let conn = seeded();
    let service = BookService::new(SqliteBookRepository::new(&conn));

    let patch = BookPatch {
        title: FieldUpdate::Set("Ghost".to_string()),
        ..BookPatch::default()
    };
    assert_eq!(
        service.update_book(4242, patch.clone()).unwrap(),
        UpdateOutcome::NotFound(4242)
    );

    let repo = SqliteBookRepository::new(&conn);
    assert!(matches!(
        repo.update_book(4242, &patch).unwrap_err(),
        RepoError::NotFound(4242)
    ));
}

#[test]
fn repository_refuses_empty_patch() {
    let conn = seeded();
    let repo = SqliteBookRepository::new(&conn);
    assert!(matches!(
        repo.update_book(3001, &BookPatch::default()).unwrap_err(),
        RepoError::InvalidData(_)
    ));
}

#[test]
fn delete_missing_book_is_noop_for_other_rows() {
    let conn = seeded();
    let service = BookService::new(SqliteBookRepository::new(&conn));

    assert_eq!(
        service.delete_book(4242).unwrap(),
        DeleteOutcome::NothingToDelete(4242)
    );
    assert_eq!(
        service.delete_book(3004).unwrap(),
        DeleteOutcome::Deleted(3004)
    );
    assert_eq!(service.find_book(3004).unwrap(), None);

    let remaining: i64 = conn
        .query_row("SELECT COUNT(*) FROM book;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(remaining, 4);
}

#[test]
fn invalid_persisted_row_is_reported() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO book (id, title, author, qty) VALUES (7, 'Bad', 'R2D2', -1);",
        [],
    )
    .unwrap();

    let repo = SqliteBookRepository::new(&conn);
    assert!(matches!(
        repo.get_book(7).unwrap_err(),
        RepoError::InvalidData(_)
    ));
}
