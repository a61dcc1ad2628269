use bookstore_core::{Book, BookPatch, BookValidationError, FieldUpdate};

#[test]
fn new_trims_and_validates_fields() {
    let book = Book::new(9000, "  Dune ", " Frank Herbert", 5).unwrap();
    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Frank Herbert");

    assert_eq!(
        Book::new(-1, "Dune", "Frank Herbert", 5).unwrap_err(),
        BookValidationError::NegativeId
    );
    assert_eq!(
        Book::new(1, " ", "Frank Herbert", 5).unwrap_err(),
        BookValidationError::EmptyTitle
    );
    assert_eq!(
        Book::new(1, "Dune", "Frank 2", 5).unwrap_err(),
        BookValidationError::AuthorContainsDigit
    );
    assert_eq!(
        Book::new(1, "Dune", "Frank Herbert", -5).unwrap_err(),
        BookValidationError::NegativeQuantity
    );
}

#[test]
fn book_serialization_uses_column_names() {
    let book = Book::new(3004, "The Lord of the Rings", "J.R.R Tolkien", 37).unwrap();

    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["id"], 3004);
    assert_eq!(json["title"], "The Lord of the Rings");
    assert_eq!(json["author"], "J.R.R Tolkien");
    assert_eq!(json["qty"], 37);

    let decoded: Book = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, book);
}

#[test]
fn default_patch_is_empty_and_applies_nothing() {
    let patch = BookPatch::default();
    assert!(patch.is_empty());

    let mut book = Book::new(1, "Dune", "Frank Herbert", 5).unwrap();
    let before = book.clone();
    patch.apply_to(&mut book);
    assert_eq!(book, before);
}

#[test]
fn patch_validation_checks_only_set_fields() {
    let patch = BookPatch {
        qty: FieldUpdate::Set(-2),
        ..BookPatch::default()
    };
    assert_eq!(patch.validate(), Err(BookValidationError::NegativeQuantity));

    let patch = BookPatch {
        author: FieldUpdate::Set("Ursula K. Le Guin".to_string()),
        ..BookPatch::default()
    };
    assert!(patch.validate().is_ok());
}
