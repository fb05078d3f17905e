//! Upstream book payloads.

use serde_json::{json, Value};

/// A single catalog book.
pub fn mock_book(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "author": "Test Author",
        "description": format!("Description of {}", title),
    })
}

/// A list of catalog books from `(id, title)` pairs, in order.
pub fn mock_books(books: &[(i64, &str)]) -> Value {
    Value::Array(
        books
            .iter()
            .map(|(id, title)| mock_book(*id, title))
            .collect(),
    )
}
