//! Mock endpoints of the upstream books API.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{
    constant::{BOOKS_PATH, FAVORITES_PATH, LOGIN_PATH, REGISTER_PATH},
    fixtures::api::ApiFixtures,
};

impl<'a> ApiFixtures<'a> {
    /// Create a mock endpoint answering `method path` with `status` and a JSON body.
    pub fn create_json_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        body: &Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint answering `method path` with `status` and an empty body,
    /// expected once.
    pub fn create_status_endpoint(&mut self, method: &str, path: &str, status: usize) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .match_query(Matcher::Any)
            .with_status(status)
            .create()
    }

    /// Create the catalog listing endpoint `GET /api/books/local/`.
    pub fn create_books_endpoint(&mut self, books: &Value, expected_requests: usize) -> Mock {
        self.create_json_endpoint("GET", BOOKS_PATH, 200, books, expected_requests)
    }

    /// Create the book detail endpoint `GET /api/books/local/{id}/`.
    pub fn create_book_endpoint(
        &mut self,
        book_id: i64,
        book: &Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("{}{}/", BOOKS_PATH, book_id);

        self.create_json_endpoint("GET", &path, 200, book, expected_requests)
    }

    /// Create the favorites endpoint `GET /api/books/local/my_favorites/`.
    pub fn create_favorites_endpoint(&mut self, books: &Value, expected_requests: usize) -> Mock {
        self.create_json_endpoint("GET", FAVORITES_PATH, 200, books, expected_requests)
    }

    /// Create the toggle endpoint `POST /api/books/local/{id}/toggle_favorite/`, expected once.
    pub fn create_toggle_favorite_endpoint(
        &mut self,
        book_id: i64,
        status: usize,
        body: &Value,
    ) -> Mock {
        let path = format!("{}{}/toggle_favorite/", BOOKS_PATH, book_id);

        self.create_json_endpoint("POST", &path, status, body, 1)
    }

    /// Create the token exchange endpoint `POST /api/books/login/`, expected once.
    pub fn create_login_endpoint(&mut self, status: usize, body: &Value) -> Mock {
        self.create_json_endpoint("POST", LOGIN_PATH, status, body, 1)
    }

    /// Create the account creation endpoint `POST /api/books/register/`, expected once.
    pub fn create_register_endpoint(&mut self, status: usize, body: &Value) -> Mock {
        self.create_json_endpoint("POST", REGISTER_PATH, status, body, 1)
    }
}
