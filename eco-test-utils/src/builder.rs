//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use mockito::Mock;
use serde_json::{json, Value};

use crate::{
    constant::{SESSION_AUTH_TOKEN_KEY, SESSION_USER_DATA_KEY},
    error::TestError,
    TestContext,
};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up the session and the mock upstream books API.
/// Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Session data to insert
    auth_token: Option<String>,
    username: Option<String>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    books_endpoints: Vec<(Value, usize)>, // (books, expected_requests)
    book_endpoints: Vec<(i64, Value, usize)>, // (book_id, book, expected_requests)
    favorites_endpoints: Vec<(Value, usize)>,
    status_endpoints: Vec<(String, String, usize)>, // (method, path, status)
    toggle_favorite_endpoints: Vec<(i64, usize, Value)>, // (book_id, status, body)
    login_endpoints: Vec<(usize, Value)>,                // (status, body)
    register_endpoints: Vec<(usize, Value)>,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with an anonymous session and no mock endpoints.
    ///
    /// # Returns
    /// - `TestBuilder` - A new builder instance ready for configuration
    pub fn new() -> Self {
        Self {
            auth_token: None,
            username: None,
            mock_builders: Vec::new(),
            books_endpoints: Vec::new(),
            book_endpoints: Vec::new(),
            favorites_endpoints: Vec::new(),
            status_endpoints: Vec::new(),
            toggle_favorite_endpoints: Vec::new(),
            login_endpoints: Vec::new(),
            register_endpoints: Vec::new(),
        }
    }

    /// Store an upstream token in session, as a successful login would.
    ///
    /// # Arguments
    /// - `token` - Token sent upstream as `Authorization: Token {token}`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Store user display data in session.
    ///
    /// # Arguments
    /// - `username` - Username shown in the navbar
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_user(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Store both a token and user data, the session state right after login.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_logged_in_user(self, token: impl Into<String>, username: impl Into<String>) -> Self {
        self.with_auth_token(token).with_user(username)
    }

    /// Add mock catalog endpoint to the test server.
    ///
    /// Creates a mock HTTP endpoint at `/api/books/local/`, matching any query string, that
    /// returns `books`. The mock will verify it was called exactly `expected_requests` times.
    ///
    /// # Arguments
    /// - `books` - JSON body to return, usually an array of books
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_books_endpoint(mut self, books: Value, expected_requests: usize) -> Self {
        self.books_endpoints.push((books, expected_requests));
        self
    }

    /// Add mock book detail endpoint to the test server.
    ///
    /// Creates a mock HTTP endpoint at `/api/books/local/{book_id}/` that returns `book`.
    ///
    /// # Arguments
    /// - `book_id` - The book ID for the endpoint path
    /// - `book` - JSON body to return
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_book_endpoint(mut self, book_id: i64, book: Value, expected_requests: usize) -> Self {
        self.book_endpoints.push((book_id, book, expected_requests));
        self
    }

    /// Add mock favorites endpoint to the test server.
    ///
    /// Creates a mock HTTP endpoint at `/api/books/local/my_favorites/` that returns `books`.
    ///
    /// # Arguments
    /// - `books` - JSON body to return, usually an array of books
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_favorites_endpoint(mut self, books: Value, expected_requests: usize) -> Self {
        self.favorites_endpoints.push((books, expected_requests));
        self
    }

    /// Add a mock endpoint answering with a bare status code.
    ///
    /// Useful for upstream failures such as a 500 from any endpoint.
    ///
    /// # Arguments
    /// - `method` - HTTP method to match
    /// - `path` - Full request path to match, e.g. [`FAVORITES_PATH`](crate::constant::FAVORITES_PATH)
    /// - `status` - Status code to return
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_status_endpoint(
        mut self,
        method: impl Into<String>,
        path: impl Into<String>,
        status: usize,
    ) -> Self {
        self.status_endpoints
            .push((method.into(), path.into(), status));
        self
    }

    /// Add mock toggle favorite endpoint to the test server.
    ///
    /// Creates a mock HTTP endpoint at `/api/books/local/{book_id}/toggle_favorite/` expected
    /// to be called once.
    ///
    /// # Arguments
    /// - `book_id` - The book ID for the endpoint path
    /// - `status` - Status code to return
    /// - `body` - JSON body to return
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_toggle_favorite_endpoint(mut self, book_id: i64, status: usize, body: Value) -> Self {
        self.toggle_favorite_endpoints.push((book_id, status, body));
        self
    }

    /// Add mock login endpoint to the test server, expected to be called once.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_login_endpoint(mut self, status: usize, body: Value) -> Self {
        self.login_endpoints.push((status, body));
        self
    }

    /// Add mock registration endpoint to the test server, expected to be called once.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_register_endpoint(mut self, status: usize, body: Value) -> Self {
        self.register_endpoints.push((status, body));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Allows complete customization of mock endpoint behavior by providing direct access
    /// to the mockito ServerGuard. Use this for endpoints not covered by helper methods.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context by filling the session and creating all mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Inserts session data (token, user data)
    /// 2. Creates mock HTTP endpoints (custom endpoints first, then shortcuts)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::SessionError)` - Session insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Session data
        if let Some(token) = self.auth_token {
            setup.session.insert(SESSION_AUTH_TOKEN_KEY, token).await?;
        }

        if let Some(username) = self.username {
            setup
                .session
                .insert(SESSION_USER_DATA_KEY, json!({ "username": username }))
                .await?;
        }

        // 2. Create mock endpoints
        // Note: Custom endpoints are created first to allow proper sequential mockito matching
        // when tests need to create multiple mocks for the same path (e.g., error then success)
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (books, expected) in self.books_endpoints {
            mocks.push(setup.api().create_books_endpoint(&books, expected));
        }

        for (book_id, book, expected) in self.book_endpoints {
            mocks.push(setup.api().create_book_endpoint(book_id, &book, expected));
        }

        for (books, expected) in self.favorites_endpoints {
            mocks.push(setup.api().create_favorites_endpoint(&books, expected));
        }

        for (method, path, status) in self.status_endpoints {
            mocks.push(setup.api().create_status_endpoint(&method, &path, status));
        }

        for (book_id, status, body) in self.toggle_favorite_endpoints {
            mocks.push(
                setup
                    .api()
                    .create_toggle_favorite_endpoint(book_id, status, &body),
            );
        }

        for (status, body) in self.login_endpoints {
            mocks.push(setup.api().create_login_endpoint(status, &body));
        }

        for (status, body) in self.register_endpoints {
            mocks.push(setup.api().create_register_endpoint(status, &body));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
