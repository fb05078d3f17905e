//! Upstream paths and addresses shared across tests.

/// Base URL nothing listens on, for exercising transport failures.
///
/// Port 1 is reserved and refuses connections immediately on loopback.
pub static UNREACHABLE_API_URL: &str = "http://127.0.0.1:1";

/// Upstream catalog listing.
pub static BOOKS_PATH: &str = "/api/books/local/";

/// Upstream favorites of the token owner.
pub static FAVORITES_PATH: &str = "/api/books/local/my_favorites/";

/// Upstream token exchange.
pub static LOGIN_PATH: &str = "/api/books/login/";

/// Upstream account creation.
pub static REGISTER_PATH: &str = "/api/books/register/";

/// Session key of the upstream token.
pub(crate) static SESSION_AUTH_TOKEN_KEY: &str = "auth_token";

/// Session key of the cached user display data.
pub(crate) static SESSION_USER_DATA_KEY: &str = "user_data";
