//! HTTP routing.
//!
//! Paths keep their trailing slash; `/book/{id}/` only matches numeric ids because the
//! handlers extract `Path<i64>`.

use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router.
///
/// # Registered Endpoints
/// - `GET /` - Catalog, optional `?search=`
/// - `GET /login/`, `POST /login/` - Login form and submission; other methods show the form
/// - `GET /register/`, `POST /register/` - Registration form and submission; other methods
///   show the form
/// - `POST /logout/` - Drop the session
/// - `GET /book/{id}/` - Book detail
/// - `GET /favorites/` - Favorites of the logged-in user
/// - `POST /book/{id}/favorite/` - Toggle a favorite
///
/// # Returns
/// A `Router<AppState>`; the caller supplies the state and the session layer.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(api_client)).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(controller::book::index))
        .route(
            "/login/",
            get(controller::auth::login_page)
                .post(controller::auth::login)
                .fallback(controller::auth::login_page),
        )
        .route(
            "/register/",
            get(controller::auth::register_page)
                .post(controller::auth::register)
                .fallback(controller::auth::register_page),
        )
        .route("/logout/", post(controller::auth::logout))
        .route("/book/{id}/", get(controller::book::book_detail))
        .route("/favorites/", get(controller::book::favorites))
        .route(
            "/book/{id}/favorite/",
            post(controller::book::toggle_favorite),
        )
}
