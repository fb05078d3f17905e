use axum::extract::{Path, Query, State};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    controller::util::auth::{require_login, HOME_PATH},
    error::Error,
    model::{
        app::AppState,
        session::{flash::SessionFlash, SessionContext},
    },
    service::book::BookService,
    view::{PageContent, View},
};

/// Flash when the catalog cannot be reached.
pub const CATALOG_UNREACHABLE_MESSAGE: &str = "Could not connect to the book catalog.";
/// Flash when a book detail cannot be loaded.
pub const BOOK_NOT_FOUND_MESSAGE: &str = "Book not found.";
/// Flash when an anonymous user opens the favorites page.
pub const FAVORITES_LOGIN_MESSAGE: &str = "You must log in to see your favorites.";
/// Flash when the favorites list cannot be loaded.
pub const FAVORITES_ERROR_MESSAGE: &str = "Error loading favorites.";
/// Flash when an anonymous user tries to toggle a favorite.
pub const TOGGLE_LOGIN_MESSAGE: &str = "Log in to save favorites.";
/// Flash for a successful toggle without a server message.
pub const TOGGLE_DEFAULT_MESSAGE: &str = "Action completed";
/// Flash when a toggle is rejected or fails.
pub const TOGGLE_ERROR_MESSAGE: &str = "Could not update favorites.";

/// Query string of the catalog page.
#[derive(Debug, Default, Deserialize)]
pub struct IndexParams {
    /// Search term forwarded to the upstream catalog
    pub search: Option<String>,
}

/// Catalog page
///
/// # Responses
/// - 200 (OK): Catalog, empty with an error flash when the upstream failed
/// - 500 (Internal Server Error): Session store failure
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<IndexParams>,
) -> Result<View, Error> {
    let ctx = SessionContext::load(&session).await?;
    let book_service = BookService::new(&state.api_client);

    let search = params.search.unwrap_or_default();

    let books = match book_service.list_books(&ctx, Some(&search)).await {
        Ok(books) => books,
        Err(e) => {
            tracing::warn!("Failed to load catalog: {}", e);
            SessionFlash::error(&session, CATALOG_UNREACHABLE_MESSAGE).await?;

            Vec::new()
        }
    };

    View::render(
        &session,
        PageContent::Index {
            books,
            search: search.trim().to_string(),
        },
    )
    .await
}

/// Book detail page
///
/// The favorite flag is only looked up for logged-in sessions and defaults to `false`
/// when the favorites cannot be fetched.
///
/// # Responses
/// - 200 (OK): Book detail
/// - 303 (See Other): Book could not be loaded, redirect to the catalog with an error flash
/// - 500 (Internal Server Error): Session store failure
pub async fn book_detail(
    State(state): State<AppState>,
    session: Session,
    Path(book_id): Path<i64>,
) -> Result<View, Error> {
    let ctx = SessionContext::load(&session).await?;
    let book_service = BookService::new(&state.api_client);

    let book = match book_service.get_book(book_id, &ctx).await {
        Ok(book) => book,
        Err(e) => {
            let message = if e.is_unreachable() {
                CATALOG_UNREACHABLE_MESSAGE
            } else {
                BOOK_NOT_FOUND_MESSAGE
            };

            tracing::warn!(book_id = %book_id, "Failed to load book: {}", e);
            SessionFlash::error(&session, message).await?;

            return Ok(View::redirect(HOME_PATH));
        }
    };

    let is_favorite = book_service.is_favorite(book_id, &ctx).await;

    View::render(&session, PageContent::BookDetail { book, is_favorite }).await
}

/// Favorites page of the logged-in user
///
/// # Responses
/// - 200 (OK): Favorites, empty with an error flash when the upstream failed
/// - 303 (See Other): Anonymous session, redirect to login with a warning flash
/// - 500 (Internal Server Error): Session store failure
pub async fn favorites(State(state): State<AppState>, session: Session) -> Result<View, Error> {
    let ctx = SessionContext::load(&session).await?;
    if let Some(redirect) = require_login(&session, &ctx, FAVORITES_LOGIN_MESSAGE).await? {
        return Ok(redirect);
    }

    let book_service = BookService::new(&state.api_client);

    let books = match book_service.my_favorites(&ctx).await {
        Ok(books) => books,
        Err(e) => {
            tracing::warn!("Failed to load favorites: {}", e);
            SessionFlash::error(&session, FAVORITES_ERROR_MESSAGE).await?;

            Vec::new()
        }
    };

    View::render(&session, PageContent::Favorites { books }).await
}

/// Adds or removes a book from the user's favorites
///
/// # Responses
/// - 303 (See Other): Redirect to the book detail page with a success or error flash
/// - 303 (See Other): Anonymous session, redirect to login with a warning flash
/// - 500 (Internal Server Error): Session store failure
pub async fn toggle_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(book_id): Path<i64>,
) -> Result<View, Error> {
    let ctx = SessionContext::load(&session).await?;
    if let Some(redirect) = require_login(&session, &ctx, TOGGLE_LOGIN_MESSAGE).await? {
        return Ok(redirect);
    }

    let book_service = BookService::new(&state.api_client);

    match book_service.toggle_favorite(book_id, &ctx).await {
        Ok(result) => {
            let message = result
                .message
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| TOGGLE_DEFAULT_MESSAGE.to_string());

            SessionFlash::success(&session, message).await?;
        }
        Err(e) => {
            tracing::warn!(book_id = %book_id, "Failed to toggle favorite: {}", e);
            SessionFlash::error(&session, TOGGLE_ERROR_MESSAGE).await?;
        }
    }

    Ok(View::redirect(format!("/book/{}/", book_id)))
}
