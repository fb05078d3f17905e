use dioxus_logger::tracing;
use reqwest::StatusCode;
use serde_json::json;

use crate::{
    model::book::{ActionResult, Book, BookRef},
    server::{
        error::api::ApiError, model::session::SessionContext, service::api::ApiClient,
    },
};

const BOOKS_ENDPOINT: &str = "local/";
const FAVORITES_ENDPOINT: &str = "local/my_favorites/";

/// Typed access to the upstream catalog and favorites endpoints.
pub struct BookService<'a> {
    api_client: &'a ApiClient,
}

impl<'a> BookService<'a> {
    /// Creates a new instance of [`BookService`]
    pub fn new(api_client: &'a ApiClient) -> Self {
        Self { api_client }
    }

    /// Lists the catalog, optionally filtered by the upstream `search` parameter.
    pub async fn list_books(
        &self,
        ctx: &SessionContext,
        search: Option<&str>,
    ) -> Result<Vec<Book>, ApiError> {
        let search = search.map(str::trim).filter(|s| !s.is_empty());

        match search {
            Some(search) => {
                let query = [("search", search)];
                self.api_client
                    .get(BOOKS_ENDPOINT, Some(ctx), Some(&query[..]))
                    .await
            }
            None => self.api_client.get(BOOKS_ENDPOINT, Some(ctx), None).await,
        }
    }

    /// Fetches a single book by id.
    pub async fn get_book(&self, book_id: i64, ctx: &SessionContext) -> Result<Book, ApiError> {
        self.api_client
            .get(&format!("local/{}/", book_id), Some(ctx), None)
            .await
    }

    /// Lists the favorites of the logged-in user.
    pub async fn my_favorites(&self, ctx: &SessionContext) -> Result<Vec<Book>, ApiError> {
        self.api_client.get(FAVORITES_ENDPOINT, Some(ctx), None).await
    }

    /// Whether `book_id` is among the user's favorites.
    ///
    /// Returns `false` for anonymous contexts and whenever the favorites cannot be fetched.
    pub async fn is_favorite(&self, book_id: i64, ctx: &SessionContext) -> bool {
        if !ctx.is_authenticated() {
            return false;
        }

        match self
            .api_client
            .get::<Vec<BookRef>>(FAVORITES_ENDPOINT, Some(ctx), None)
            .await
        {
            Ok(favorites) => favorites.iter().any(|favorite| favorite.id == book_id),
            Err(e) => {
                tracing::debug!(book_id = %book_id, "Treating book as not favorite: {}", e);
                false
            }
        }
    }

    /// Toggles the favorite flag of `book_id` for the logged-in user.
    ///
    /// # Returns
    /// - `Ok(ActionResult)` - upstream answered 200 or 201; `message` is `None` if the body
    ///   could not be decoded
    /// - `Err(ApiError::Upstream)` / `Err(ApiError::NotFound)` - any other status
    /// - `Err(ApiError::Transport)` - no response
    pub async fn toggle_favorite(
        &self,
        book_id: i64,
        ctx: &SessionContext,
    ) -> Result<ActionResult, ApiError> {
        let response = self
            .api_client
            .post(
                &format!("local/{}/toggle_favorite/", book_id),
                &json!({}),
                Some(ctx),
            )
            .await?;

        if !response.has_status(&[StatusCode::OK, StatusCode::CREATED]) {
            return Err(ApiError::from_status(response.status, &response.body));
        }

        Ok(response.json().unwrap_or_default())
    }
}
