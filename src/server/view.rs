//! What a controller hands back to axum: a rendered page or a redirect.

use axum::response::{Html, IntoResponse, Redirect, Response};
use tower_sessions::Session;

use crate::{
    client,
    model::{book::Book, flash::FlashMessage, user::UserData},
    server::{
        error::Error,
        form::{login::LoginForm, register::RegisterForm, FormErrors},
        model::session::{
            auth::SessionAuthToken, flash::SessionFlash, user::SessionUserData,
        },
    },
};

/// Body of a rendered page.
#[derive(Clone, Debug, PartialEq)]
pub enum PageContent {
    /// Catalog listing with the search that produced it.
    Index {
        /// Books to list, possibly empty
        books: Vec<Book>,
        /// Search term to keep in the search box
        search: String,
    },
    /// Login form, optionally with field errors from a failed submit.
    Login {
        /// Form values to redisplay, password always empty
        form: LoginForm,
        /// Field validation errors
        errors: FormErrors,
    },
    /// Registration form, optionally with field errors from a failed submit.
    Register {
        /// Form values to redisplay, password always empty
        form: RegisterForm,
        /// Field validation errors
        errors: FormErrors,
    },
    /// Single book with its favorite state.
    BookDetail {
        /// Book being shown
        book: Book,
        /// Whether the logged-in user has favorited the book
        is_favorite: bool,
    },
    /// Favorites of the logged-in user.
    Favorites {
        /// Favorited books, possibly empty
        books: Vec<Book>,
    },
}

/// Everything the renderer needs for one response.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    /// Whether the session holds an upstream token
    pub authenticated: bool,
    /// Logged-in user shown in the navbar
    pub user: Option<UserData>,
    /// Flash messages drained from the session for this render
    pub messages: Vec<FlashMessage>,
    /// Page body
    pub content: PageContent,
}

impl Page {
    /// Builds a page for `content`, consuming pending flash messages.
    pub async fn build(session: &Session, content: PageContent) -> Result<Self, Error> {
        let authenticated = SessionAuthToken::get(session).await?.is_some();
        let user = SessionUserData::get(session).await?;
        let messages = SessionFlash::take(session).await?;

        Ok(Self {
            authenticated,
            user,
            messages,
            content,
        })
    }

    /// Document title for the page.
    pub fn title(&self) -> String {
        match &self.content {
            PageContent::Index { .. } => "Catalog".to_string(),
            PageContent::Login { .. } => "Log in".to_string(),
            PageContent::Register { .. } => "Register".to_string(),
            PageContent::BookDetail { book, .. } => book.title.clone(),
            PageContent::Favorites { .. } => "My favorites".to_string(),
        }
    }
}

/// Outcome of a controller.
#[derive(Debug)]
pub enum View {
    /// Render the page as HTML with status 200.
    Render(Page),
    /// Redirect with 303 See Other, leaving queued flashes for the next render.
    Redirect(String),
}

impl View {
    /// Renders `content` for the current session.
    pub async fn render(session: &Session, content: PageContent) -> Result<Self, Error> {
        Ok(Self::Render(Page::build(session, content).await?))
    }

    /// Redirects to `path`.
    pub fn redirect(path: impl Into<String>) -> Self {
        Self::Redirect(path.into())
    }

    /// Redirect target, if this is a redirect.
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Redirect(path) => Some(path),
            Self::Render(_) => None,
        }
    }

    /// Rendered page, if this is a render.
    pub fn page(&self) -> Option<&Page> {
        match self {
            Self::Render(page) => Some(page),
            Self::Redirect(_) => None,
        }
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        match self {
            Self::Render(page) => Html(client::render(&page)).into_response(),
            Self::Redirect(path) => Redirect::to(&path).into_response(),
        }
    }
}
