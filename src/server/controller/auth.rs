use axum::extract::{rejection::FormRejection, Form, State};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{
    controller::util::auth::{redirect_if_authenticated, HOME_PATH, LOGIN_PATH},
    error::{api::ApiError, Error},
    form::{login::LoginForm, register::RegisterForm, FormErrors},
    model::{
        app::AppState,
        session::{flash::SessionFlash, SessionContext},
    },
    service::auth::{registration_error_message, AuthService},
    view::{PageContent, View},
};

/// Flash after a successful login.
pub const LOGIN_SUCCESS_MESSAGE: &str = "Logged in successfully!";
/// Flash when the upstream rejects the credentials.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Incorrect username or password.";
/// Flash when a login response cannot be read.
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Error processing the server response.";
/// Flash when the authentication service cannot be reached.
pub const AUTH_UNREACHABLE_MESSAGE: &str = "Could not connect to the authentication service.";
/// Flash after an account is created.
pub const REGISTER_SUCCESS_MESSAGE: &str = "Account created successfully. Please log in.";
/// Flash after logout.
pub const LOGOUT_MESSAGE: &str = "You have been logged out.";

fn login_content(form: &LoginForm, errors: FormErrors) -> PageContent {
    PageContent::Login {
        form: form.redisplay(),
        errors,
    }
}

fn register_content(form: &RegisterForm, errors: FormErrors) -> PageContent {
    PageContent::Register {
        form: form.redisplay(),
        errors,
    }
}

/// Login form
///
/// # Responses
/// - 200 (OK): Empty login form
/// - 303 (See Other): Session is already logged in, redirect to the catalog
/// - 500 (Internal Server Error): Session store failure
pub async fn login_page(session: Session) -> Result<View, Error> {
    let ctx = SessionContext::load(&session).await?;
    if let Some(redirect) = redirect_if_authenticated(&ctx) {
        return Ok(redirect);
    }

    View::render(&session, login_content(&LoginForm::default(), FormErrors::new())).await
}

/// Login form submission
///
/// Validates the form, exchanges the credentials for an upstream token and stores the token
/// together with the username in session.
///
/// # Responses
/// - 200 (OK): Invalid form or rejected login, form rendered again with errors
/// - 303 (See Other): Logged in, or already logged in; redirect to the catalog
/// - 500 (Internal Server Error): Session store failure
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<View, Error> {
    let ctx = SessionContext::load(&session).await?;
    if let Some(redirect) = redirect_if_authenticated(&ctx) {
        return Ok(redirect);
    }

    let form = form.map(|Form(form)| form).unwrap_or_default();
    let credentials = match form.validate() {
        Ok(credentials) => credentials,
        Err(errors) => return View::render(&session, login_content(&form, errors)).await,
    };

    let auth_service = AuthService::new(&state.api_client);

    match auth_service.login(&credentials).await {
        Ok(token) => {
            SessionContext::login(&session, &token, &credentials.username).await?;
            SessionFlash::success(&session, LOGIN_SUCCESS_MESSAGE).await?;

            tracing::info!(username = %credentials.username, "User logged in");

            Ok(View::redirect(HOME_PATH))
        }
        Err(e) => {
            let message = match &e {
                ApiError::Transport(_) => AUTH_UNREACHABLE_MESSAGE,
                ApiError::Malformed(_) => MALFORMED_RESPONSE_MESSAGE,
                ApiError::NotFound | ApiError::Upstream { .. } => INVALID_CREDENTIALS_MESSAGE,
            };

            tracing::warn!(username = %credentials.username, "Login failed: {}", e);

            SessionFlash::error(&session, message).await?;

            View::render(&session, login_content(&form, FormErrors::new())).await
        }
    }
}

/// Registration form
///
/// # Responses
/// - 200 (OK): Empty registration form
/// - 303 (See Other): Session is already logged in, redirect to the catalog
/// - 500 (Internal Server Error): Session store failure
pub async fn register_page(session: Session) -> Result<View, Error> {
    let ctx = SessionContext::load(&session).await?;
    if let Some(redirect) = redirect_if_authenticated(&ctx) {
        return Ok(redirect);
    }

    View::render(
        &session,
        register_content(&RegisterForm::default(), FormErrors::new()),
    )
    .await
}

/// Registration form submission
///
/// # Responses
/// - 200 (OK): Invalid form or rejected registration, form rendered again with errors
/// - 303 (See Other): Account created, redirect to login; or already logged in, redirect
///   to the catalog
/// - 500 (Internal Server Error): Session store failure
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<RegisterForm>, FormRejection>,
) -> Result<View, Error> {
    let ctx = SessionContext::load(&session).await?;
    if let Some(redirect) = redirect_if_authenticated(&ctx) {
        return Ok(redirect);
    }

    let form = form.map(|Form(form)| form).unwrap_or_default();
    let registration = match form.validate() {
        Ok(registration) => registration,
        Err(errors) => return View::render(&session, register_content(&form, errors)).await,
    };

    let auth_service = AuthService::new(&state.api_client);

    match auth_service.register(&registration).await {
        Ok(()) => {
            SessionFlash::success(&session, REGISTER_SUCCESS_MESSAGE).await?;

            tracing::info!(username = %registration.username, "User registered");

            Ok(View::redirect(LOGIN_PATH))
        }
        Err(e) => {
            tracing::warn!(username = %registration.username, "Registration failed: {}", e);

            SessionFlash::error(&session, registration_error_message(&e)).await?;

            View::render(&session, register_content(&form, FormErrors::new())).await
        }
    }
}

/// Logs the user out by dropping their session
///
/// # Responses
/// - 303 (See Other): Session dropped, redirect to the catalog
/// - 500 (Internal Server Error): Session store failure
pub async fn logout(session: Session) -> Result<View, Error> {
    SessionContext::logout(&session).await?;
    SessionFlash::info(&session, LOGOUT_MESSAGE).await?;

    Ok(View::redirect(HOME_PATH))
}
