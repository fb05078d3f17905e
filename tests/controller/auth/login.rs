//! Tests for the login endpoints.
//!
//! Covers the redirect for sessions that are already logged in, inline validation errors,
//! the session state written by a successful login and the flash message chosen for each
//! kind of upstream failure.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Form};
use eco::{
    model::flash::FlashLevel,
    server::{
        controller::auth::{
            login, login_page, AUTH_UNREACHABLE_MESSAGE, INVALID_CREDENTIALS_MESSAGE,
            LOGIN_SUCCESS_MESSAGE, MALFORMED_RESPONSE_MESSAGE,
        },
        form::{login::LoginForm, REQUIRED_MESSAGE},
        model::session::{flash::SessionFlash, SessionContext},
        view::PageContent,
    },
};
use serde_json::json;

use super::*;
use crate::util::unreachable_app_state;

fn form(username: &str, password: &str) -> Form<LoginForm> {
    Form(LoginForm {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Expect 200 with an empty form for an anonymous session
#[tokio::test]
async fn renders_form_for_anonymous_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let view = login_page(test.session.clone()).await.unwrap();

    let page = view.page().unwrap();
    match &page.content {
        PageContent::Login { form, errors } => {
            assert_eq!(form, &LoginForm::default());
            assert!(errors.is_empty());
        }
        other => panic!("unexpected content: {other:?}"),
    }
    assert_eq!(view.into_response().status(), StatusCode::OK);

    Ok(())
}

/// Expect a redirect home when already logged in
#[tokio::test]
async fn page_redirects_when_authenticated() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_token("test-token-123").build().await?;

    let view = login_page(test.session).await.unwrap();

    assert_eq!(view.location(), Some("/"));

    Ok(())
}

/// Expect a redirect home without calling upstream when already logged in
#[tokio::test]
async fn submit_redirects_when_authenticated() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_auth_token("test-token-123")
        .with_mock_endpoint(|server| {
            server
                .mock("POST", LOGIN_PATH)
                .with_status(200)
                .expect(0)
                .create()
        })
        .build()
        .await?;

    let view = login(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(form("", "")),
    )
    .await
    .unwrap();

    assert_eq!(view.location(), Some("/"));
    test.assert_mocks();

    Ok(())
}

/// Expect the token and username in session and a redirect home after login
#[tokio::test]
async fn stores_token_and_redirects_on_success() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(200, json!({ "token": "valid-token-456" }))
        .build()
        .await?;

    let view = login(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(form("testuser", "testpass123")),
    )
    .await
    .unwrap();

    assert_eq!(view.location(), Some("/"));
    let ctx = SessionContext::load(&test.session).await.unwrap();
    assert_eq!(ctx.auth_token.as_deref(), Some("valid-token-456"));
    assert_eq!(ctx.user_data.map(|u| u.username), Some("testuser".to_string()));
    let messages = SessionFlash::peek(&test.session).await.unwrap();
    assert_eq!(messages[0].level, FlashLevel::Success);
    assert_eq!(messages[0].text, LOGIN_SUCCESS_MESSAGE);
    test.assert_mocks();

    Ok(())
}

/// Expect the form again with an error flash and no token for rejected credentials
#[tokio::test]
async fn rerenders_on_invalid_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(401, json!({ "detail": "Invalid credentials" }))
        .build()
        .await?;

    let view = login(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(form("wronguser", "wrongpass")),
    )
    .await
    .unwrap();

    let page = view.page().unwrap();
    assert_eq!(page.messages.len(), 1);
    assert_eq!(page.messages[0].text, INVALID_CREDENTIALS_MESSAGE);
    match &page.content {
        PageContent::Login { form, .. } => {
            assert_eq!(form.username, "wronguser");
            assert!(form.password.is_empty());
        }
        other => panic!("unexpected content: {other:?}"),
    }
    let ctx = SessionContext::load(&test.session).await.unwrap();
    assert!(!ctx.is_authenticated());

    Ok(())
}

/// Expect field errors without calling upstream for an empty form
#[tokio::test]
async fn shows_field_errors_for_empty_form() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", LOGIN_PATH)
                .with_status(200)
                .expect(0)
                .create()
        })
        .build()
        .await?;

    let view = login(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(form("", "")),
    )
    .await
    .unwrap();

    match &view.page().unwrap().content {
        PageContent::Login { errors, .. } => {
            assert_eq!(errors.get("username"), [REQUIRED_MESSAGE]);
            assert_eq!(errors.get("password"), [REQUIRED_MESSAGE]);
        }
        other => panic!("unexpected content: {other:?}"),
    }
    test.assert_mocks();

    Ok(())
}

/// Expect the malformed response message for a 200 without a token
#[tokio::test]
async fn reports_malformed_response() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(200, json!({ "user": "testuser" }))
        .build()
        .await?;

    let view = login(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(form("testuser", "testpass123")),
    )
    .await
    .unwrap();

    let page = view.page().unwrap();
    assert_eq!(page.messages[0].text, MALFORMED_RESPONSE_MESSAGE);
    assert!(!SessionContext::load(&test.session).await.unwrap().is_authenticated());

    Ok(())
}

/// Expect the connection message when the authentication service is down
#[tokio::test]
async fn reports_unreachable_service() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let view = login(
        State(unreachable_app_state()),
        test.session.clone(),
        Ok(form("testuser", "testpass123")),
    )
    .await
    .unwrap();

    let page = view.page().unwrap();
    assert_eq!(page.messages.len(), 1);
    assert_eq!(page.messages[0].level, FlashLevel::Error);
    assert_eq!(page.messages[0].text, AUTH_UNREACHABLE_MESSAGE);

    Ok(())
}
