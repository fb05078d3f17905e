//! Tests for the toggle favorite endpoint.

use axum::extract::{Path, State};
use eco::{
    model::flash::FlashLevel,
    server::{
        controller::book::{
            toggle_favorite, TOGGLE_DEFAULT_MESSAGE, TOGGLE_ERROR_MESSAGE, TOGGLE_LOGIN_MESSAGE,
        },
        model::session::flash::SessionFlash,
    },
};
use serde_json::json;

use super::*;
use crate::util::unreachable_app_state;

/// Expect a redirect to login with a warning for an anonymous session
#[tokio::test]
async fn redirects_anonymous_to_login() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let view = toggle_favorite(State(test.into_app_state()), test.session.clone(), Path(1))
        .await
        .unwrap();

    assert_eq!(view.location(), Some("/login/"));
    let messages = SessionFlash::peek(&test.session).await.unwrap();
    assert_eq!(messages[0].level, FlashLevel::Warning);
    assert_eq!(messages[0].text, TOGGLE_LOGIN_MESSAGE);

    Ok(())
}

/// Expect the upstream message as a success flash and a redirect to the detail page
#[tokio::test]
async fn flashes_server_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_auth_token("token")
        .with_toggle_favorite_endpoint(5, 201, json!({ "message": "Added to favorites" }))
        .build()
        .await?;

    let view = toggle_favorite(State(test.into_app_state()), test.session.clone(), Path(5))
        .await
        .unwrap();

    assert_eq!(view.location(), Some("/book/5/"));
    let messages = SessionFlash::peek(&test.session).await.unwrap();
    assert_eq!(messages[0].level, FlashLevel::Success);
    assert_eq!(messages[0].text, "Added to favorites");
    test.assert_mocks();

    Ok(())
}

/// Expect the default message when upstream sends none
#[tokio::test]
async fn falls_back_to_default_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_auth_token("token")
        .with_toggle_favorite_endpoint(5, 200, json!({}))
        .build()
        .await?;

    toggle_favorite(State(test.into_app_state()), test.session.clone(), Path(5))
        .await
        .unwrap();

    let messages = SessionFlash::peek(&test.session).await.unwrap();
    assert_eq!(messages[0].text, TOGGLE_DEFAULT_MESSAGE);

    Ok(())
}

/// Expect an error flash and still a redirect to the detail page on failure
#[tokio::test]
async fn redirects_to_detail_on_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_auth_token("token")
        .with_toggle_favorite_endpoint(5, 500, json!({ "detail": "boom" }))
        .build()
        .await?;

    let view = toggle_favorite(State(test.into_app_state()), test.session.clone(), Path(5))
        .await
        .unwrap();

    assert_eq!(view.location(), Some("/book/5/"));
    let messages = SessionFlash::peek(&test.session).await.unwrap();
    assert_eq!(messages[0].level, FlashLevel::Error);
    assert_eq!(messages[0].text, TOGGLE_ERROR_MESSAGE);

    Ok(())
}

/// Expect a redirect to the detail page when upstream is unreachable
#[tokio::test]
async fn redirects_to_detail_when_unreachable() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_token("token").build().await?;

    let view = toggle_favorite(State(unreachable_app_state()), test.session.clone(), Path(9))
        .await
        .unwrap();

    assert_eq!(view.location(), Some("/book/9/"));

    Ok(())
}
