use axum::{http::StatusCode, response::IntoResponse};
use eco::{
    model::flash::FlashLevel,
    server::{
        controller::auth::{logout, LOGOUT_MESSAGE},
        model::session::{flash::SessionFlash, SessionContext},
    },
};

use super::*;

/// Expect 303 to the catalog with token and user data removed
#[tokio::test]
async fn clears_session_and_redirects() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logged_in_user("test-token-123", "testuser")
        .build()
        .await?;

    let view = logout(test.session.clone()).await.unwrap();

    assert_eq!(view.location(), Some("/"));
    let ctx = SessionContext::load(&test.session).await.unwrap();
    assert!(ctx.auth_token.is_none());
    assert!(ctx.user_data.is_none());

    let messages = SessionFlash::peek(&test.session).await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].level, FlashLevel::Info);
    assert_eq!(messages[0].text, LOGOUT_MESSAGE);

    Ok(())
}

/// Expect 303 even for a session that never logged in
#[tokio::test]
async fn redirects_without_session_data() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    Ok(())
}
