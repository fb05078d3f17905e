//! Tests for the book detail endpoint.

use axum::extract::{Path, State};
use eco::{
    model::flash::FlashLevel,
    server::{
        controller::book::{book_detail, BOOK_NOT_FOUND_MESSAGE, CATALOG_UNREACHABLE_MESSAGE},
        model::session::flash::SessionFlash,
        view::PageContent,
    },
};
use serde_json::json;

use super::*;
use crate::util::unreachable_app_state;

/// Expect the book rendered as not favorite for an anonymous session
#[tokio::test]
async fn renders_book_for_anonymous_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_book_endpoint(1, factory::mock_book(1, "Dune"), 1)
        .with_favorites_endpoint(json!([{ "id": 1 }]), 0)
        .build()
        .await?;

    let view = book_detail(State(test.into_app_state()), test.session.clone(), Path(1))
        .await
        .unwrap();

    match &view.page().unwrap().content {
        PageContent::BookDetail { book, is_favorite } => {
            assert_eq!(book.title, "Dune");
            assert!(!is_favorite);
        }
        other => panic!("unexpected content: {other:?}"),
    }
    test.assert_mocks();

    Ok(())
}

/// Expect the favorite flag when the book is among the user's favorites
#[tokio::test]
async fn marks_favorite_for_logged_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logged_in_user("token", "reader")
        .with_book_endpoint(2, factory::mock_book(2, "Emma"), 1)
        .with_favorites_endpoint(json!([{ "id": 1 }, { "id": 2 }]), 1)
        .build()
        .await?;

    let view = book_detail(State(test.into_app_state()), test.session.clone(), Path(2))
        .await
        .unwrap();

    assert!(matches!(
        view.page().map(|p| &p.content),
        Some(PageContent::BookDetail { is_favorite: true, .. })
    ));
    test.assert_mocks();

    Ok(())
}

/// Expect no favorite flag when the user's favorites do not include the book
#[tokio::test]
async fn not_favorite_when_absent_from_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logged_in_user("token", "reader")
        .with_book_endpoint(2, factory::mock_book(2, "Emma"), 1)
        .with_favorites_endpoint(json!([{ "id": 1 }, { "id": 3 }]), 1)
        .build()
        .await?;

    let view = book_detail(State(test.into_app_state()), test.session.clone(), Path(2))
        .await
        .unwrap();

    assert!(matches!(
        view.page().map(|p| &p.content),
        Some(PageContent::BookDetail { is_favorite: false, .. })
    ));
    test.assert_mocks();

    Ok(())
}

/// Expect the page to render as not favorite when the favorites fetch fails
#[tokio::test]
async fn not_favorite_when_favorites_fail() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logged_in_user("token", "reader")
        .with_book_endpoint(2, factory::mock_book(2, "Emma"), 1)
        .with_status_endpoint("GET", FAVORITES_PATH, 500)
        .build()
        .await?;

    let view = book_detail(State(test.into_app_state()), test.session.clone(), Path(2))
        .await
        .unwrap();

    let page = view.page().unwrap();
    assert!(matches!(
        &page.content,
        PageContent::BookDetail { is_favorite: false, .. }
    ));
    assert!(page.messages.is_empty());

    Ok(())
}

/// Expect a redirect home with an error flash for a missing book
#[tokio::test]
async fn redirects_home_when_book_missing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_status_endpoint("GET", "/api/books/local/999/", 404)
        .build()
        .await?;

    let view = book_detail(State(test.into_app_state()), test.session.clone(), Path(999))
        .await
        .unwrap();

    assert_eq!(view.location(), Some("/"));
    let messages = SessionFlash::peek(&test.session).await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].level, FlashLevel::Error);
    assert_eq!(messages[0].text, BOOK_NOT_FOUND_MESSAGE);

    Ok(())
}

/// Expect the connection message when the catalog is down
#[tokio::test]
async fn redirects_home_when_unreachable() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let view = book_detail(State(unreachable_app_state()), test.session.clone(), Path(1))
        .await
        .unwrap();

    assert_eq!(view.location(), Some("/"));
    let messages = SessionFlash::peek(&test.session).await.unwrap();
    assert_eq!(messages[0].text, CATALOG_UNREACHABLE_MESSAGE);

    Ok(())
}
