//! Tests for the catalog endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use eco::{
    model::flash::FlashLevel,
    server::{
        controller::book::{index, IndexParams},
        view::PageContent,
    },
};
use serde_json::json;

use super::*;
use crate::util::unreachable_app_state;

fn no_search() -> Query<IndexParams> {
    Query(IndexParams::default())
}

/// Expect every upstream book in order and no flash message
#[tokio::test]
async fn lists_books_without_messages() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_books_endpoint(json!([{ "id": 1, "title": "A" }, { "id": 2, "title": "B" }]), 1)
        .build()
        .await?;

    let view = index(State(test.into_app_state()), test.session.clone(), no_search())
        .await
        .unwrap();

    let page = view.page().unwrap();
    match &page.content {
        PageContent::Index { books, .. } => {
            let ids: Vec<i64> = books.iter().map(|b| b.id).collect();
            assert_eq!(ids, vec![1, 2]);
        }
        other => panic!("unexpected content: {other:?}"),
    }
    assert!(page.messages.is_empty());
    test.assert_mocks();

    let resp = view.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect books with odd optional fields to be listed instead of failing the catalog
#[tokio::test]
async fn lists_books_with_odd_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_books_endpoint(
            json!([{ "id": 1, "title": "A", "author": 7 }, { "id": 2, "title": null }]),
            1,
        )
        .build()
        .await?;

    let view = index(State(test.into_app_state()), test.session.clone(), no_search())
        .await
        .unwrap();

    let page = view.page().unwrap();
    assert!(matches!(&page.content, PageContent::Index { books, .. } if books.len() == 2));
    assert!(page.messages.is_empty());

    Ok(())
}

/// Expect an empty catalog and exactly one connection error when upstream is down
#[tokio::test]
async fn empty_with_error_when_unreachable() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let view = index(State(unreachable_app_state()), test.session.clone(), no_search())
        .await
        .unwrap();

    let page = view.page().unwrap();
    assert!(matches!(&page.content, PageContent::Index { books, .. } if books.is_empty()));
    assert_eq!(page.messages.len(), 1);
    assert_eq!(page.messages[0].level, FlashLevel::Error);
    assert!(page.messages[0].text.contains("Could not connect"));

    Ok(())
}

/// Expect an upstream error status to be reported like an outage
#[tokio::test]
async fn empty_with_error_on_upstream_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_status_endpoint("GET", BOOKS_PATH, 500)
        .build()
        .await?;

    let view = index(State(test.into_app_state()), test.session.clone(), no_search())
        .await
        .unwrap();

    let page = view.page().unwrap();
    assert_eq!(page.messages.len(), 1);

    Ok(())
}

/// Expect an empty upstream catalog to render without an error
#[tokio::test]
async fn empty_catalog_is_not_an_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_books_endpoint(json!([]), 1)
        .build()
        .await?;

    let view = index(State(test.into_app_state()), test.session.clone(), no_search())
        .await
        .unwrap();

    assert!(view.page().unwrap().messages.is_empty());

    Ok(())
}

/// Expect the search term to be forwarded upstream and kept in the page
#[tokio::test]
async fn forwards_search_term() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", BOOKS_PATH)
                .match_query(mockito::Matcher::UrlEncoded("search".into(), "dune".into()))
                .with_status(200)
                .with_body(factory::mock_books(&[(3, "Dune")]).to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let params = Query(IndexParams {
        search: Some(" dune ".to_string()),
    });
    let view = index(State(test.into_app_state()), test.session.clone(), params)
        .await
        .unwrap();

    match &view.page().unwrap().content {
        PageContent::Index { books, search } => {
            assert_eq!(books.len(), 1);
            assert_eq!(search, "dune");
        }
        other => panic!("unexpected content: {other:?}"),
    }
    test.assert_mocks();

    Ok(())
}

/// Expect the session token to be forwarded to the catalog
#[tokio::test]
async fn sends_session_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_auth_token("abc")
        .with_mock_endpoint(|server| {
            server
                .mock("GET", BOOKS_PATH)
                .match_header("authorization", "Token abc")
                .with_status(200)
                .with_body("[]")
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = index(State(test.into_app_state()), test.session.clone(), no_search()).await;

    assert!(result.is_ok());
    test.assert_mocks();

    Ok(())
}
