//! Server-side HTML rendering.
//!
//! Pages are dioxus components rendered to a string with `dioxus-ssr`; there is no client
//! bundle, hydration or routing in the browser. Every response is one complete document.

pub mod components;
pub mod routes;

use dioxus::prelude::*;

use crate::{
    client::{
        components::Layout,
        routes::{BookDetail, Favorites, Home, Login, Register},
    },
    server::view::{Page, PageContent},
};

/// Renders `page` as a complete HTML document.
pub fn render(page: &Page) -> String {
    let content = match &page.content {
        PageContent::Index { books, search } => rsx! {
            Home { books: books.clone(), search: search.clone() }
        },
        PageContent::Login { form, errors } => rsx! {
            Login { form: form.clone(), errors: errors.clone() }
        },
        PageContent::Register { form, errors } => rsx! {
            Register { form: form.clone(), errors: errors.clone() }
        },
        PageContent::BookDetail { book, is_favorite } => rsx! {
            BookDetail {
                book: book.clone(),
                is_favorite: *is_favorite,
                logged_in: page.authenticated,
            }
        },
        PageContent::Favorites { books } => rsx! {
            Favorites { books: books.clone() }
        },
    };

    let document = dioxus_ssr::render_element(rsx! {
        Layout {
            title: page.title(),
            authenticated: page.authenticated,
            user: page.user.clone(),
            messages: page.messages.clone(),
            {content}
        }
    });

    format!("<!DOCTYPE html><html lang=\"en\">{}</html>", document)
}
