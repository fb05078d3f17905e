use dioxus::prelude::*;

use crate::model::book::Book;

/// Catalog entry linking to the book detail page.
#[component]
pub fn BookCard(book: Book) -> Element {
    let byline = book.byline();

    rsx!(
        div {
            class: "card shadow-sm w-full",
            div {
                class: "card-body",
                h2 { class: "card-title",
                    a { href: "/book/{book.id}/", "{book.title}" }
                }
                if let Some(byline) = byline {
                    p { class: "text-sm", "{byline}" }
                }
            }
        }
    )
}
