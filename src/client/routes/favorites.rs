use dioxus::prelude::*;

use crate::{client::components::BookCard, model::book::Book};

#[component]
pub fn Favorites(books: Vec<Book>) -> Element {
    rsx!(
        div { class: "flex flex-col gap-4 w-full max-w-3xl",
            h1 { class: "text-2xl font-bold",
                "My favorites"
            }
            if books.is_empty() {
                p {
                    "You have no favorite books yet. "
                    a { href: "/", class: "link", "Browse the catalog" }
                }
            }
            for book in books.iter() {
                BookCard { key: "{book.id}", book: book.clone() }
            }
        }
    )
}
