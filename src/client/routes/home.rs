use dioxus::prelude::*;

use crate::{client::components::BookCard, model::book::Book};

#[component]
fn SearchBar(search: String) -> Element {
    rsx!(
        form {
            method: "get",
            action: "/",
            class: "flex gap-2 w-full",
            input {
                r#type: "search",
                name: "search",
                value: "{search}",
                placeholder: "Search by title or author",
                class: "input input-bordered grow",
            }
            button { r#type: "submit", class: "btn btn-primary",
                "Search"
            }
        }
    )
}

/// Catalog page.
#[component]
pub fn Home(books: Vec<Book>, search: String) -> Element {
    rsx!(
        div { class: "flex flex-col gap-4 w-full max-w-3xl",
            h1 { class: "text-2xl font-bold",
                "Catalog"
            }
            SearchBar { search: search }
            if books.is_empty() {
                p { "No books available." }
            }
            for book in books.iter() {
                BookCard { key: "{book.id}", book: book.clone() }
            }
        }
    )
}
