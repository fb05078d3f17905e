use dioxus::prelude::*;

use crate::model::book::Book;

#[component]
fn FavoriteButton(book_id: i64, is_favorite: bool) -> Element {
    let (label, class) = if is_favorite {
        ("Remove from favorites", "btn btn-outline")
    } else {
        ("Add to favorites", "btn btn-primary")
    };

    rsx!(
        form { method: "post", action: "/book/{book_id}/favorite/",
            button {
                r#type: "submit",
                class: "{class}",
                "{label}"
            }
        }
    )
}

/// Detail page of a single book.
#[component]
pub fn BookDetail(book: Book, is_favorite: bool, logged_in: bool) -> Element {
    let byline = book.byline();

    rsx!(
        div {
            class: "card shadow-sm w-full max-w-3xl",
            div {
                class: "card-body gap-4",
                h1 { class: "card-title text-2xl",
                    "{book.title}"
                }
                if let Some(byline) = byline {
                    p { class: "font-semibold", "{byline}" }
                }
                if let Some(description) = book.description.as_ref() {
                    p { "{description}" }
                }
                div { class: "card-actions",
                    if logged_in {
                        FavoriteButton { book_id: book.id, is_favorite: is_favorite }
                    } else {
                        a { href: "/login/", class: "link",
                            "Log in to save favorites."
                        }
                    }
                    a { href: "/", class: "btn btn-ghost",
                        "Back to catalog"
                    }
                }
            }
        }
    )
}
