use dioxus::prelude::*;

use crate::{
    client::components::{Messages, Navbar},
    model::{flash::FlashMessage, user::UserData},
};

const STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/daisyui@4/dist/full.min.css";

/// Head and body shared by every page; the `<html>` root is added by [`crate::client::render`].
#[component]
pub fn Layout(
    title: String,
    authenticated: bool,
    #[props(!optional)] user: Option<UserData>,
    messages: Vec<FlashMessage>,
    children: Element,
) -> Element {
    rsx!(
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{title} | Eco" }
            link { rel: "stylesheet", href: STYLESHEET }
        }
        body {
            Navbar { authenticated: authenticated, user: user }
            main {
                class: "min-h-screen p-4 flex flex-col items-center gap-4",
                Messages { messages: messages }
                {children}
            }
        }
    )
}
