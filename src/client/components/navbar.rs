use dioxus::prelude::*;

use crate::model::user::UserData;

/// Top bar with the session-dependent links.
///
/// `authenticated` picks the links; `user` only supplies the greeting.
#[component]
pub fn Navbar(authenticated: bool, #[props(!optional)] user: Option<UserData>) -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                a { href: "/", class: "btn btn-ghost text-xl",
                    "Eco"
                }
                a { href: "/", class: "btn btn-ghost",
                    "Catalog"
                }
                if authenticated {
                    a { href: "/favorites/", class: "btn btn-ghost",
                        "My favorites"
                    }
                }
            }
            div {
                class: "navbar-end gap-2",
                if authenticated {
                    if let Some(user) = user {
                        p { class: "text-sm",
                            "Hello, {user.username}"
                        }
                    }
                    form { method: "post", action: "/logout/",
                        button {
                            r#type: "submit",
                            class: "btn btn-outline",
                            "Logout"
                        }
                    }
                } else {
                    a { href: "/login/", class: "btn btn-primary",
                        "Log in"
                    }
                    a { href: "/register/", class: "btn btn-outline",
                        "Register"
                    }
                }
            }
        }
    }
}
