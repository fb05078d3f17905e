use dioxus::prelude::*;

use crate::{
    client::components::FieldErrors,
    server::form::{login::LoginForm, FormErrors},
};

#[component]
pub fn Login(form: LoginForm, errors: FormErrors) -> Element {
    rsx!(
        div {
            class: "card shadow-sm w-full max-w-md",
            form {
                method: "post",
                action: "/login/",
                class: "card-body gap-2",
                h1 { class: "card-title", "Log in" }
                label { class: "form-control",
                    span { class: "label-text", "Username" }
                    input {
                        r#type: "text",
                        name: "username",
                        value: "{form.username}",
                        class: "input input-bordered",
                    }
                }
                FieldErrors { messages: errors.get("username").to_vec() }
                label { class: "form-control",
                    span { class: "label-text", "Password" }
                    input {
                        r#type: "password",
                        name: "password",
                        class: "input input-bordered",
                    }
                }
                FieldErrors { messages: errors.get("password").to_vec() }
                button { r#type: "submit", class: "btn btn-primary mt-2",
                    "Log in"
                }
                p { class: "text-sm",
                    "No account yet? "
                    a { href: "/register/", class: "link", "Register" }
                }
            }
        }
    )
}
