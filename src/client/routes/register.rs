use dioxus::prelude::*;

use crate::{
    client::components::FieldErrors,
    server::form::{register::RegisterForm, FormErrors},
};

#[component]
pub fn Register(form: RegisterForm, errors: FormErrors) -> Element {
    rsx!(
        div {
            class: "card shadow-sm w-full max-w-md",
            form {
                method: "post",
                action: "/register/",
                class: "card-body gap-2",
                h1 { class: "card-title", "Create an account" }
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
                    span { class: "label-text", "Email" }
                    input {
                        r#type: "email",
                        name: "email",
                        value: "{form.email}",
                        class: "input input-bordered",
                    }
                }
                FieldErrors { messages: errors.get("email").to_vec() }
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
                    "Register"
                }
                p { class: "text-sm",
                    "Already registered? "
                    a { href: "/login/", class: "link", "Log in" }
                }
            }
        }
    )
}
